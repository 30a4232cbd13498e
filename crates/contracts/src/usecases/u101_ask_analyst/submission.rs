//! Submission flow of the analyst form.
//!
//! The flow is generic over its side effects so that it can run in the browser
//! (fetch, timers, signals, toasts) and in unit tests (recording fakes).

use async_trait::async_trait;
use thiserror::Error;

use super::messages;
use super::payload::WebhookPayload;
use super::request::{AnalysisForm, FileHandle};
use crate::shared::notification::Notifier;
use crate::shared::settings::{AnalystSettings, SubmissionMode};

/// The webhook call threw before completing (network, CORS, bad request).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("missing information")]
    MissingInformation,

    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed, nothing was started
    Rejected,
    /// Simulated analysis finished
    Completed,
    /// Webhook call returned without throwing. Says nothing about the server.
    Sent,
    /// Webhook call threw
    Failed,
}

/// Sends a payload to the webhook.
///
/// Implementations in opaque mode cannot see the HTTP status, so `Ok(())`
/// only means the request was dispatched.
#[async_trait(?Send)]
pub trait WebhookTransport {
    type File: FileHandle;

    async fn send(
        &self,
        url: &str,
        payload: &WebhookPayload<Self::File>,
    ) -> Result<(), TransportError>;
}

#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, ms: u32);
}

/// Receiver of in-flight transitions
pub trait InFlightFlag {
    fn set_in_flight(&self, value: bool);
}

impl<T: Fn(bool)> InFlightFlag for T {
    fn set_in_flight(&self, value: bool) {
        self(value)
    }
}

/// Holds the in-flight flag raised until dropped
pub struct InFlightGuard<'a, B: InFlightFlag + ?Sized> {
    flag: &'a B,
}

impl<'a, B: InFlightFlag + ?Sized> InFlightGuard<'a, B> {
    pub fn raise(flag: &'a B) -> Self {
        flag.set_in_flight(true);
        Self { flag }
    }
}

impl<B: InFlightFlag + ?Sized> Drop for InFlightGuard<'_, B> {
    fn drop(&mut self) {
        self.flag.set_in_flight(false);
    }
}

pub struct AnalysisSubmitter<N, T, D> {
    mode: SubmissionMode,
    webhook_url: String,
    simulated_delay_ms: u32,
    collect_email: bool,
    notifier: N,
    transport: T,
    delay: D,
}

impl<N, T, D> AnalysisSubmitter<N, T, D>
where
    N: Notifier,
    T: WebhookTransport,
    D: Delay,
{
    pub fn new(settings: &AnalystSettings, notifier: N, transport: T, delay: D) -> Self {
        Self {
            mode: settings.submission.mode,
            webhook_url: settings.submission.webhook_url.clone(),
            simulated_delay_ms: settings.submission.simulated_delay_ms,
            collect_email: settings.form.collect_email,
            notifier,
            transport,
            delay,
        }
    }

    /// Validates the form and runs the configured submission.
    ///
    /// Every outcome is reported through the notifier exactly once. The flag
    /// is raised only after validation passed and is lowered before the
    /// outcome toast, on every path.
    pub async fn submit<B>(&self, form: &AnalysisForm<T::File>, in_flight: &B) -> SubmitOutcome
    where
        B: InFlightFlag + ?Sized,
    {
        let request = match form.validate(self.collect_email) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("analysis request rejected: {}", e);
                self.notifier
                    .notify(messages::missing_information(self.collect_email));
                return SubmitOutcome::Rejected;
            }
        };

        let guard = InFlightGuard::raise(in_flight);

        match self.mode {
            SubmissionMode::Simulated => {
                log::info!(
                    "simulating analysis of {} ({} bytes) for {} ms",
                    request.file.name(),
                    request.file.size(),
                    self.simulated_delay_ms
                );
                self.delay.wait(self.simulated_delay_ms).await;
                drop(guard);
                self.notifier.notify(messages::analysis_complete());
                SubmitOutcome::Completed
            }
            SubmissionMode::Webhook => {
                let payload = WebhookPayload::from_request(request);
                log::info!(
                    "sending {} ({} bytes, {}) with a {} char question to webhook",
                    payload.file_info.name,
                    payload.file_info.size,
                    payload.file_info.effective_mime_type(),
                    payload.question.chars().count()
                );
                let result = self.transport.send(&self.webhook_url, &payload).await;
                drop(guard);
                match result {
                    Ok(()) => {
                        log::info!("webhook request dispatched");
                        self.notifier.notify(messages::request_sent());
                        SubmitOutcome::Sent
                    }
                    Err(e) => {
                        log::error!("webhook request failed: {}", SubmitError::from(e));
                        self.notifier.notify(messages::request_failed());
                        SubmitOutcome::Failed
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notification::ToastVariant;
    use crate::usecases::u101_ask_analyst::payload::field;
    use crate::usecases::u101_ask_analyst::testing::{Event, FakeFile, Harness};
    use futures::executor::block_on;

    fn webhook_settings(collect_email: bool) -> AnalystSettings {
        let mut settings = AnalystSettings::default();
        settings.submission.mode = SubmissionMode::Webhook;
        settings.submission.webhook_url = "https://hooks.example.com/webhook/test".to_string();
        settings.form.collect_email = collect_email;
        settings
    }

    fn sales_form() -> AnalysisForm<FakeFile> {
        AnalysisForm::new(
            Some(FakeFile::new("sales.csv", "text/csv", 4096)),
            "What are the trends?",
            "a@b.com",
        )
    }

    #[test]
    fn test_missing_file_never_touches_network() {
        for settings in [AnalystSettings::default(), webhook_settings(true), webhook_settings(false)] {
            for question in ["", "What are the trends?"] {
                for email in ["", "a@b.com"] {
                    let harness = Harness::ok();
                    let submitter = harness.submitter(&settings);
                    let form = AnalysisForm::<FakeFile>::new(None, question, email);

                    let outcome = block_on(submitter.submit(&form, &harness.flag()));

                    assert_eq!(outcome, SubmitOutcome::Rejected);
                    assert_eq!(harness.sent_count(), 0);
                    assert_eq!(harness.flag_transitions(), Vec::<bool>::new());
                    let toasts = harness.toasts();
                    assert_eq!(toasts.len(), 1);
                    assert_eq!(toasts[0].title, "Missing information");
                    assert_eq!(toasts[0].variant, ToastVariant::Destructive);
                }
            }
        }
    }

    #[test]
    fn test_whitespace_question_is_rejected() {
        let harness = Harness::ok();
        let submitter = harness.submitter(&webhook_settings(true));
        let form = AnalysisForm::new(Some(FakeFile::new("a.csv", "", 1)), " \t\n", "a@b.com");

        assert_eq!(block_on(submitter.submit(&form, &harness.flag())), SubmitOutcome::Rejected);
        assert_eq!(harness.sent_count(), 0);
    }

    #[test]
    fn test_blank_email_rejected_only_when_collected() {
        let form = AnalysisForm::new(Some(FakeFile::new("a.csv", "", 1)), "Why?", "  ");

        let harness = Harness::ok();
        let submitter = harness.submitter(&webhook_settings(true));
        assert_eq!(block_on(submitter.submit(&form, &harness.flag())), SubmitOutcome::Rejected);

        let harness = Harness::ok();
        let submitter = harness.submitter(&webhook_settings(false));
        assert_eq!(block_on(submitter.submit(&form, &harness.flag())), SubmitOutcome::Sent);
    }

    #[test]
    fn test_simulated_mode_waits_then_reports() {
        let harness = Harness::ok();
        let submitter = harness.submitter(&AnalystSettings::default());

        let outcome = block_on(submitter.submit(&sales_form(), &harness.flag()));

        assert_eq!(outcome, SubmitOutcome::Completed);
        assert_eq!(
            harness.events(),
            vec![
                Event::InFlight(true),
                Event::Waited(2000),
                Event::InFlight(false),
                Event::Toast("Analysis complete".to_string()),
            ]
        );
        assert_eq!(harness.sent_count(), 0);
    }

    #[test]
    fn test_webhook_payload_and_flag_window() {
        let harness = Harness::ok();
        let submitter = harness.submitter(&webhook_settings(true));

        let outcome = block_on(submitter.submit(&sales_form(), &harness.flag()));

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(
            harness.events(),
            vec![
                Event::InFlight(true),
                Event::Sent("https://hooks.example.com/webhook/test".to_string()),
                Event::InFlight(false),
                Event::Toast("Request sent".to_string()),
            ]
        );

        let sent = harness.last_sent_fields();
        assert_eq!(sent.get(field::FILENAME).map(String::as_str), Some("sales.csv"));
        assert_eq!(sent.get(field::QUESTION).map(String::as_str), Some("What are the trends?"));
        assert_eq!(sent.get(field::EMAIL).map(String::as_str), Some("a@b.com"));
        assert_eq!(sent.get(field::SIZE).map(String::as_str), Some("4096"));
    }

    #[test]
    fn test_transport_error_reports_once_without_retry() {
        let harness = Harness::failing("TypeError: Failed to fetch");
        let submitter = harness.submitter(&webhook_settings(false));

        let outcome = block_on(submitter.submit(&sales_form(), &harness.flag()));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(harness.sent_count(), 1);
        assert_eq!(harness.flag_transitions(), vec![true, false]);
        let destructive: Vec<_> = harness
            .toasts()
            .into_iter()
            .filter(|t| t.is_destructive())
            .collect();
        assert_eq!(destructive.len(), 1);
        assert_eq!(destructive[0].title, "Request failed");
    }

    #[test]
    fn test_resubmit_after_failure_is_a_new_request() {
        let harness = Harness::failing("offline");
        let submitter = harness.submitter(&webhook_settings(false));
        let flag = harness.flag();

        block_on(submitter.submit(&sales_form(), &flag));
        block_on(submitter.submit(&sales_form(), &flag));

        assert_eq!(harness.sent_count(), 2);
        assert_eq!(harness.flag_transitions(), vec![true, false, true, false]);
    }

    #[test]
    fn test_guard_lowers_flag_on_drop() {
        let harness = Harness::ok();
        let flag = harness.flag();
        {
            let _guard = InFlightGuard::raise(&flag);
            assert_eq!(harness.flag_transitions(), vec![true]);
        }
        assert_eq!(harness.flag_transitions(), vec![true, false]);
    }
}
