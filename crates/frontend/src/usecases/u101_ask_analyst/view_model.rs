use super::api::{BrowserFile, FetchTransport, TimerDelay};
use crate::shared::toast::ToastService;
use contracts::shared::notification::Notifier;
use contracts::shared::settings::AnalystSettings;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_ask_analyst::{
    messages, AnalysisForm, AnalysisSubmitter, AskAnalyst, FileHandle,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel of the upload-and-ask form
#[derive(Clone, Copy)]
pub struct AskAnalystViewModel {
    pub file: RwSignal<Option<BrowserFile>, LocalStorage>,
    pub question: RwSignal<String>,
    pub email: RwSignal<String>,
    pub is_submitting: RwSignal<bool>,
    pub collect_email: bool,
    toasts: ToastService,
}

impl AskAnalystViewModel {
    pub fn new(collect_email: bool, toasts: ToastService) -> Self {
        Self {
            file: RwSignal::new_local(None),
            question: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            is_submitting: RwSignal::new(false),
            collect_email,
            toasts,
        }
    }

    pub fn file_name(&self) -> Signal<Option<String>> {
        let file = self.file;
        Signal::derive(move || file.with(|f| f.as_ref().map(|f| f.name())))
    }

    /// Replace the selected file. Type and size are not checked.
    pub fn select_file(&self, file: web_sys::File) {
        let file = BrowserFile(file);
        log::debug!(
            "{}: file selected: {} ({} bytes)",
            AskAnalyst::full_name(),
            file.name(),
            file.size()
        );
        self.toasts.notify(messages::file_selected(&file.name()));
        self.file.set(Some(file));
    }

    fn form(&self) -> AnalysisForm<BrowserFile> {
        AnalysisForm::new(self.file.get(), self.question.get(), self.email.get())
    }

    fn form_untracked(&self) -> AnalysisForm<BrowserFile> {
        AnalysisForm::new(
            self.file.get_untracked(),
            self.question.get_untracked(),
            self.email.get_untracked(),
        )
    }

    /// Submit button state: the form would pass validation and nothing is in flight
    pub fn can_submit(&self) -> impl Fn() -> bool + Copy + 'static {
        let vm = *self;
        move || vm.form().is_complete(vm.collect_email) && !vm.is_submitting.get()
    }

    /// Validate and submit in the background; the outcome arrives as a toast
    pub fn submit_command(&self, settings: &'static AnalystSettings) {
        let form = self.form_untracked();
        let vm = *self;
        spawn_local(async move {
            let submitter = AnalysisSubmitter::new(settings, vm.toasts, FetchTransport, TimerDelay);
            let in_flight = move |value: bool| vm.is_submitting.set(value);
            let outcome = submitter.submit(&form, &in_flight).await;
            log::debug!("{}: submission finished: {:?}", AskAnalyst::full_name(), outcome);
        });
    }
}
