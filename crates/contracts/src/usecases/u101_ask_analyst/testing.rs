//! Recording fakes for the submission flow tests.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::payload::{PayloadPart, WebhookPayload};
use super::request::FileHandle;
use super::submission::{AnalysisSubmitter, Delay, TransportError, WebhookTransport};
use crate::shared::notification::{Notifier, Toast};
use crate::shared::settings::AnalystSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeFile {
    name: String,
    mime_type: String,
    size: u64,
}

impl FakeFile {
    pub fn new(name: &str, mime_type: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            size,
        }
    }
}

impl FileHandle for FakeFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// Side effects in the order they happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    InFlight(bool),
    Waited(u32),
    Sent(String),
    Toast(String),
}

type Log = Rc<RefCell<Vec<Event>>>;

pub struct RecordingNotifier {
    log: Log,
    toasts: Rc<RefCell<Vec<Toast>>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.log.borrow_mut().push(Event::Toast(toast.title.clone()));
        self.toasts.borrow_mut().push(toast);
    }
}

pub struct ScriptedTransport {
    log: Log,
    failure: Option<String>,
    sent: Rc<RefCell<Vec<HashMap<String, String>>>>,
}

#[async_trait(?Send)]
impl WebhookTransport for ScriptedTransport {
    type File = FakeFile;

    async fn send(
        &self,
        url: &str,
        payload: &WebhookPayload<FakeFile>,
    ) -> Result<(), TransportError> {
        self.log.borrow_mut().push(Event::Sent(url.to_string()));
        let fields = payload
            .parts()
            .into_iter()
            .filter_map(|part| match part {
                PayloadPart::Text { name, value } => Some((name.to_string(), value)),
                PayloadPart::File { .. } => None,
            })
            .collect();
        self.sent.borrow_mut().push(fields);
        match &self.failure {
            Some(message) => Err(TransportError::new(message.clone())),
            None => Ok(()),
        }
    }
}

pub struct RecordingDelay {
    log: Log,
}

#[async_trait(?Send)]
impl Delay for RecordingDelay {
    async fn wait(&self, ms: u32) {
        self.log.borrow_mut().push(Event::Waited(ms));
    }
}

pub struct Harness {
    log: Log,
    toasts: Rc<RefCell<Vec<Toast>>>,
    sent: Rc<RefCell<Vec<HashMap<String, String>>>>,
    failure: Option<String>,
}

impl Harness {
    pub fn ok() -> Self {
        Self {
            log: Rc::default(),
            toasts: Rc::default(),
            sent: Rc::default(),
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::ok()
        }
    }

    pub fn submitter(
        &self,
        settings: &AnalystSettings,
    ) -> AnalysisSubmitter<RecordingNotifier, ScriptedTransport, RecordingDelay> {
        AnalysisSubmitter::new(
            settings,
            RecordingNotifier {
                log: self.log.clone(),
                toasts: self.toasts.clone(),
            },
            ScriptedTransport {
                log: self.log.clone(),
                failure: self.failure.clone(),
                sent: self.sent.clone(),
            },
            RecordingDelay {
                log: self.log.clone(),
            },
        )
    }

    pub fn flag(&self) -> impl Fn(bool) {
        let log = self.log.clone();
        move |value| log.borrow_mut().push(Event::InFlight(value))
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn last_sent_fields(&self) -> HashMap<String, String> {
        self.sent.borrow().last().cloned().unwrap_or_default()
    }

    pub fn flag_transitions(&self) -> Vec<bool> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::InFlight(value) => Some(*value),
                _ => None,
            })
            .collect()
    }
}
