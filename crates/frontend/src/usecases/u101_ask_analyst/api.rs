use async_trait::async_trait;
use contracts::usecases::u101_ask_analyst::{
    Delay, FileHandle, PayloadPart, TransportError, WebhookPayload, WebhookTransport,
};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::{FormData, RequestMode};

/// File picked in the browser
#[derive(Clone, Debug)]
pub struct BrowserFile(pub web_sys::File);

impl FileHandle for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// Multipart POST through `fetch` in `no-cors` mode.
///
/// The response is opaque: status and body are unreadable, so any response
/// counts as sent. Only a rejected fetch is reported as an error.
pub struct FetchTransport;

#[async_trait(?Send)]
impl WebhookTransport for FetchTransport {
    type File = BrowserFile;

    async fn send(
        &self,
        url: &str,
        payload: &WebhookPayload<BrowserFile>,
    ) -> Result<(), TransportError> {
        let form_data = build_form_data(payload)?;

        Request::post(url)
            .mode(RequestMode::NoCors)
            .body(form_data)
            .map_err(|e| TransportError::new(format!("Failed to create request: {}", e)))?
            .send()
            .await
            .map_err(|e| TransportError::new(format!("Fetch failed: {}", e)))?;

        Ok(())
    }
}

fn build_form_data(payload: &WebhookPayload<BrowserFile>) -> Result<FormData, TransportError> {
    let form_data = FormData::new()
        .map_err(|e| TransportError::new(format!("Failed to create form data: {:?}", e)))?;

    for part in payload.parts() {
        match part {
            PayloadPart::Text { name, value } => form_data
                .append_with_str(name, &value)
                .map_err(|e| TransportError::new(format!("Failed to append {}: {:?}", name, e)))?,
            PayloadPart::File {
                name,
                file,
                filename,
            } => form_data
                .append_with_blob_and_filename(name, &file.0, filename)
                .map_err(|e| TransportError::new(format!("Failed to append {}: {:?}", name, e)))?,
        }
    }

    Ok(form_data)
}

/// Timer-backed delay for the simulated analysis
pub struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn wait(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
