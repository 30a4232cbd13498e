//! User-facing toast texts of the analyst form.

use crate::shared::notification::Toast;

pub fn file_selected(file_name: &str) -> Toast {
    Toast::info("File uploaded", format!("{} is ready for analysis", file_name))
}

pub fn missing_information(collect_email: bool) -> Toast {
    let description = if collect_email {
        "Please upload a file, enter your question and your email"
    } else {
        "Please upload a file and enter your question"
    };
    Toast::destructive("Missing information", description)
}

pub fn analysis_complete() -> Toast {
    Toast::info("Analysis complete", "Your data has been analyzed successfully")
}

/// Shown whenever the webhook call did not throw. The response is opaque, so
/// this does not confirm that the workflow accepted the request.
pub fn request_sent() -> Toast {
    Toast::info("Request sent", "Your file and question were sent for analysis")
}

pub fn request_failed() -> Toast {
    Toast::destructive(
        "Request failed",
        "Could not reach the analysis service. Please try again.",
    )
}
