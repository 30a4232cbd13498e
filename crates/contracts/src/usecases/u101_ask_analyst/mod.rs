pub mod messages;
pub mod payload;
pub mod request;
pub mod submission;

#[cfg(test)]
mod testing;

pub use payload::{PayloadPart, WebhookPayload};
pub use request::{AnalysisForm, AnalysisRequest, FileHandle, FileInfo};
pub use submission::{
    AnalysisSubmitter, Delay, InFlightFlag, InFlightGuard, SubmitError, SubmitOutcome,
    TransportError, WebhookTransport,
};

use crate::usecases::common::UseCaseMetadata;

pub struct AskAnalyst;

impl UseCaseMetadata for AskAnalyst {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "ask_analyst"
    }

    fn display_name() -> &'static str {
        "Your AI Data Analyst"
    }

    fn description() -> &'static str {
        "Upload your data and ask any question. Get instant insights powered by AI."
    }
}
