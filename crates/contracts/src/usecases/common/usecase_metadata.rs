/// Identification and documentation metadata of a UseCase
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u101")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "ask_analyst")
    fn usecase_name() -> &'static str;

    /// Display name for the UI
    fn display_name() -> &'static str;

    /// UseCase description
    fn description() -> &'static str {
        ""
    }

    /// Full name like "u101_ask_analyst"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
