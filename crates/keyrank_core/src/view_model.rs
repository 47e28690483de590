use crate::{KeywordRow, Phase, PriorityLabel};

/// The only failure text ever shown to the user; diagnostic detail stays
/// in the log.
pub const GENERIC_ERROR_TEXT: &str = "An error occurred while processing your request.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub phase: Phase,
    pub title: String,
    pub description: String,
    pub can_submit: bool,
    pub submit_label: &'static str,
    pub panels: Vec<PanelView>,
    pub error: Option<&'static str>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub phrase: String,
    pub priority: PriorityLabel,
    pub expanded: bool,
    pub keywords: Vec<KeywordRow>,
}
