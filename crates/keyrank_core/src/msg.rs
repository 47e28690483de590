#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the job-title input (full replacement text).
    TitleChanged(String),
    /// User edited the job-description input (full replacement text).
    DescriptionChanged(String),
    /// User activated the submit control.
    SubmitClicked,
    /// Engine delivered the outcome of a submission.
    AnalysisCompleted {
        request_id: crate::RequestId,
        outcome: crate::AnalysisOutcome,
    },
    /// User clicked a key-phrase panel to expand or collapse it.
    PanelToggled { index: usize },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
