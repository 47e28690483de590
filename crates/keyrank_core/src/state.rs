use crate::view_model::{AppViewModel, PanelView, GENERIC_ERROR_TEXT};

pub type RequestId = u64;

/// Lifecycle of the single submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    ShowingResults,
    ShowingError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityLabel {
    High,
    Medium,
    Low,
}

impl PriorityLabel {
    pub fn label(&self) -> &'static str {
        match self {
            PriorityLabel::High => "HIGH",
            PriorityLabel::Medium => "MEDIUM",
            PriorityLabel::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRow {
    pub word: String,
    /// Display-ready score; the remote model emits numbers or strings.
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseRow {
    pub phrase: String,
    pub priority: PriorityLabel,
    pub keywords: Vec<KeywordRow>,
}

/// Outcome of one remote analysis, as delivered to the state machine.
///
/// Failure carries no detail: diagnostics are logged where the engine
/// event is translated, and the user only ever sees the generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Success { phrases: Vec<PhraseRow> },
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    title: String,
    description: String,
    phase: Phase,
    phrases: Vec<PhraseRow>,
    expanded: Vec<bool>,
    current_request: Option<RequestId>,
    issued_requests: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn panel_count(&self) -> usize {
        self.phrases.len()
    }

    /// Mirrors the submit control: disabled exactly while a request is
    /// in flight.
    pub fn can_submit(&self) -> bool {
        self.phase != Phase::Loading
    }

    /// The required-field constraint on the form.
    pub fn has_required_inputs(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    pub(crate) fn set_title(&mut self, text: String) {
        if self.title != text {
            self.title = text;
            self.dirty = true;
        }
    }

    pub(crate) fn set_description(&mut self, text: String) {
        if self.description != text {
            self.description = text;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_submission(&mut self) -> RequestId {
        self.issued_requests += 1;
        let request_id = self.issued_requests;
        self.current_request = Some(request_id);
        self.phase = Phase::Loading;
        self.dirty = true;
        request_id
    }

    pub(crate) fn apply_outcome(&mut self, request_id: RequestId, outcome: AnalysisOutcome) {
        if self.current_request != Some(request_id) {
            // Superseded submission; only the live request may leave Loading.
            return;
        }
        self.current_request = None;
        match outcome {
            AnalysisOutcome::Success { phrases } => {
                self.expanded = vec![false; phrases.len()];
                self.phrases = phrases;
                self.phase = Phase::ShowingResults;
            }
            AnalysisOutcome::Failed => {
                self.phrases.clear();
                self.expanded.clear();
                self.phase = Phase::ShowingError;
            }
        }
        self.dirty = true;
    }

    pub(crate) fn toggle_panel(&mut self, index: usize) {
        if let Some(flag) = self.expanded.get_mut(index) {
            *flag = !*flag;
            self.dirty = true;
        }
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn view(&self) -> AppViewModel {
        let panels = self
            .phrases
            .iter()
            .zip(self.expanded.iter())
            .map(|(row, expanded)| PanelView {
                phrase: row.phrase.clone(),
                priority: row.priority,
                expanded: *expanded,
                keywords: row.keywords.clone(),
            })
            .collect();

        AppViewModel {
            phase: self.phase,
            title: self.title.clone(),
            description: self.description.clone(),
            can_submit: self.can_submit(),
            submit_label: if self.phase == Phase::Loading {
                "Processing..."
            } else {
                "Submit"
            },
            panels,
            error: (self.phase == Phase::ShowingError).then_some(GENERIC_ERROR_TEXT),
            dirty: self.dirty,
        }
    }
}
