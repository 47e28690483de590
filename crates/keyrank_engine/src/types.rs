use std::fmt;

use serde::Deserialize;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<Analysis, AnalysisFailure>,
    },
}

/// Decoded reply of one keyword analysis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Analysis {
    #[serde(rename = "keyPhrases")]
    pub key_phrases: Vec<KeyPhrase>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyPhrase {
    pub phrase: String,
    pub priority: Priority,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Keyword {
    pub word: String,
    #[serde(default)]
    pub score: Score,
}

/// Relevance score as the model sends it: usually a number, sometimes a
/// quoted string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Number(f64),
    Text(String),
}

impl Default for Score {
    fn default() -> Self {
        Score::Number(0.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Number(value) if value.fract() == 0.0 => write!(f, "{value:.0}"),
            Score::Number(value) => write!(f, "{value}"),
            Score::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl AnalysisFailure {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for AnalysisFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Timeout,
    Network,
    /// The endpoint answered but carried no usable reply text.
    EmptyReply,
    /// The reply text was not JSON.
    Parse,
    /// The reply was JSON but not the expected shape.
    Shape,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::EmptyReply => write!(f, "empty reply"),
            FailureKind::Parse => write!(f, "unparseable reply"),
            FailureKind::Shape => write!(f, "unexpected reply shape"),
        }
    }
}
