use crate::Analysis;

/// Upper bound the prompt puts on the reply; enforced again here because
/// the model is not guaranteed to honor it.
pub const MAX_KEY_PHRASES: usize = 10;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InterpretError {
    /// The reply text (after fence extraction) was not JSON. The
    /// offending text is kept for the log, never for the UI.
    #[error("reply was not valid JSON: {message}")]
    Parse { message: String, text: String },
    /// The reply was JSON but did not match the expected contract.
    #[error("reply JSON did not match the expected shape: {detail}")]
    Shape { detail: String },
}

/// Returns the inner text of the first triple-backtick fenced block
/// (optionally tagged `json`), or the trimmed input when no fence is
/// present. The model is prompted for bare JSON but may still wrap it
/// in markdown fences or surrounding prose.
pub fn extract_payload(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(start) = trimmed.find("```") else {
        return trimmed;
    };
    let mut inner = &trimmed[start + 3..];
    if let Some(rest) = inner.strip_prefix("json") {
        inner = rest;
    }
    match inner.find("```") {
        Some(end) => inner[..end].trim(),
        // Unterminated fence: take everything after the opening marker.
        None => inner.trim(),
    }
}

/// Parses the raw model reply into an [`Analysis`].
///
/// Two failure classes are kept distinct: text that is not JSON at all
/// ([`InterpretError::Parse`]) and JSON that misses the contract, e.g.
/// no `keyPhrases` array or an unknown priority label
/// ([`InterpretError::Shape`]).
pub fn parse_analysis(raw: &str) -> Result<Analysis, InterpretError> {
    let payload = extract_payload(raw);

    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|err| InterpretError::Parse {
            message: err.to_string(),
            text: payload.to_string(),
        })?;

    let mut analysis: Analysis =
        serde_json::from_value(value).map_err(|err| InterpretError::Shape {
            detail: err.to_string(),
        })?;

    if analysis.key_phrases.len() > MAX_KEY_PHRASES {
        log::warn!(
            "reply contained {} key phrases, keeping the first {}",
            analysis.key_phrases.len(),
            MAX_KEY_PHRASES
        );
        analysis.key_phrases.truncate(MAX_KEY_PHRASES);
    }

    Ok(analysis)
}
