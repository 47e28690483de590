//! Keyrank engine: completion request pipeline and effect execution.
mod client;
mod engine;
mod interpret;
mod request;
mod types;

pub use client::{
    ClientSettings, CompletionClient, ReqwestCompletionClient, OPENAI_CHAT_COMPLETIONS_URL,
};
pub use engine::EngineHandle;
pub use interpret::{extract_payload, parse_analysis, InterpretError, MAX_KEY_PHRASES};
pub use request::{build_chat_request, build_user_prompt, ChatMessage, ChatRequest, SYSTEM_PROMPT};
pub use types::{
    Analysis, AnalysisFailure, EngineEvent, FailureKind, KeyPhrase, Keyword, Priority, RequestId,
    Score,
};
