use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::request::build_chat_request;
use crate::{AnalysisFailure, FailureKind, RequestId};

pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Chat-completion endpoint; overridable for tests and gateways.
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: OPENAI_CHAT_COMPLETIONS_URL.to_string(),
            api_key: String::new(),
            model: "gpt-3.5-turbo".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Only `choices[0].message.content` is consumed from the reply envelope.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issues one chat-completion request and returns the raw reply text.
    async fn complete(
        &self,
        request_id: RequestId,
        title: &str,
        description: &str,
    ) -> Result<String, AnalysisFailure>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCompletionClient {
    settings: ClientSettings,
}

impl ReqwestCompletionClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, AnalysisFailure> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| AnalysisFailure::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl CompletionClient for ReqwestCompletionClient {
    async fn complete(
        &self,
        request_id: RequestId,
        title: &str,
        description: &str,
    ) -> Result<String, AnalysisFailure> {
        let payload = build_chat_request(&self.settings.model, title, description);
        let client = self.build_client()?;

        log::debug!("request {request_id}: posting completion for title {title:?}");
        let response = client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisFailure::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let reply: ChatResponse = response.json().await.map_err(map_reqwest_error)?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        match content {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(AnalysisFailure::new(
                FailureKind::EmptyReply,
                "completion carried no reply text",
            )),
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> AnalysisFailure {
    if err.is_timeout() {
        return AnalysisFailure::new(FailureKind::Timeout, err.to_string());
    }
    AnalysisFailure::new(FailureKind::Network, err.to_string())
}
