use serde::Serialize;

/// Fixed system instruction for every analysis request.
pub const SYSTEM_PROMPT: &str = "You are a resume keyword prioritization system that takes in \
job descriptions and ranks the keywords with a priority score. Return the results as a JSON \
object.";

/// Builds the user message from the prompt template.
///
/// The template pins the reply contract: a `keyPhrases` array of at most
/// 10 items, vocabulary restricted to the description, emphasis cues
/// weighted, keywords capped at three words.
pub fn build_user_prompt(title: &str, description: &str) -> String {
    format!(
        "Analyze the following job description and provide keyword prioritization as a JSON \
object. The JSON should have an array called 'keyPhrases' containing at most 10 items, where \
each item is an object with properties: 'phrase' (string), 'priority' (string: HIGH, MEDIUM, \
or LOW), and 'keywords' (array of objects, each with 'word' and 'score' properties).\n\n\
Only use language found within the job description. Pay close attention to emphasis words \
like \"must be\", \"expert in\", \"strong knowledge\", \"experience with\", etc. A key phrase \
should be words that are relevant to the job function. A \"keyword\" should not exceed 3 \
words. Ensure that tools and technologies are considered as keywords. If the description \
yields more than 10 key phrases, keep only the most salient ones.\n\n\
Job Title: {title}\n\n\
Job Description:\n{description}"
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
}

/// Assembles the complete chat-completion payload for one submission.
pub fn build_chat_request(model: &str, title: &str, description: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_owned(),
        messages: vec![
            ChatMessage {
                role: "system".to_owned(),
                content: SYSTEM_PROMPT.to_owned(),
            },
            ChatMessage {
                role: "user".to_owned(),
                content: build_user_prompt(title, description),
            },
        ],
        temperature: 0.7,
    }
}
