//! OpenAI-compatible chat-completion translator.
//!
//! Works with OpenAI's API and any endpoint speaking the same
//! `/chat/completions` shape.

use async_trait::async_trait;
use babel_core::{config::TranslatorConfig, error::TranslateError, traits::Translator};
use reqwest::{header, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Translator backed by an OpenAI-compatible completion endpoint.
pub struct OpenAiTranslator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiTranslator {
    /// Create from config values.
    pub fn from_config(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| TranslateError::Encode(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Build the instruction sent to the model.
pub fn translation_prompt(target_language: &str, text: &str) -> String {
    format!(
        "Translate the following text to {target_language}. \
         Only respond with the translation, nothing else: {text}"
    )
}

#[derive(Serialize, Deserialize, Clone)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    fn translation(model: &str, target_language: &str, text: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: translation_prompt(target_language, text),
            }],
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Deserialize)]
pub(crate) struct ChatChoiceMessage {
    pub content: String,
}

impl ChatCompletionResponse {
    fn into_first_content(self) -> Result<String, TranslateError> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(TranslateError::NoChoices)
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    fn name(&self) -> &str {
        "openai"
    }

    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslateError> {
        let start = Instant::now();
        let body = ChatCompletionRequest::translation(&self.model, target_language, text);
        let payload = serde_json::to_vec(&body)
            .map_err(|e| TranslateError::Encode(format!("failed to serialize request: {e}")))?;

        let url = self.endpoint();
        debug!(
            "openai: POST {url} model={} target={target_language} chars={}",
            self.model,
            text.chars().count()
        );

        let resp = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_key)
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    TranslateError::Encode(e.to_string())
                } else {
                    TranslateError::Transport(e.to_string())
                }
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(TranslateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| TranslateError::Transport(format!("failed to read body: {e}")))?;
        let parsed: ChatCompletionResponse =
            serde_json::from_slice(&bytes).map_err(|e| TranslateError::Decode(e.to_string()))?;
        let translation = parsed.into_first_content()?;

        info!(
            "openai: translated to {target_language} in {}ms",
            start.elapsed().as_millis()
        );
        Ok(translation)
    }
}
