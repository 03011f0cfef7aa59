use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::config::Config;
use crate::curator::PlaylistGenerator;
use crate::error::{AppError, Result};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Text generation over the Gemini REST API.
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    model: String,
    api_base: Url,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: Client::new(),
            api_key: config.google_api_key.clone(),
            model: config.gemini_model.clone(),
            api_base: config.gemini_api_base.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.api_base.as_str().trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl PlaylistGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!("Requesting playlist from {}", self.model);

        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(redact)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Generation(describe_http_error(status, &error_text)));
        }

        let body = response.text().await.map_err(redact)?;
        let text = extract_text(&body)?;

        info!("Received {} bytes of playlist text from {}", text.len(), self.model);
        Ok(text)
    }
}

// reqwest errors print the request URL; keep it out of logs and user-facing reasons.
fn redact(err: reqwest::Error) -> AppError {
    AppError::Http(err.without_url())
}

/// Pull the first candidate's text out of a `generateContent` response body, trimmed.
fn extract_text(body: &str) -> Result<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)?;

    parsed
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .map(|text| text.trim().to_string())
        .ok_or_else(|| AppError::Generation("Gemini returned no text in its response".into()))
}

fn describe_http_error(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorWrapper>(body)
        .ok()
        .and_then(|wrapper| {
            let message = wrapper.error.message?;
            Some(match wrapper.error.status {
                Some(status_text) if !status_text.is_empty() => {
                    format!("{}: {}", status_text, message)
                }
                _ => message,
            })
        })
        .unwrap_or_else(|| body.to_string());

    format!("Gemini API returned {}: {}", status, detail)
}
