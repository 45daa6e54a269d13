use crate::error::{GitDailyError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Gemini API client
///
/// One request per report, fail-fast: no retry, no client-side timeout.
/// Callers that need bounded latency impose it externally.
pub struct GeminiClient {
    api_key: String,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini API client
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { api_key, client })
    }

    /// Generate report text from a prompt
    ///
    /// Returns the model's text verbatim. Failures stay distinct: HTTP
    /// status errors, envelope-level errors, and empty responses each
    /// surface their own message.
    pub async fn generate(&self, prompt: String) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(GEMINI_API_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitDailyError::gemini_api(format!(
                "request failed with status {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown")
            )));
        }

        let envelope: GenerateResponse = response.json().await?;
        extract_text(envelope)
    }
}

/// Pull the generated text out of a response envelope
fn extract_text(envelope: GenerateResponse) -> Result<String> {
    if let Some(error) = envelope.error {
        return Err(GitDailyError::gemini_api(error.message));
    }

    envelope
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|part| part.text)
        .ok_or_else(|| GitDailyError::gemini_api("response contained no generated text"))
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}
