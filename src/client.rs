use log::{debug, error};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::error::AdviceError;
use crate::profile::ProfileInput;
use crate::prompt::build_prompt;

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

/// Client for the advice proxy endpoint.
///
/// Issues exactly one POST per call, with the prompt wrapped in the
/// `{"contents":[{"parts":[{"text":...}]}]}` body the proxy expects.
pub struct AdviceClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl AdviceClient {
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, AdviceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AdviceError::Transport(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Validate a profile, build its prompt and request advice in one
    /// step. Validation failure aborts locally; no request is made.
    pub fn advise(&self, profile: &ProfileInput) -> Result<String, AdviceError> {
        profile.validate()?;
        self.request_advice(&build_prompt(profile))
    }

    /// Send the prompt and extract the answer text from the response
    pub fn request_advice(&self, prompt: &str) -> Result<String, AdviceError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!("sending advice request to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|e| AdviceError::Transport(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AdviceError::Transport(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            error!("advice endpoint returned HTTP {}: {}", status, body);
            return Err(AdviceError::Transport(format!("HTTP {}: {}", status, body)));
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| AdviceError::Format(format!("response is not JSON: {}", e)))?;

        extract_answer(&value)
    }
}

/// Extract the answer text from a response body, trying the known shapes
/// in priority order: top-level `text`, top-level `answer`, an `error`
/// field, then the first candidate's content parts concatenated in order.
pub fn extract_answer(value: &Value) -> Result<String, AdviceError> {
    if let Some(text) = value["text"].as_str() {
        if !text.is_empty() {
            return Ok(text.to_string());
        }
    }

    if let Some(text) = value["answer"].as_str() {
        if !text.is_empty() {
            return Ok(text.to_string());
        }
    }

    // Upstream error report; either a bare string or {"error":{"message":..}}
    if let Some(err) = value.get("error") {
        let message = err
            .as_str()
            .or_else(|| err["message"].as_str())
            .unwrap_or("unknown upstream error");
        return Err(AdviceError::Format(format!("service reported: {}", message)));
    }

    if let Some(parts) = value["candidates"][0]["content"]["parts"].as_array() {
        let text: String = parts
            .iter()
            .filter_map(|part| part["text"].as_str())
            .collect();
        if !text.is_empty() {
            return Ok(text);
        }
    }

    Err(AdviceError::Format(format!(
        "no recognized answer field in response: {}",
        value
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn top_level_text_wins() {
        let body = json!({ "text": "X", "answer": "shadowed" });
        assert_eq!(extract_answer(&body).unwrap(), "X");
    }

    #[test]
    fn answer_field_is_second_choice() {
        let body = json!({ "answer": "become a pilot" });
        assert_eq!(extract_answer(&body).unwrap(), "become a pilot");
    }

    #[test]
    fn empty_text_falls_through_to_answer() {
        let body = json!({ "text": "", "answer": "Y" });
        assert_eq!(extract_answer(&body).unwrap(), "Y");
    }

    #[test]
    fn candidate_parts_concatenate_in_order() {
        let body = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "A" }, { "text": "B" } ] } }
            ]
        });
        assert_eq!(extract_answer(&body).unwrap(), "AB");
    }

    #[test]
    fn only_the_first_candidate_is_read() {
        let body = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "first" } ] } },
                { "content": { "parts": [ { "text": "second" } ] } }
            ]
        });
        assert_eq!(extract_answer(&body).unwrap(), "first");
    }

    #[test]
    fn error_string_becomes_format_error() {
        let body = json!({ "error": "quota exceeded" });
        let err = extract_answer(&body).unwrap_err();
        assert!(matches!(err, AdviceError::Format(_)));
        assert!(err.detail().contains("quota exceeded"));
    }

    #[test]
    fn nested_error_message_is_extracted() {
        let body = json!({ "error": { "message": "model overloaded" } });
        let err = extract_answer(&body).unwrap_err();
        assert!(err.detail().contains("model overloaded"));
    }

    #[test]
    fn empty_body_is_a_format_error() {
        let err = extract_answer(&json!({})).unwrap_err();
        assert!(matches!(err, AdviceError::Format(_)));
    }

    #[test]
    fn request_body_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
    }
}
