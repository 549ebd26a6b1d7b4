use serde::Deserialize;

use super::{AdapterError, ResponseShape};

// --- chat completion: choices[0].message.content ---

#[derive(Debug, Deserialize)]
struct ChatResponse { choices: Vec<Choice> }

#[derive(Debug, Deserialize)]
struct Choice { message: ChatMessage }

#[derive(Debug, Deserialize)]
struct ChatMessage { #[serde(default)] content: Option<String> }

// --- candidate parts: candidates[0].content.parts[0].text ---

#[derive(Debug, Deserialize)]
struct CandidateResponse { candidates: Vec<Candidate> }

#[derive(Debug, Deserialize)]
struct Candidate { content: Content }

#[derive(Debug, Deserialize)]
struct Content { parts: Vec<Part> }

#[derive(Debug, Deserialize)]
struct Part { #[serde(default)] text: Option<String> }

/// Unwraps the generated text from a provider reply body.
pub fn decode(shape: ResponseShape, body: &str) -> Result<String, AdapterError> {
    let mismatch = |what: &str| AdapterError::ShapeMismatch(what.to_string());
    match shape {
        ResponseShape::ChatCompletion => {
            let parsed: ChatResponse = serde_json::from_str(body)
                .map_err(|e| AdapterError::ShapeMismatch(format!("chat completion: {e}")))?;
            parsed.choices.into_iter().next()
                .ok_or_else(|| mismatch("chat completion: no choices"))?
                .message.content
                .ok_or_else(|| mismatch("chat completion: message has no content"))
        }
        ResponseShape::CandidateParts => {
            let parsed: CandidateResponse = serde_json::from_str(body)
                .map_err(|e| AdapterError::ShapeMismatch(format!("candidate parts: {e}")))?;
            parsed.candidates.into_iter().next()
                .ok_or_else(|| mismatch("candidate parts: no candidates"))?
                .content.parts.into_iter().next()
                .ok_or_else(|| mismatch("candidate parts: no parts"))?
                .text
                .ok_or_else(|| mismatch("candidate parts: first part has no text"))
        }
    }
}
