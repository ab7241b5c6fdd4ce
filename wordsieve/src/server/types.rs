use serde::{Deserialize, Serialize};

use super::handlers::ApiError;

/// Envelope wrapped around every response. `code` is 0 on success, 1 on failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i32,
    pub data: Option<T>,
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: 0,
            data: Some(data),
            message: String::new(),
        }
    }

    pub fn ok_with_message(data: T, message: String) -> Self {
        Self {
            code: 0,
            data: Some(data),
            message,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: 1,
            data: None,
            message: message.into(),
        }
    }
}

/// Body of replace, filter, validate and findAll.
#[derive(Debug, Default, Deserialize)]
pub struct TextRequest {
    #[serde(rename = "str", default)]
    pub text: Option<String>,
}

impl TextRequest {
    pub fn into_text(self) -> Result<String, ApiError> {
        match self.text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(ApiError::InvalidParameter),
        }
    }
}

/// Body of addWord and delWord.
#[derive(Debug, Default, Deserialize)]
pub struct WordRequest {
    #[serde(default)]
    pub word: Option<String>,
}

impl WordRequest {
    pub fn into_word(self) -> Result<String, ApiError> {
        match self.word {
            Some(word) if !word.trim().is_empty() => Ok(word),
            _ => Err(ApiError::InvalidParameter),
        }
    }
}

/// Validate answer: `result` is 1 for clean text, 0 otherwise, with the first word.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateData {
    pub result: i32,
    pub words: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddWordData {
    pub added: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DelWordData {
    pub removed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthData {
    pub status: String,
    pub words: usize,
    pub nodes: usize,
    pub fingerprint: String,
    pub version: String,
}
