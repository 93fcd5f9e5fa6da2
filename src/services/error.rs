use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Everything a backend call can fail with
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport failure, no response received
    #[error("Network error: {0}")]
    Network(String),

    /// 401 that could not be recovered by a token refresh
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// Any other 4xx, with the backend's message and per-field errors
    #[error("Request rejected ({status}): {message}")]
    Validation {
        status: u16,
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Empty result for a by-id fetch
    #[error("Not found")]
    NotFound,

    /// 2xx body that does not match the expected model
    #[error("Parse error: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Classify a non-2xx response
    pub fn from_status(status: u16, body: &str) -> Self {
        let (message, fields) = extract_backend_message(body);
        match status {
            401 => ApiError::Auth {
                message: message.unwrap_or_else(|| "Session expired".to_string()),
            },
            404 => ApiError::NotFound,
            400..=499 => ApiError::Validation {
                status,
                message: message.unwrap_or_else(|| format!("HTTP {}", status)),
                fields,
            },
            _ => ApiError::Server {
                status,
                message: message.unwrap_or_else(|| format!("HTTP {}", status)),
            },
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    /// Backend-supplied text when there is one
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Auth { message }
            | ApiError::Validation { message, .. }
            | ApiError::Server { message, .. } => {
                if message.starts_with("HTTP ") {
                    None
                } else {
                    Some(message)
                }
            }
            _ => None,
        }
    }

    /// Text for an on-screen notification
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Pull a human message and field errors out of a DRF-style error body:
/// `{"detail": ...}`, `{"message": ...}` or `{"field": ["msg", ...]}`.
fn extract_backend_message(body: &str) -> (Option<String>, BTreeMap<String, Vec<String>>) {
    let mut fields = BTreeMap::new();
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => {
            let text = body.trim();
            let message = if text.is_empty() || text.starts_with('<') {
                None
            } else {
                Some(text.to_string())
            };
            return (message, fields);
        }
    };

    let Value::Object(map) = &value else {
        return (flatten_messages(&value).into_iter().next(), fields);
    };

    for (key, entry) in map {
        if key == "detail" || key == "message" {
            continue;
        }
        let messages = flatten_messages(entry);
        if !messages.is_empty() {
            fields.insert(key.clone(), messages);
        }
    }

    let mut message = None;
    for key in ["detail", "message"] {
        let Some(entry) = map.get(key) else { continue };
        let found = match entry {
            Value::Object(nested) => {
                // `{"detail": {"field": ["msg"]}}` wraps field errors one level down
                let mut first = None;
                for (field, inner) in nested {
                    let messages = flatten_messages(inner);
                    if first.is_none() {
                        first = messages.first().map(|m| format!("{}: {}", field, m));
                    }
                    fields.entry(field.clone()).or_insert(messages);
                }
                first
            }
            other => flatten_messages(other).into_iter().next(),
        };
        if found.is_some() {
            message = found;
            break;
        }
    }

    if message.is_none() {
        message = fields
            .iter()
            .next()
            .and_then(|(field, messages)| messages.first().map(|m| format!("{}: {}", field, m)));
    }

    (message, fields)
}

fn flatten_messages(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => vec![text.clone()],
        Value::Array(items) => items.iter().flat_map(flatten_messages).collect(),
        Value::Object(map) => map.values().flat_map(flatten_messages).collect(),
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}
