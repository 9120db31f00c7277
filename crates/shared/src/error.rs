use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::{display_text, is_truthy};

/// Application error body. The server is not consistent about its shape:
/// some endpoints answer `{"error": "..."}`, others dump an arbitrary object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: Value,
}

impl ApiError {
    pub fn from_body(body: &Value) -> Self {
        Self {
            error: body.get("error").cloned().unwrap_or(Value::Null),
        }
    }

    /// Text of the `error` field, if the server sent a usable one.
    pub fn message(&self) -> Option<String> {
        is_truthy(&self.error).then(|| display_text(&self.error))
    }
}
