//! Body format negotiation for the HTTP server.
//!
//! MessagePack is the native sidecar encoding; JSON is accepted for callers
//! of the original REST surface. Responses are encoded in the same format
//! the request used.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Body encoding negotiated from the request's content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireFormat {
    /// MessagePack, the default
    #[default]
    MsgPack,
    /// JSON
    Json,
}

impl WireFormat {
    /// Map a content type to an encoding. An absent content type is treated
    /// as MessagePack.
    fn from_content_type(content_type: &str) -> Option<WireFormat> {
        if content_type.is_empty() || content_type.contains("msgpack") {
            Some(WireFormat::MsgPack)
        } else if content_type.contains("json") {
            Some(WireFormat::Json)
        } else {
            None
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            WireFormat::MsgPack => "application/msgpack",
            WireFormat::Json => "application/json",
        }
    }
}

/// Rejection type for [`Decoded`]
pub struct DecodeRejection {
    format: WireFormat,
    message: String,
}

impl IntoResponse for DecodeRejection {
    fn into_response(self) -> Response {
        let body = crate::error::ErrorResponse {
            error: crate::error::ErrorDetail {
                code: "DESERIALIZATION_ERROR",
                message: self.message.clone(),
            },
        };

        let encoded = match self.format {
            WireFormat::MsgPack => rmp_serde::to_vec_named(&body).ok(),
            WireFormat::Json => serde_json::to_vec(&body).ok(),
        };
        match encoded {
            Some(bytes) => (
                StatusCode::BAD_REQUEST,
                [("content-type", self.format.content_type())],
                bytes,
            )
                .into_response(),
            None => (StatusCode::BAD_REQUEST, self.message).into_response(),
        }
    }
}

/// Extractor that decodes the request body as MessagePack or JSON based on
/// the `content-type` header, and remembers which format was used.
pub struct Decoded<T> {
    pub body: T,
    pub format: WireFormat,
}

#[async_trait]
impl<T, S> FromRequest<S> for Decoded<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = DecodeRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let Some(format) = WireFormat::from_content_type(&content_type) else {
            return Err(DecodeRejection {
                format: WireFormat::default(),
                message: format!(
                    "Invalid content type: expected application/msgpack or application/json, got {content_type}"
                ),
            });
        };

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| DecodeRejection {
                format,
                message: format!("Failed to read request body: {e}"),
            })?;

        let body = match format {
            WireFormat::MsgPack => rmp_serde::from_slice(&bytes).map_err(|e| DecodeRejection {
                format,
                message: format!("Failed to deserialize MessagePack: {e}"),
            })?,
            WireFormat::Json => serde_json::from_slice(&bytes).map_err(|e| DecodeRejection {
                format,
                message: format!("Failed to deserialize JSON: {e}"),
            })?,
        };

        Ok(Decoded { body, format })
    }
}

/// Response wrapper that serializes in a chosen wire format.
pub struct Encoded<T> {
    body: T,
    format: WireFormat,
}

impl<T> Encoded<T> {
    pub fn new(body: T, format: WireFormat) -> Self {
        Self { body, format }
    }

    /// MessagePack response, for handlers without a request body.
    pub fn msgpack(body: T) -> Self {
        Self::new(body, WireFormat::MsgPack)
    }
}

impl<T: Serialize> IntoResponse for Encoded<T> {
    fn into_response(self) -> Response {
        let encoded = match self.format {
            WireFormat::MsgPack => rmp_serde::to_vec_named(&self.body).map_err(|e| e.to_string()),
            WireFormat::Json => serde_json::to_vec(&self.body).map_err(|e| e.to_string()),
        };
        match encoded {
            Ok(bytes) => (
                StatusCode::OK,
                [("content-type", self.format.content_type())],
                bytes,
            )
                .into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize response: {e}"),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestPayload {
        name: String,
        value: i32,
    }

    #[test]
    fn test_format_from_content_type() {
        assert_eq!(
            WireFormat::from_content_type("application/msgpack"),
            Some(WireFormat::MsgPack)
        );
        assert_eq!(
            WireFormat::from_content_type("application/x-msgpack"),
            Some(WireFormat::MsgPack)
        );
        assert_eq!(
            WireFormat::from_content_type("application/json"),
            Some(WireFormat::Json)
        );
        assert_eq!(WireFormat::from_content_type(""), Some(WireFormat::MsgPack));
        assert_eq!(WireFormat::from_content_type("text/plain"), None);
    }

    #[test]
    fn test_msgpack_roundtrip() {
        let payload = TestPayload {
            name: "test".to_string(),
            value: 42,
        };

        let bytes = rmp_serde::to_vec_named(&payload).unwrap();
        let decoded: TestPayload = rmp_serde::from_slice(&bytes).unwrap();

        assert_eq!(payload, decoded);
    }
}
