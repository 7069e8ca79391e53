//! JSON request/response envelope around the stamping pipeline.
//!
//! A request carries both images as data URLs plus a placement coordinate in the
//! original document's pixel space:
//!
//! ```json
//! { "contract": "data:image/png;base64,...", "signature": "data:image/png;base64,...", "x": 65, "y": 1460 }
//! ```
//!
//! The response is either `{"status":"success","image":"data:image/png;base64,..."}` or
//! `{"status":"error","message":"..."}`. Failures never escape as panics or `Err`s: every
//! request gets an envelope back.

use crate::{
    assets::data_url::{decode_data_url, encode_png_data_url},
    foundation::{
        core::Offset,
        error::{SigpasteError, SigpasteResult},
    },
    service::settings::StampSettings,
    stamp::composite_bytes,
};

/// Incoming stamp request. Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StampRequest {
    /// Base document image as a data URL or bare base64.
    pub contract: String,
    /// Signature image as a data URL or bare base64.
    pub signature: String,
    /// Horizontal placement in original document pixels. Required.
    #[serde(default)]
    pub x: Option<f64>,
    /// Vertical placement in original document pixels. Required.
    #[serde(default)]
    pub y: Option<f64>,
}

/// Outgoing envelope.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StampResponse {
    /// The composite, as a `data:image/png;base64,` URL.
    Success {
        /// PNG data URL.
        image: String,
    },
    /// The request failed; nothing was produced.
    Error {
        /// Display string of the underlying error.
        message: String,
    },
}

impl StampResponse {
    /// `true` for [`StampResponse::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    fn from_result(res: SigpasteResult<String>) -> Self {
        match res {
            Ok(image) => Self::Success { image },
            Err(err) => {
                tracing::warn!(error = %err, "stamp request failed");
                Self::Error {
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Run one request through decode, composite and encode.
#[tracing::instrument(skip_all)]
pub fn handle_request(settings: &StampSettings, req: &StampRequest) -> StampResponse {
    StampResponse::from_result(stamp_request(settings, req))
}

/// Parse a JSON request, handle it, and serialize the response.
pub fn handle_json(settings: &StampSettings, body: &str) -> String {
    let resp = match serde_json::from_str::<StampRequest>(body) {
        Ok(req) => handle_request(settings, &req),
        Err(e) => StampResponse::from_result(Err(SigpasteError::invalid_input(format!(
            "parse request JSON: {e}"
        )))),
    };
    serialize_response(&resp)
}

fn stamp_request(settings: &StampSettings, req: &StampRequest) -> SigpasteResult<String> {
    let x = req
        .x
        .ok_or_else(|| SigpasteError::invalid_input("missing field 'x'"))?;
    let y = req
        .y
        .ok_or_else(|| SigpasteError::invalid_input("missing field 'y'"))?;
    let offset = Offset::from_placement(x, y, settings.scale)?;

    let contract = decode_data_url(&req.contract, settings.max_payload_bytes)
        .map_err(|e| prefix(e, "contract"))?;
    let signature = decode_data_url(&req.signature, settings.max_payload_bytes)
        .map_err(|e| prefix(e, "signature"))?;

    tracing::debug!(x, y, ?offset, "placing signature");
    let png = composite_bytes(&contract, &signature, offset, settings.scale)?;
    Ok(encode_png_data_url(&png))
}

fn prefix(err: SigpasteError, field: &str) -> SigpasteError {
    match err {
        SigpasteError::Decode(msg) => SigpasteError::decode(format!("{field}: {msg}")),
        SigpasteError::InvalidInput(msg) => SigpasteError::invalid_input(format!("{field}: {msg}")),
        other => other,
    }
}

fn serialize_response(resp: &StampResponse) -> String {
    match serde_json::to_string(resp) {
        Ok(s) => s,
        Err(_) => r#"{"status":"error","message":"failed to serialize response"}"#.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/service/envelope.rs"]
mod tests;
