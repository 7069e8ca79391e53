use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::foundation::error::{SigpasteError, SigpasteResult};

const BASE64_MARKER: &str = ";base64,";

/// Strip an optional `data:<mime>;base64,` prefix and base64-decode the payload.
///
/// Bare base64 (no `data:` prefix) is accepted as-is. Payloads whose decoded size would
/// exceed `max_bytes` are rejected before decoding.
pub fn decode_data_url(input: &str, max_bytes: u64) -> SigpasteResult<Vec<u8>> {
    let normalized = input.trim();

    let payload = if let Some(rest) = normalized.strip_prefix("data:") {
        let start = rest
            .find(BASE64_MARKER)
            .ok_or_else(|| SigpasteError::decode("data url is missing the ';base64,' marker"))?;
        &rest[start + BASE64_MARKER.len()..]
    } else {
        normalized
    };

    let estimated = estimate_decoded_len(payload);
    if estimated > max_bytes {
        return Err(SigpasteError::invalid_input(format!(
            "payload too large: ~{estimated} bytes decoded (limit {max_bytes})"
        )));
    }

    STANDARD
        .decode(payload)
        .map_err(|e| SigpasteError::decode(format!("base64 decode: {e}")))
}

/// Frame PNG bytes as a `data:image/png;base64,` URL.
pub fn encode_png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

// Upper bound: every 4 input chars yield at most 3 bytes.
fn estimate_decoded_len(payload: &str) -> u64 {
    let len = payload.len() as u64;
    len.div_ceil(4).saturating_mul(3)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/data_url.rs"]
mod tests;
