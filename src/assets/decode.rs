use std::io::Cursor;

use crate::foundation::{
    core::RasterImage,
    error::{SigpasteError, SigpasteResult},
};

/// Decode any image format `image` can sniff into straight-alpha RGBA8.
///
/// Sources without an alpha channel come back fully opaque.
pub fn decode_image(bytes: &[u8]) -> SigpasteResult<RasterImage> {
    if bytes.is_empty() {
        return Err(SigpasteError::decode("image payload is empty"));
    }
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| SigpasteError::decode(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Encode an RGBA8 image as PNG, alpha preserved.
pub fn encode_png(img: &RasterImage) -> SigpasteResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| SigpasteError::encode(format!("encode png: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
