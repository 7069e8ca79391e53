use crate::{
    assets::decode::{decode_image, encode_png},
    effects::composite::paste_with_alpha,
    foundation::{
        core::{Offset, RasterImage, ScaleFactor},
        error::{SigpasteError, SigpasteResult},
    },
    transform::scale::upscale,
};

/// Upscale `base` by `scale`, then paste `overlay` at `offset` using its alpha as mask.
///
/// The result always has the upscaled base's dimensions. Neither input is modified, and
/// overlays placed partly or wholly outside the upscaled base are clipped. Fails only when
/// the upscaled base would be too large to allocate.
#[tracing::instrument(
    skip(base, overlay),
    fields(base = ?base.dimensions(), overlay = ?overlay.dimensions())
)]
pub fn composite(
    base: &RasterImage,
    overlay: &RasterImage,
    offset: Offset,
    scale: ScaleFactor,
) -> SigpasteResult<RasterImage> {
    let mut out = upscale(base, scale)?;
    paste_with_alpha(&mut out, overlay, offset);
    Ok(out)
}

/// Bytes-in, PNG-bytes-out form of [`composite`].
///
/// Fails with [`SigpasteError::Decode`] when either input is not a decodable image and
/// with [`SigpasteError::Encode`] when the result cannot be written as PNG.
#[tracing::instrument(
    skip(base_bytes, overlay_bytes),
    fields(base_len = base_bytes.len(), overlay_len = overlay_bytes.len())
)]
pub fn composite_bytes(
    base_bytes: &[u8],
    overlay_bytes: &[u8],
    offset: Offset,
    scale: ScaleFactor,
) -> SigpasteResult<Vec<u8>> {
    let base = decode_image(base_bytes).map_err(|e| label(e, "base image"))?;
    let overlay = decode_image(overlay_bytes).map_err(|e| label(e, "overlay image"))?;

    let out = composite(&base, &overlay, offset, scale)?;
    encode_png(&out)
}

fn label(err: SigpasteError, what: &str) -> SigpasteError {
    match err {
        SigpasteError::Decode(msg) => SigpasteError::decode(format!("{what}: {msg}")),
        other => other,
    }
}

#[cfg(test)]
#[path = "../tests/unit/stamp.rs"]
mod tests;
