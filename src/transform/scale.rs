use image::imageops::{self, FilterType};

use crate::foundation::{
    core::{RasterImage, ScaleFactor},
    error::{SigpasteError, SigpasteResult},
};

/// Resampling filter used for every base-image resize.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Largest RGBA8 output buffer `upscale` will allocate (the `image` crate's default
/// decode allocation limit).
pub const MAX_OUTPUT_BYTES: u64 = 512 * 1024 * 1024;

/// Resize `img` by `scale` with a Lanczos3 filter.
///
/// Target dimensions truncate (`floor(w * scale)`). A zero-sized source or target yields
/// a transparent image of the target size instead of resampling. Resampling runs on
/// premultiplied pixels so the color of transparent pixels never bleeds into visible ones.
///
/// Fails with [`SigpasteError::InvalidInput`] when the target would exceed
/// [`MAX_OUTPUT_BYTES`].
pub fn upscale(img: &RasterImage, scale: ScaleFactor) -> SigpasteResult<RasterImage> {
    let (w, h) = img.dimensions();
    let (new_w, new_h) = scale.scale_dims(w, h);
    check_output_size(new_w, new_h)?;

    if w == 0 || h == 0 || new_w == 0 || new_h == 0 {
        tracing::debug!(w, h, new_w, new_h, "degenerate resize, skipping resample");
        return Ok(RasterImage::new(new_w, new_h));
    }

    let mut premul = img.clone();
    premultiply_rgba8_in_place(&mut premul);
    let mut out = imageops::resize(&premul, new_w, new_h, RESAMPLE_FILTER);
    unpremultiply_rgba8_in_place(&mut out);
    Ok(out)
}

fn check_output_size(width: u32, height: u32) -> SigpasteResult<()> {
    let bytes = u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|px| px.checked_mul(4));
    match bytes {
        Some(n) if n <= MAX_OUTPUT_BYTES => Ok(()),
        _ => Err(SigpasteError::invalid_input(format!(
            "upscaled image {width}x{height} exceeds {MAX_OUTPUT_BYTES} bytes"
        ))),
    }
}

fn premultiply_rgba8_in_place(img: &mut RasterImage) {
    for px in img.pixels_mut() {
        let a = u16::from(px[3]);
        if a == 0 {
            px.0 = [0, 0, 0, 0];
            continue;
        }
        for c in &mut px.0[..3] {
            *c = ((u16::from(*c) * a + 127) / 255) as u8;
        }
    }
}

fn unpremultiply_rgba8_in_place(img: &mut RasterImage) {
    for px in img.pixels_mut() {
        let a = u16::from(px[3]);
        if a == 0 {
            px.0 = [0, 0, 0, 0];
            continue;
        }
        // Ringing can push a premultiplied channel above alpha.
        for c in &mut px.0[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/scale.rs"]
mod tests;
