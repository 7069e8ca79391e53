use crate::foundation::core::{Offset, RasterImage};

/// One straight-alpha RGBA8 pixel.
pub type Rgba8 = [u8; 4];

/// Blend `src` onto `dst` using `src`'s alpha as the mask.
///
/// Every channel, alpha included, is interpolated: `src * a + dst * (255 - a)`.
/// Straight (non-premultiplied) pixels in and out.
pub fn paste_px(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let mask = u16::from(src[3]);
    match mask {
        0 => dst,
        255 => src,
        _ => {
            let inv = 255 - mask;
            let mut out = [0u8; 4];
            for i in 0..4 {
                let sc = u32::from(src[i]) * u32::from(mask);
                let dc = u32::from(dst[i]) * u32::from(inv);
                out[i] = div255(sc + dc);
            }
            out
        }
    }
}

/// Paste `overlay` onto `dst` with its top-left corner at `offset`.
///
/// Pixels that land outside `dst` are dropped. Offsets of any magnitude are accepted.
pub fn paste_with_alpha(dst: &mut RasterImage, overlay: &RasterImage, offset: Offset) {
    let Some(region) = ClipRegion::new(dst.dimensions(), overlay.dimensions(), offset) else {
        tracing::debug!(?offset, "overlay fully clipped");
        return;
    };

    for oy in region.src_y..region.src_y + region.height {
        let dy = dst_coord(oy, offset.y);
        for ox in region.src_x..region.src_x + region.width {
            let dx = dst_coord(ox, offset.x);
            let src = overlay.get_pixel(ox, oy).0;
            let px = dst.get_pixel_mut(dx, dy);
            px.0 = paste_px(px.0, src);
        }
    }
}

/// Overlap between the overlay and the destination, in overlay coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ClipRegion {
    src_x: u32,
    src_y: u32,
    width: u32,
    height: u32,
}

impl ClipRegion {
    fn new(dst: (u32, u32), src: (u32, u32), offset: Offset) -> Option<Self> {
        let (src_x, width) = clip_axis(dst.0, src.0, offset.x)?;
        let (src_y, height) = clip_axis(dst.1, src.1, offset.y)?;
        Some(Self {
            src_x,
            src_y,
            width,
            height,
        })
    }
}

// Returns (first visible source index, visible length) along one axis.
fn clip_axis(dst_len: u32, src_len: u32, off: i64) -> Option<(u32, u32)> {
    let start = i128::from(off).max(0);
    let end = (i128::from(off) + i128::from(src_len)).min(i128::from(dst_len));
    if end <= start {
        return None;
    }
    let src_start = start - i128::from(off);
    Some((
        u32::try_from(src_start).ok()?,
        u32::try_from(end - start).ok()?,
    ))
}

fn dst_coord(src: u32, off: i64) -> u32 {
    // Only called inside a ClipRegion, where the sum is within [0, dst_len).
    (i64::from(src) + off) as u32
}

fn div255(x: u32) -> u8 {
    ((x + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
