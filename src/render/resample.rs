use image::RgbaImage;
use image::imageops::FilterType;

use crate::foundation::core::{RasterImage, SizeSet};
use crate::foundation::error::{IconforgeError, IconforgeResult};

/// Downsample the master raster to every size in the set, in set order.
pub fn resample(master: &RasterImage, sizes: &SizeSet) -> IconforgeResult<Vec<RasterImage>> {
    sizes.iter().map(|s| resample_to(master, s)).collect()
}

/// Downsample the master raster to one exact target size.
///
/// Uses Lanczos3 with alpha premultiplied around the filter, so
/// fully-transparent source pixels contribute no color to the result. The
/// pipeline is downscale-only: a target above the master resolution is a
/// caller error and is rejected here.
pub fn resample_to(master: &RasterImage, size: u32) -> IconforgeResult<RasterImage> {
    if size == 0 {
        return Err(IconforgeError::validation("resample target must be > 0"));
    }
    if size > master.side() {
        return Err(IconforgeError::validation(format!(
            "resample target {size} exceeds master resolution {} (downscale-only pipeline)",
            master.side()
        )));
    }

    let src = RgbaImage::from_raw(master.side(), master.side(), master.data().to_vec())
        .ok_or_else(|| IconforgeError::render("master raster buffer size mismatch"))?;
    let out = resize_premul(&src, size, size);
    RasterImage::from_raw(size, out.into_raw())
}

/// Lanczos3 resize of a straight-alpha RGBA image, premultiplying before the
/// filter and unpremultiplying after.
pub(crate) fn resize_premul(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if img.dimensions() == (width, height) {
        return img.clone();
    }

    let mut premul = img.clone();
    premultiply_rgba8_in_place(&mut premul);
    let resized = image::imageops::resize(&premul, width, height, FilterType::Lanczos3);

    let mut out = resized.into_raw();
    unpremultiply_rgba8_in_place(&mut out);
    // from_raw cannot fail: the buffer came from a resize to these dimensions.
    RgbaImage::from_raw(width, height, out).unwrap_or_else(|| RgbaImage::new(width, height))
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        for c in 0..3 {
            // Filter ringing can push a premultiplied channel above alpha.
            let v = (px[c] as u16 * 255 + a / 2) / a;
            px[c] = v.min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/resample.rs"]
mod tests;
