//! Installer wizard bitmaps derived from the rendered icon.
//!
//! Two fixed-size RGB images for the installer UI: a tall gradient panel with
//! the icon composited in its upper third, and a small white-background badge.

use std::io::Cursor;

use anyhow::Context as _;
use image::{RgbImage, RgbaImage};

use crate::foundation::core::RasterImage;
use crate::foundation::error::{IconforgeError, IconforgeResult};
use crate::foundation::math::{lerp_channel, mul_div255_u8};
use crate::render::resample::resize_premul;

/// Wizard panel dimensions (left panel of the installer wizard).
pub const PANEL_SIZE: (u32, u32) = (164, 314);
/// Wizard badge side (top-right corner of the wizard).
pub const BADGE_SIZE: u32 = 55;

const PANEL_ICON_SIZE: u32 = 100;
const PANEL_ICON_Y: u32 = 80;
const PANEL_TOP: [u8; 3] = [99, 102, 241];
const PANEL_BOTTOM: [u8; 3] = [147, 51, 234];

/// Render the wizard panel: vertical brand gradient with the icon centered
/// horizontally in the upper third.
pub fn render_wizard_panel(icon: &RasterImage) -> IconforgeResult<RgbImage> {
    let (w, h) = PANEL_SIZE;
    let mut img = RgbImage::new(w, h);

    for y in 0..h {
        let t = f64::from(y) / f64::from(h);
        let c = [
            lerp_channel(PANEL_TOP[0], PANEL_BOTTOM[0], t),
            lerp_channel(PANEL_TOP[1], PANEL_BOTTOM[1], t),
            lerp_channel(PANEL_TOP[2], PANEL_BOTTOM[2], t),
        ];
        for x in 0..w {
            img.put_pixel(x, y, image::Rgb(c));
        }
    }

    let scaled = resize_raster(icon, PANEL_ICON_SIZE)?;
    let x_off = (w - PANEL_ICON_SIZE) / 2;
    paste_over_rgb(&mut img, &scaled, x_off, PANEL_ICON_Y);
    Ok(img)
}

/// Render the wizard badge: the icon over a white background.
pub fn render_wizard_badge(icon: &RasterImage) -> IconforgeResult<RgbImage> {
    let mut img = RgbImage::from_pixel(BADGE_SIZE, BADGE_SIZE, image::Rgb([255, 255, 255]));
    let scaled = resize_raster(icon, BADGE_SIZE)?;
    paste_over_rgb(&mut img, &scaled, 0, 0);
    Ok(img)
}

/// Compress an RGB image to a BMP byte stream.
pub fn encode_bmp(img: &RgbImage) -> IconforgeResult<Vec<u8>> {
    let mut out = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut out),
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgb8,
        image::ImageFormat::Bmp,
    )
    .context("encode bmp")?;
    Ok(out)
}

fn resize_raster(icon: &RasterImage, size: u32) -> IconforgeResult<RgbaImage> {
    let src = RgbaImage::from_raw(icon.side(), icon.side(), icon.data().to_vec())
        .ok_or_else(|| IconforgeError::render("icon raster buffer size mismatch"))?;
    Ok(resize_premul(&src, size, size))
}

/// Straight-alpha source-over onto an opaque RGB destination.
fn paste_over_rgb(dst: &mut RgbImage, src: &RgbaImage, x_off: u32, y_off: u32) {
    for (sx, sy, px) in src.enumerate_pixels() {
        let [sr, sg, sb, sa] = px.0;
        if sa == 0 {
            continue;
        }
        let (dx, dy) = (x_off + sx, y_off + sy);
        if dx >= dst.width() || dy >= dst.height() {
            continue;
        }
        let d = dst.get_pixel_mut(dx, dy);
        if sa == 255 {
            d.0 = [sr, sg, sb];
            continue;
        }
        let inv = 255 - u16::from(sa);
        for (c, &s) in d.0.iter_mut().zip([sr, sg, sb].iter()) {
            *c = mul_div255_u8(u16::from(s), u16::from(sa))
                .saturating_add(mul_div255_u8(u16::from(*c), inv));
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/wizard.rs"]
mod tests;
