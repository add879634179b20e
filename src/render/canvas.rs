use image::RgbaImage;

use crate::foundation::core::{GradientSpec, RasterImage};
use crate::foundation::error::{IconforgeError, IconforgeResult};
use crate::foundation::math::{add_sat_u8, lerp_channel, mul_div255_u8};
use crate::render::overlay::Overlay;
use crate::render::resample::resize_premul;

/// Corner radius of the rounded-square silhouette, as a fraction of the side.
const CORNER_RADIUS_RATIO: f64 = 0.22;

/// Padding reserved around the overlay, as a fraction of the side, per side.
const OVERLAY_PADDING_RATIO: f64 = 0.12;

/// Renders the supersampled master raster: gradient background, rounded-corner
/// silhouette, and an optional centered overlay.
#[derive(Clone, Copy, Debug)]
pub struct CanvasRenderer {
    gradient: GradientSpec,
}

impl CanvasRenderer {
    /// Create a renderer with the given gradient anchors.
    pub fn new(gradient: GradientSpec) -> Self {
        Self { gradient }
    }

    /// Render one `side x side` master raster.
    ///
    /// With [`Overlay::Absent`] the result is the plain gradient-and-mask
    /// raster. With a raster overlay, the overlay is scaled to fit inside the
    /// padded canvas (aspect preserved), centered, composited over the
    /// gradient, and the rounded mask is re-applied so the silhouette stays
    /// rounded regardless of overlay shape.
    pub fn render_master(&self, side: u32, overlay: &Overlay) -> IconforgeResult<RasterImage> {
        let mut img = self.fill_gradient(side)?;

        let radius = (f64::from(side) * CORNER_RADIUS_RATIO).round() as u32;
        let mask = rounded_rect_mask(side, radius);
        apply_mask(&mut img, &mask);

        if let Overlay::Raster(logo) = overlay {
            composite_overlay(&mut img, logo)?;
            apply_mask(&mut img, &mask);
        }

        Ok(img)
    }

    /// Diagonal gradient fill: `t = (x + y) / (2 * side)`, channels truncated.
    ///
    /// The blend factor depends only on `x + y`, so each diagonal's color is
    /// computed once and rows are filled from a lookup slice instead of
    /// re-deriving the factor per pixel.
    fn fill_gradient(&self, side: u32) -> IconforgeResult<RasterImage> {
        let mut img = RasterImage::new(side)?;
        let s = side as usize;
        let denom = (2 * side as u64) as f64;

        let mut lut = Vec::with_capacity(2 * s - 1);
        for d in 0..(2 * s - 1) {
            let t = d as f64 / denom;
            lut.push([
                lerp_channel(self.gradient.start[0], self.gradient.end[0], t),
                lerp_channel(self.gradient.start[1], self.gradient.end[1], t),
                lerp_channel(self.gradient.start[2], self.gradient.end[2], t),
            ]);
        }

        let data = img.data_mut();
        for y in 0..s {
            let row = &mut data[y * s * 4..(y + 1) * s * 4];
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let c = lut[x + y];
                px[0] = c[0];
                px[1] = c[1];
                px[2] = c[2];
                px[3] = 255;
            }
        }
        Ok(img)
    }
}

/// Single-channel mask of a filled rounded rectangle covering the canvas.
///
/// Interior rows are fully opaque; only pixels inside the four corner squares
/// are tested against the corner circles, in integer arithmetic.
pub(crate) fn rounded_rect_mask(side: u32, radius: u32) -> Vec<u8> {
    let s = side as usize;
    let r = (radius as usize).min(s / 2);
    let mut mask = vec![255u8; s * s];
    if r == 0 {
        return mask;
    }

    let rr = r * r;
    for y in 0..r {
        let dy = r - y;
        let dy2 = dy * dy;
        let top = y * s;
        let bottom = (s - 1 - y) * s;
        for x in 0..r {
            let dx = r - x;
            if dx * dx + dy2 > rr {
                mask[top + x] = 0;
                mask[top + (s - 1 - x)] = 0;
                mask[bottom + x] = 0;
                mask[bottom + (s - 1 - x)] = 0;
            }
        }
    }
    mask
}

/// Replace the raster's alpha channel with the mask.
pub(crate) fn apply_mask(img: &mut RasterImage, mask: &[u8]) {
    for (px, &m) in img.data_mut().chunks_exact_mut(4).zip(mask) {
        px[3] = m;
    }
}

/// Scale the overlay to fit the padded canvas, center it, and composite it
/// over the background with straight-alpha source-over.
fn composite_overlay(dst: &mut RasterImage, logo: &RgbaImage) -> IconforgeResult<()> {
    let side = dst.side();
    let (logo_w, logo_h) = logo.dimensions();
    if logo_w == 0 || logo_h == 0 {
        return Err(IconforgeError::render("overlay raster has zero dimensions"));
    }

    let padding = (f64::from(side) * OVERLAY_PADDING_RATIO) as u32;
    let available = side
        .checked_sub(2 * padding)
        .filter(|&a| a > 0)
        .ok_or_else(|| {
            IconforgeError::render(format!("canvas side {side} too small for overlay padding"))
        })?;

    let aspect = f64::from(logo_w) / f64::from(logo_h);
    let (new_w, new_h) = if aspect > 1.0 {
        let w = available;
        (w, ((f64::from(w) / aspect) as u32).max(1))
    } else {
        let h = available;
        (((f64::from(h) * aspect) as u32).max(1), h)
    };

    let scaled = resize_premul(logo, new_w, new_h);
    let x_off = (side - new_w) / 2;
    let y_off = (side - new_h) / 2;
    alpha_over(dst, &scaled, x_off, y_off);
    Ok(())
}

/// Straight-alpha source-over of `src` onto `dst` at the given offset.
fn alpha_over(dst: &mut RasterImage, src: &RgbaImage, x_off: u32, y_off: u32) {
    let (src_w, src_h) = src.dimensions();
    for sy in 0..src_h {
        for sx in 0..src_w {
            let sp = src.get_pixel(sx, sy).0;
            let sa = u16::from(sp[3]);
            if sa == 0 {
                continue;
            }

            let di = dst.pixel_index(x_off + sx, y_off + sy);
            let d = &mut dst.data_mut()[di..di + 4];
            if sa == 255 {
                d.copy_from_slice(&sp);
                continue;
            }

            let da = u16::from(d[3]);
            let inv = 255 - sa;
            let oa = add_sat_u8(sa as u8, mul_div255_u8(da, inv));
            if oa == 0 {
                d.copy_from_slice(&[0, 0, 0, 0]);
                continue;
            }
            for c in 0..3 {
                let sp_c = mul_div255_u8(u16::from(sp[c]), sa);
                let dp_c = mul_div255_u8(mul_div255_u8(u16::from(d[c]), da).into(), inv);
                let premul = u16::from(add_sat_u8(sp_c, dp_c));
                d[c] = ((premul * 255 + u16::from(oa) / 2) / u16::from(oa)).min(255) as u8;
            }
            d[3] = oa;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
