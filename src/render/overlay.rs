use std::path::Path;

use anyhow::Context as _;
use image::RgbaImage;

use crate::foundation::error::{IconforgeError, IconforgeResult};
use crate::render::resample::unpremultiply_rgba8_in_place;

/// Overlay asset consumed by the canvas renderer.
///
/// Modeled as an explicit two-variant result rather than error-driven control
/// flow: a run without an overlay is a normal run, not a failed one.
#[derive(Clone, Debug)]
pub enum Overlay {
    /// A decoded straight-alpha raster to composite over the gradient.
    Raster(RgbaImage),
    /// No overlay; the renderer produces the plain gradient-and-mask result.
    Absent,
}

impl Overlay {
    /// Resolve an overlay asset from disk.
    ///
    /// A missing file is non-fatal: the caller gets [`Overlay::Absent`] and a
    /// warning-level signal, never an error. SVG assets are rasterized with
    /// `raster_hint_px` on their longer edge so the renderer's scale-to-fit
    /// step only ever downscales.
    pub fn from_path(path: &Path, raster_hint_px: u32) -> IconforgeResult<Self> {
        if raster_hint_px == 0 {
            return Err(IconforgeError::validation("overlay raster hint must be > 0"));
        }
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "overlay asset not found, using plain gradient"
            );
            return Ok(Self::Absent);
        }

        let bytes = std::fs::read(path)
            .with_context(|| format!("read overlay '{}'", path.display()))?;
        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
        if is_svg {
            Self::from_svg_bytes(&bytes, raster_hint_px)
        } else {
            let img = image::load_from_memory(&bytes)
                .with_context(|| format!("decode overlay '{}'", path.display()))?;
            Ok(Self::Raster(img.to_rgba8()))
        }
    }

    /// Wrap an in-memory raster. Programmatic motif strategies enter here.
    pub fn from_image(image: RgbaImage) -> Self {
        Self::Raster(image)
    }

    /// Whether no overlay is present.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    fn from_svg_bytes(bytes: &[u8], raster_hint_px: u32) -> IconforgeResult<Self> {
        let tree =
            usvg::Tree::from_data(bytes, &usvg::Options::default()).context("parse svg tree")?;

        let size = tree.size();
        let (w, h) = (size.width(), size.height());
        if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
            return Err(IconforgeError::render("svg has invalid width/height"));
        }

        let scale = raster_hint_px as f32 / w.max(h);
        let pw = ((w * scale).round() as u32).max(1);
        let ph = ((h * scale).round() as u32).max(1);

        let mut pixmap = resvg::tiny_skia::Pixmap::new(pw, ph)
            .ok_or_else(|| IconforgeError::render("failed to allocate svg pixmap"))?;
        let xform = resvg::tiny_skia::Transform::from_scale(pw as f32 / w, ph as f32 / h);
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        // tiny-skia produces premultiplied RGBA.
        let mut data = pixmap.take();
        unpremultiply_rgba8_in_place(&mut data);
        let img = RgbaImage::from_raw(pw, ph, data)
            .ok_or_else(|| IconforgeError::render("svg pixmap buffer size mismatch"))?;
        Ok(Self::Raster(img))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
