//! iconforge renders a brand icon at multiple pixel resolutions and packages
//! a subset of those renderings into multi-resolution icon container files.
//!
//! # Pipeline overview
//!
//! 1. **Render**: [`CanvasRenderer`] produces one supersampled RGBA master
//!    (diagonal gradient, rounded-corner mask, optional [`Overlay`]).
//! 2. **Resample**: [`resample_to`] downsamples the master to each exact
//!    target size (Lanczos3, premultiplied around the filter, downscale only).
//! 3. **Encode**: each raster becomes an independent PNG payload
//!    ([`encode_png`]); [`encode_ico`] packs an ordered payload subset into a
//!    byte-exact ICO container, and the macOS container is delegated to the
//!    `icns` crate ([`encode_icns`]).
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: identical inputs produce byte-identical
//!   rasters and containers.
//! - **No partial artifacts**: container files are written to a temporary
//!   sibling path and renamed into place only on success.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Payload and container encoders.
pub mod encode;
/// End-to-end generation runs.
pub mod pipeline;
/// Master rendering and resampling.
pub mod render;
/// Installer wizard bitmaps.
pub mod wizard;

pub use foundation::core::{GradientSpec, RasterImage, SizeSet};
pub use foundation::error::{IconforgeError, IconforgeResult};

pub use encode::icns::{ICNS_SIZES, encode_icns};
pub use encode::ico::{ICO_MAX_SIZE, IcoEntry, encode_ico};
pub use encode::png::encode_png;
pub use pipeline::{IconJob, RunOpts, RunSummary, run};
pub use render::canvas::CanvasRenderer;
pub use render::overlay::Overlay;
pub use render::resample::{resample, resample_to};
pub use wizard::{encode_bmp, render_wizard_badge, render_wizard_panel};
