//! Supersampled master rendering and downscale-only resampling.

/// Gradient + rounded-mask + overlay canvas renderer.
pub mod canvas;
/// Overlay asset contract and loaders.
pub mod overlay;
/// Lanczos downsampling with premultiplied-alpha filtering.
pub mod resample;
