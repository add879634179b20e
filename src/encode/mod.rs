//! Payload and container encoders.
//!
//! PNG payloads feed both the standalone per-size artifacts and the ICO
//! container; the macOS container is delegated to the `icns` crate.

/// macOS icon container via the `icns` crate.
pub mod icns;
/// Byte-exact multi-resolution ICO container writer.
pub mod ico;
/// PNG payload compression.
pub mod png;
