use crate::foundation::error::{IconforgeError, IconforgeResult};

/// Square RGBA8 raster with straight (non-premultiplied) alpha, row-major.
///
/// Every pipeline stage produces a fresh `RasterImage` and hands it to the
/// next stage by value; buffers are never shared or mutated across stages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    side: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Create a fully transparent raster of `side x side` pixels.
    pub fn new(side: u32) -> IconforgeResult<Self> {
        if side == 0 {
            return Err(IconforgeError::validation("raster side must be > 0"));
        }
        let len = (side as usize) * (side as usize) * 4;
        Ok(Self {
            side,
            data: vec![0; len],
        })
    }

    /// Wrap an existing RGBA8 buffer. `data.len()` must equal `side * side * 4`.
    pub fn from_raw(side: u32, data: Vec<u8>) -> IconforgeResult<Self> {
        if side == 0 {
            return Err(IconforgeError::validation("raster side must be > 0"));
        }
        let expected = (side as usize) * (side as usize) * 4;
        if data.len() != expected {
            return Err(IconforgeError::validation(format!(
                "raster buffer length {} does not match {side}x{side} rgba8 ({expected})",
                data.len()
            )));
        }
        Ok(Self { side, data })
    }

    /// Side length in pixels (the raster is always square).
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Borrow the RGBA8 pixel buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the RGBA8 pixel buffer.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster, returning its pixel buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub(crate) fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.side as usize) + (x as usize)) * 4
    }
}

/// Two sRGB anchor colors blended along the canvas diagonal.
///
/// The blend factor for pixel `(x, y)` on a `side`-pixel canvas is
/// `t = (x + y) / (2 * side)`; channel interpolation truncates to a byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GradientSpec {
    /// Top-left anchor color.
    pub start: [u8; 3],
    /// Bottom-right anchor color.
    pub end: [u8; 3],
}

impl Default for GradientSpec {
    fn default() -> Self {
        // Brand defaults: indigo-500 to fuchsia-600.
        Self {
            start: [99, 102, 241],
            end: [192, 38, 211],
        }
    }
}

/// Ordered sequence of distinct positive target pixel sizes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeSet(Vec<u32>);

impl SizeSet {
    /// Build a size set, rejecting zero and duplicate entries.
    pub fn new(sizes: Vec<u32>) -> IconforgeResult<Self> {
        if sizes.is_empty() {
            return Err(IconforgeError::validation("size set must be non-empty"));
        }
        for (i, &s) in sizes.iter().enumerate() {
            if s == 0 {
                return Err(IconforgeError::validation("size set entries must be > 0"));
            }
            if sizes[..i].contains(&s) {
                return Err(IconforgeError::validation(format!(
                    "duplicate size {s} in size set"
                )));
            }
        }
        Ok(Self(sizes))
    }

    /// Sizes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Number of sizes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty (never true for a constructed set).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest requested size.
    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Whether `size` is in the set.
    pub fn contains(&self, size: u32) -> bool {
        self.0.contains(&size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
