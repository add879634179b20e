use std::io::Cursor;

use anyhow::Context as _;

use crate::foundation::core::RasterImage;
use crate::foundation::error::IconforgeResult;

/// Compress one raster to an independent PNG byte stream.
pub fn encode_png(raster: &RasterImage) -> IconforgeResult<Vec<u8>> {
    let mut out = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut out),
        raster.data(),
        raster.side(),
        raster.side(),
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("encode {0}x{0} png payload", raster.side()))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
