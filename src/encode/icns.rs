use crate::foundation::core::RasterImage;
use crate::foundation::error::{IconforgeError, IconforgeResult};

/// Pixel sizes this pipeline hands to the delegated ICNS encoder.
pub const ICNS_SIZES: [u32; 5] = [16, 32, 128, 256, 512];

/// Delegate the eligible subset of `rasters` to the `icns` encoder.
///
/// Rasters whose side is not in [`ICNS_SIZES`] are ignored; the survivors are
/// encoded in ascending size order. Returns `Ok(None)` when nothing is
/// eligible. Callers treat encoder failures as non-fatal for the run.
pub fn encode_icns(rasters: &[RasterImage]) -> IconforgeResult<Option<Vec<u8>>> {
    let mut eligible: Vec<&RasterImage> = rasters
        .iter()
        .filter(|r| ICNS_SIZES.contains(&r.side()))
        .collect();
    if eligible.is_empty() {
        return Ok(None);
    }
    eligible.sort_by_key(|r| r.side());

    let mut family = icns::IconFamily::new();
    for raster in eligible {
        let side = raster.side();
        let image =
            icns::Image::from_data(icns::PixelFormat::RGBA, side, side, raster.data().to_vec())
                .map_err(|e| {
                    IconforgeError::encode(format!("icns image {side}x{side}: {e}"))
                })?;
        family
            .add_icon(&image)
            .map_err(|e| IconforgeError::encode(format!("icns element {side}x{side}: {e}")))?;
    }

    let mut out = Vec::new();
    family
        .write(&mut out)
        .map_err(|e| IconforgeError::encode(format!("write icns stream: {e}")))?;
    Ok(Some(out))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/icns.rs"]
mod tests;
