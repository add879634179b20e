//! End-to-end icon generation: render, resample, encode, persist.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::encode::icns::encode_icns;
use crate::encode::ico::{ICO_MAX_SIZE, IcoEntry, encode_ico};
use crate::encode::png::encode_png;
use crate::foundation::core::{GradientSpec, RasterImage, SizeSet};
use crate::foundation::error::{IconforgeError, IconforgeResult};
use crate::render::canvas::CanvasRenderer;
use crate::render::overlay::Overlay;
use crate::render::resample::resample_to;
use crate::wizard::{encode_bmp, render_wizard_badge, render_wizard_panel};

/// Declarative description of one icon-generation run.
///
/// Deserializable from JSON; every field has a default matching the standard
/// desktop-app asset matrix, so an empty object `{}` is a valid job.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IconJob {
    /// Gradient anchor colors for the background.
    pub gradient: GradientSpec,
    /// Optional overlay asset path (raster or SVG).
    pub overlay: Option<PathBuf>,
    /// Standard sizes, each written as `{size}x{size}.png`.
    pub sizes: Vec<u32>,
    /// Square-logo sizes, each written as `Square{size}x{size}Logo.png`.
    pub square_sizes: Vec<u32>,
    /// Store logo size, written as `StoreLogo.png`.
    pub store_logo_size: Option<u32>,
    /// Ordered container entry sizes for `icon.ico`.
    pub ico_sizes: Vec<u32>,
    /// Supersampling factor for the master render (must be at least 2).
    pub supersample: u32,
    /// Whether to render the installer wizard bitmaps.
    pub wizard: bool,
}

impl Default for IconJob {
    fn default() -> Self {
        Self {
            gradient: GradientSpec::default(),
            overlay: None,
            sizes: vec![16, 32, 48, 64, 128, 256, 512],
            square_sizes: vec![30, 44, 71, 89, 107, 142, 150, 284, 310],
            store_logo_size: Some(50),
            ico_sizes: vec![16, 32, 48, 64, 128, 256],
            supersample: 4,
            wizard: true,
        }
    }
}

impl IconJob {
    /// Load and parse a job description from a JSON file.
    pub fn from_path(path: &Path) -> IconforgeResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read job spec '{}'", path.display()))?;
        let job: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse job spec '{}'", path.display()))?;
        Ok(job)
    }

    /// Check size-set and supersampling invariants before any rendering.
    pub fn validate(&self) -> IconforgeResult<()> {
        SizeSet::new(self.sizes.clone())?;
        if !self.square_sizes.is_empty() {
            SizeSet::new(self.square_sizes.clone())?;
        }
        if !self.ico_sizes.is_empty() {
            SizeSet::new(self.ico_sizes.clone())?;
        }
        if self.store_logo_size == Some(0) {
            return Err(IconforgeError::validation("store logo size must be > 0"));
        }
        if self.supersample < 2 {
            return Err(IconforgeError::validation(
                "supersample factor must be at least 2 so the master exceeds the largest target",
            ));
        }
        self.master_side().map(|_| ())
    }

    /// Side length of the supersampled master raster.
    pub fn master_side(&self) -> IconforgeResult<u32> {
        let largest = self
            .render_sizes()
            .into_iter()
            .max()
            .ok_or_else(|| IconforgeError::validation("job requests no sizes"))?;
        self.supersample
            .checked_mul(largest)
            .ok_or_else(|| IconforgeError::validation("master resolution overflows u32"))
    }

    /// All sizes the pipeline must rasterize, deduplicated, first-seen order.
    fn render_sizes(&self) -> Vec<u32> {
        let mut out: Vec<u32> = Vec::new();
        let wanted = self
            .sizes
            .iter()
            .chain(self.square_sizes.iter())
            .copied()
            .chain(self.store_logo_size);
        for s in wanted {
            if !out.contains(&s) {
                out.push(s);
            }
        }
        out
    }
}

/// Per-run pipeline switches.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOpts {
    /// Resample and compress sizes on the rayon pool. Output bytes are
    /// identical either way; stages are pure and order is preserved.
    pub parallel: bool,
}

/// What a pipeline run produced.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    /// Artifacts written, in write order.
    pub written: Vec<PathBuf>,
    /// Artifacts that failed, with the failure message. Failures are isolated
    /// per artifact; the rest of the run proceeds.
    pub failed: Vec<(PathBuf, String)>,
    /// Container entry sizes dropped for the ICO format limit (or because the
    /// size was never rendered).
    pub dropped_container_sizes: Vec<u32>,
}

/// Execute a full icon-generation run into `out_dir`.
///
/// Render and resample errors abort the run; per-artifact write failures and
/// container-level recoverable conditions are recorded in the summary and
/// logged at warn level instead.
#[tracing::instrument(skip(job, opts))]
pub fn run(job: &IconJob, out_dir: &Path, opts: &RunOpts) -> IconforgeResult<RunSummary> {
    job.validate()?;
    let master_side = job.master_side()?;

    let overlay = match &job.overlay {
        Some(path) => Overlay::from_path(path, master_side)?,
        None => Overlay::Absent,
    };

    let renderer = CanvasRenderer::new(job.gradient);
    let master = renderer.render_master(master_side, &overlay)?;

    let sizes = job.render_sizes();
    let produce = |&size: &u32| -> IconforgeResult<(u32, RasterImage, Vec<u8>)> {
        let raster = resample_to(&master, size)?;
        let png = encode_png(&raster)?;
        Ok((size, raster, png))
    };
    let rendered: Vec<(u32, RasterImage, Vec<u8>)> = if opts.parallel {
        sizes.par_iter().map(produce).collect::<IconforgeResult<_>>()?
    } else {
        sizes.iter().map(produce).collect::<IconforgeResult<_>>()?
    };
    let by_size: HashMap<u32, (RasterImage, Vec<u8>)> = rendered
        .into_iter()
        .map(|(s, raster, png)| (s, (raster, png)))
        .collect();

    let mut summary = RunSummary::default();
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    for &s in &job.sizes {
        if let Some((_, png)) = by_size.get(&s) {
            persist(&mut summary, out_dir.join(format!("{s}x{s}.png")), png);
        }
    }
    if job.sizes.contains(&256)
        && let Some((_, png)) = by_size.get(&256)
    {
        persist(&mut summary, out_dir.join("128x128@2x.png"), png);
    }
    if job.sizes.contains(&512)
        && let Some((_, png)) = by_size.get(&512)
    {
        persist(&mut summary, out_dir.join("icon.png"), png);
    }
    for &s in &job.square_sizes {
        if let Some((_, png)) = by_size.get(&s) {
            persist(
                &mut summary,
                out_dir.join(format!("Square{s}x{s}Logo.png")),
                png,
            );
        }
    }
    if let Some(store) = job.store_logo_size
        && let Some((_, png)) = by_size.get(&store)
    {
        persist(&mut summary, out_dir.join("StoreLogo.png"), png);
    }

    if !job.ico_sizes.is_empty() {
        let mut entries = Vec::new();
        for &s in &job.ico_sizes {
            if s > ICO_MAX_SIZE {
                tracing::warn!(size = s, "size exceeds the ico format limit, dropping entry");
                summary.dropped_container_sizes.push(s);
                continue;
            }
            match by_size.get(&s) {
                Some((_, png)) => entries.push(IcoEntry::new(s, png.clone())),
                None => {
                    tracing::warn!(size = s, "ico entry size was never rendered, dropping entry");
                    summary.dropped_container_sizes.push(s);
                }
            }
        }
        let ico_path = out_dir.join("icon.ico");
        match encode_ico(&entries) {
            Ok(bytes) => persist(&mut summary, ico_path, &bytes),
            Err(e) => {
                tracing::warn!(error = %e, "ico container skipped");
                summary.failed.push((ico_path, e.to_string()));
            }
        }
    }

    let icns_rasters: Vec<RasterImage> = job
        .sizes
        .iter()
        .filter_map(|s| by_size.get(s).map(|(raster, _)| raster.clone()))
        .collect();
    let icns_path = out_dir.join("icon.icns");
    match encode_icns(&icns_rasters) {
        Ok(Some(bytes)) => persist(&mut summary, icns_path, &bytes),
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(error = %e, "icns generation skipped");
            summary.failed.push((icns_path, e.to_string()));
        }
    }

    if job.wizard {
        match by_size.get(&128) {
            Some((raster, _)) => {
                let bmp = encode_bmp(&render_wizard_panel(raster)?)?;
                persist(&mut summary, out_dir.join("wizard-image.bmp"), &bmp);
            }
            None => tracing::warn!("no 128px raster, skipping wizard panel"),
        }
        match by_size.get(&64) {
            Some((raster, _)) => {
                let bmp = encode_bmp(&render_wizard_badge(raster)?)?;
                persist(&mut summary, out_dir.join("wizard-small.bmp"), &bmp);
            }
            None => tracing::warn!("no 64px raster, skipping wizard badge"),
        }
    }

    Ok(summary)
}

fn persist(summary: &mut RunSummary, path: PathBuf, bytes: &[u8]) {
    match write_atomic(&path, bytes) {
        Ok(()) => summary.written.push(path),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "artifact write failed");
            summary.failed.push((path, e.to_string()));
        }
    }
}

/// Create the parent directory of `path` if it does not exist yet.
pub(crate) fn ensure_parent_dir(path: &Path) -> IconforgeResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write `bytes` to a temporary sibling and rename into place, so the target
/// path never holds a partially-written file.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> IconforgeResult<()> {
    ensure_parent_dir(path)?;
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    std::fs::write(&tmp, bytes).with_context(|| format!("write '{}'", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("finalize '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
