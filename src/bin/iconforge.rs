use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use iconforge::{IcoEntry, IconJob, RunOpts, encode_ico};

#[derive(Parser, Debug)]
#[command(name = "iconforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the full icon matrix and container files.
    Generate(GenerateArgs),
    /// Pack existing PNG files into a single .ico container.
    Ico(IcoArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Job spec JSON; the default asset matrix applies when omitted.
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Overlay asset path (overrides the spec).
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Output directory.
    #[arg(long, default_value = "icons")]
    out: PathBuf,

    /// Resample and encode sizes in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

#[derive(Parser, Debug)]
struct IcoArgs {
    /// Input PNG files, in container entry order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output .ico path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Ico(args) => cmd_ico(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut job = match &args.spec {
        Some(path) => IconJob::from_path(path)?,
        None => IconJob::default(),
    };
    if args.overlay.is_some() {
        job.overlay = args.overlay;
    }

    let opts = RunOpts {
        parallel: args.parallel,
    };
    let summary = iconforge::run(&job, &args.out, &opts)?;

    for path in &summary.written {
        eprintln!("wrote {}", path.display());
    }
    for (path, msg) in &summary.failed {
        eprintln!("failed {}: {msg}", path.display());
    }
    if !summary.failed.is_empty() {
        anyhow::bail!("{} artifact(s) failed", summary.failed.len());
    }
    Ok(())
}

fn cmd_ico(args: IcoArgs) -> anyhow::Result<()> {
    let mut entries = Vec::new();
    for path in &args.inputs {
        let bytes =
            std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
        let img = image::load_from_memory(&bytes)
            .with_context(|| format!("decode '{}'", path.display()))?;
        if img.width() != img.height() {
            anyhow::bail!(
                "'{}' is {}x{}, container entries must be square",
                path.display(),
                img.width(),
                img.height()
            );
        }
        entries.push(IcoEntry::new(img.width(), bytes));
    }

    let container = encode_ico(&entries)?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &container)
        .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
