use std::{
    io::{Read as _, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sigpaste", version)]
struct Cli {
    /// Settings JSON (scale, max_payload_bytes). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log pipeline events to stderr (repeat for more detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stamp a signature file onto a document file and write a PNG.
    Stamp(StampArgs),
    /// Handle one JSON request envelope and print the response envelope.
    Process(ProcessArgs),
}

#[derive(Parser, Debug)]
struct StampArgs {
    /// Document image.
    #[arg(long)]
    base: PathBuf,

    /// Signature image.
    #[arg(long)]
    overlay: PathBuf,

    /// Horizontal placement in document pixels (signature top-left).
    #[arg(long, allow_negative_numbers = true)]
    x: f64,

    /// Vertical placement in document pixels (signature top-left).
    #[arg(long, allow_negative_numbers = true)]
    y: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ProcessArgs {
    /// Request JSON; reads stdin when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match &cli.config {
        Some(path) => sigpaste::StampSettings::load(path)?,
        None => sigpaste::StampSettings::default(),
    };

    match cli.cmd {
        Command::Stamp(args) => cmd_stamp(&settings, args),
        Command::Process(args) => cmd_process(&settings, args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read '{}'", path.display()))
}

fn cmd_stamp(settings: &sigpaste::StampSettings, args: StampArgs) -> anyhow::Result<()> {
    let base = read_file(&args.base)?;
    let overlay = read_file(&args.overlay)?;

    let offset = sigpaste::Offset::from_placement(args.x, args.y, settings.scale)?;
    let png = sigpaste::composite_bytes(&base, &overlay, offset, settings.scale)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_process(settings: &sigpaste::StampSettings, args: ProcessArgs) -> anyhow::Result<()> {
    let body = match &args.in_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read request '{}'", path.display()))?,
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("read request from stdin")?;
            s
        }
    };

    let resp = sigpaste::handle_json(settings, &body);

    let mut out = std::io::stdout().lock();
    writeln!(out, "{resp}").context("write response")?;
    Ok(())
}
