use clap::Parser;
use imgshrink::config::{self, ConfigOverrides, Mode};
use imgshrink::dispatch;
use imgshrink::imaging::{RustBackend, Scaler};
use imgshrink::output::Progress;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "imgshrink")]
#[command(about = "Resize an image, or every image in a folder tree")]
#[command(long_about = "\
Resize an image, or every image in a folder tree

Images are stretched to exactly WIDTH x HEIGHT. When neither width nor height
is given, images are scaled to 400px wide and the height follows the source
aspect ratio.

Folder mode mirrors the tree under a sibling folder named by --dst:

  photos/a/b/img1.png  ->  small/a/b/img1.png
  photos/cover.jpg     ->  small/cover.jpeg

Output keeps the source format (png or jpeg). JPEGs are written at quality 100.
Note that -h is the height; use --help for help.")]
#[command(version, disable_help_flag = true)]
struct Cli {
    /// Mode of resize [default: image]
    #[arg(short = 'm', long = "mode", value_enum)]
    mode: Option<Mode>,

    /// Destination folder name, also accepted as -dst [default: small]
    #[arg(long = "dst", value_name = "NAME")]
    dst: Option<String>,

    /// Target width in pixels [default: 400]
    #[arg(short = 'w', long = "width")]
    width: Option<u32>,

    /// Target height in pixels, 0 = unset [default: 0]
    #[arg(short = 'h', long = "height")]
    height: Option<u32>,

    /// Source image (image mode) or folder (folder mode) [default: ./]
    #[arg(short = 'p', long = "path")]
    path: Option<String>,

    /// Resampling algorithm [default: NearestNeighbor]
    #[arg(short = 's', long = "scaler", value_enum)]
    scaler: Option<Scaler>,

    /// TOML file with defaults for any of the options above
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            mode: self.mode,
            dst: self.dst.clone(),
            width: self.width,
            height: self.height,
            path: self.path.clone(),
            scaler: self.scaler,
        }
    }
}

/// Accept the single-dash `-dst` spelling by rewriting it to `--dst`.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            if arg == "-dst" {
                return OsString::from("--dst");
            }
            match arg.to_str().and_then(|s| s.strip_prefix("-dst=")) {
                Some(value) => OsString::from(format!("--dst={value}")),
                None => arg,
            }
        })
        .collect()
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imgshrink=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::resolve_config(cli.config.as_deref(), cli.overrides())?;
    tracing::debug!(?config, "resolved configuration");
    let mut progress = Progress::stdout();
    dispatch::run(&RustBackend::new(), &config, &mut progress)?;
    Ok(())
}
