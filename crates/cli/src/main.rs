use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use facemesh_compat_core::shared::constants::{
    DEFAULT_DOWNLOAD_TIMEOUT_SECS, FACE_LANDMARKER_MODEL_URL,
};
use facemesh_compat_core::detection::infrastructure::model_resolver::ProgressFn;
use facemesh_compat_core::{ensure_model_asset, ModelAsset};

/// Download the face landmarker model bundle ahead of time.
///
/// Machines that cannot reach the network when the detector is first built
/// can be provisioned with this instead of placing the file by hand.
#[derive(Parser, Debug)]
#[command(name = "facemesh-fetch")]
struct Cli {
    /// Where to store the model (default: models/face_landmarker.task).
    #[arg(long)]
    dest: Option<PathBuf>,

    /// Model URL.
    #[arg(long, default_value = FACE_LANDMARKER_MODEL_URL)]
    url: String,

    /// Download timeout in seconds (0 = no timeout).
    #[arg(long, default_value_t = DEFAULT_DOWNLOAD_TIMEOUT_SECS)]
    timeout_secs: u64,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let asset = asset_for(&cli)?;

    log::info!("Resolving model: {}", asset.path.display());
    let progress = ProgressLine::default();
    let path = ensure_model_asset(
        &asset,
        timeout_for(cli.timeout_secs),
        Some(progress.callback()),
    )?;
    if progress.drawn() {
        eprintln!();
    }

    println!("{}", path.display());
    Ok(())
}

fn asset_for(cli: &Cli) -> Result<ModelAsset, Box<dyn std::error::Error>> {
    if !(cli.url.starts_with("https://") || cli.url.starts_with("http://")) {
        return Err(format!("Model URL must be http(s), got {}", cli.url).into());
    }
    let mut asset = ModelAsset::default();
    asset.url = cli.url.clone();
    if let Some(dest) = &cli.dest {
        if dest.is_dir() {
            return Err(format!("Destination is a directory: {}", dest.display()).into());
        }
        asset.path = dest.clone();
    }
    Ok(asset)
}

fn timeout_for(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Redraws a single progress line on stderr and remembers whether it did.
#[derive(Default)]
struct ProgressLine {
    drawn: Arc<AtomicBool>,
}

impl ProgressLine {
    fn callback(&self) -> ProgressFn {
        let drawn = self.drawn.clone();
        Box::new(move |downloaded, total| {
            drawn.store(true, Ordering::Relaxed);
            download_progress(downloaded, total);
        })
    }

    fn drawn(&self) -> bool {
        self.drawn.load(Ordering::Relaxed)
    }
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading face landmarker model... {pct}%");
    } else {
        eprint!("\rDownloading face landmarker model... {downloaded} bytes");
    }
}
