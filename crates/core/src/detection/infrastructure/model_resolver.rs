use std::ffi::OsString;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::shared::config::ModelAsset;

/// The model asset is missing locally and could not be downloaded.
#[derive(Error, Debug)]
#[error(
    "failed to fetch model asset from {url}: {cause}. \
     Download it manually and place it at {path}"
)]
pub struct ModelFetchError {
    pub url: String,
    pub path: PathBuf,
    #[source]
    pub cause: FetchCause,
}

#[derive(Error, Debug)]
pub enum FetchCause {
    #[error("failed to create model directory: {0}")]
    CreateDir(#[source] std::io::Error),
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("download interrupted: {0}")]
    Body(#[source] std::io::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Progress callback: `(bytes_downloaded, total_bytes)`.
/// `total_bytes` is 0 if the server didn't provide Content-Length.
pub type ProgressFn = Box<dyn Fn(u64, u64) + Send>;

/// Return the local path of `asset`, downloading it first if it is missing.
///
/// An existing file is returned as is: no request is made and its contents
/// are not checked. A download goes to a `.part` file that is renamed into
/// place once complete, so a failed attempt never leaves a file at
/// `asset.path`. There are no retries.
pub fn ensure_model_asset(
    asset: &ModelAsset,
    timeout: Option<Duration>,
    progress: Option<ProgressFn>,
) -> Result<PathBuf, ModelFetchError> {
    if asset.path.is_file() {
        log::debug!("Using cached model asset {}", asset.path.display());
        return Ok(asset.path.clone());
    }

    let fail = |cause| ModelFetchError {
        url: asset.url.clone(),
        path: asset.path.clone(),
        cause,
    };

    if let Some(dir) = asset.path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| fail(FetchCause::CreateDir(e)))?;
    }

    log::info!(
        "Downloading {} to {} ...",
        asset.url,
        asset.path.display()
    );
    download(&asset.url, &asset.path, timeout, progress).map_err(fail)?;
    log::info!("Download done: {}", asset.path.display());

    Ok(asset.path.clone())
}

fn part_path(dest: &Path) -> PathBuf {
    let mut name = OsString::from(dest.as_os_str());
    name.push(".part");
    PathBuf::from(name)
}

fn download(
    url: &str,
    dest: &Path,
    timeout: Option<Duration>,
    progress: Option<ProgressFn>,
) -> Result<(), FetchCause> {
    let temp_path = part_path(dest);

    let result = download_inner(url, dest, &temp_path, timeout, progress);

    // Clean up .part file on any error
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn download_inner(
    url: &str,
    dest: &Path,
    temp_path: &Path,
    timeout: Option<Duration>,
    progress: Option<ProgressFn>,
) -> Result<(), FetchCause> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(FetchCause::Request)?;
    let mut response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(FetchCause::Request)?;

    let total = response.content_length().unwrap_or(0);
    let mut downloaded: u64 = 0;

    let write_err = |source| FetchCause::Write {
        path: temp_path.to_path_buf(),
        source,
    };
    let mut file = fs::File::create(temp_path).map_err(write_err)?;

    let mut buf = vec![0u8; 1024 * 1024];
    loop {
        let n = response.read(&mut buf).map_err(FetchCause::Body)?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n]).map_err(write_err)?;
        downloaded += n as u64;
        if let Some(ref cb) = progress {
            cb(downloaded, total);
        }
    }

    file.flush().map_err(write_err)?;
    drop(file);

    fs::rename(temp_path, dest).map_err(|source| FetchCause::Write {
        path: dest.to_path_buf(),
        source,
    })?;

    Ok(())
}
