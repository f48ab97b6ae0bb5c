use url::Url;

use crate::LaunchError;

/// Build `{backend}/api/download?url=..&quality=..` with both values
/// URL-encoded.
pub fn download_target(backend_url: &Url, video_url: &str, quality: &str) -> Result<Url, LaunchError> {
    let mut target = backend_url
        .join("api/download")
        .map_err(|err| LaunchError::InvalidTarget(err.to_string()))?;
    if target.cannot_be_a_base() {
        return Err(LaunchError::InvalidTarget(format!(
            "backend url {backend_url} cannot carry a path"
        )));
    }
    target
        .query_pairs_mut()
        .clear()
        .append_pair("url", video_url)
        .append_pair("quality", quality);
    Ok(target)
}

/// Opens a URL in a new browsing context. Implementations may block.
pub trait Launcher: Send + Sync {
    fn open(&self, target: &Url) -> Result<(), LaunchError>;
}

/// Opens targets in the system's default web browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLauncher;

impl Launcher for BrowserLauncher {
    fn open(&self, target: &Url) -> Result<(), LaunchError> {
        webbrowser::open(target.as_str()).map_err(|err| LaunchError::Browser(err.to_string()))
    }
}
