use std::io;

use reqwest::Url;

/// Host facility for opening external links.
pub trait LinkOpener: Send + Sync {
    fn can_open(&self, url: &str) -> bool;
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens links in the system's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    /// Only web links are handed to the browser.
    fn can_open(&self, url: &str) -> bool {
        Url::parse(url)
            .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
            .unwrap_or(false)
    }

    fn open(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}
