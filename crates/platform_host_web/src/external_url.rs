//! External URL adapter opening app URLs in a new browser tab.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter backed by `window.open(url, "_blank")`.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::open_in_new_browsing_context(url) })
    }
}
