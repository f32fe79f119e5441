//! External URL host-service contracts.
//!
//! Launching an app from the command router leaves the shell: the app's catalog URL is handed to
//! the host, which opens it in a new browsing context.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for opening URLs in a new browsing context outside the desktop shell.
pub trait ExternalUrlService {
    /// Opens `url` using the host's external navigation mechanism.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// External URL service that records every requested URL instead of navigating.
pub struct RecordingExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingExternalUrlService {
    /// Returns the URLs requested so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for RecordingExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}
