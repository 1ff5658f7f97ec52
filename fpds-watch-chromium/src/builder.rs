use std::path::PathBuf;
use std::time::Duration;

use crate::ChromiumPortal;

/// Builder for [`ChromiumPortal`].
///
/// Defaults: headless, sandboxed, Chromium located by `chromiumoxide`'s own
/// lookup, 60s CDP request timeout.
#[derive(Debug, Clone)]
pub struct ChromiumPortalBuilder {
    headless: bool,
    sandbox: bool,
    executable: Option<PathBuf>,
    request_timeout: Duration,
}

impl Default for ChromiumPortalBuilder {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: true,
            executable: None,
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl ChromiumPortalBuilder {
    /// Run without a visible window (default) or with one.
    #[must_use]
    pub const fn headless(mut self, yes: bool) -> Self {
        self.headless = yes;
        self
    }

    /// Keep Chromium's sandbox enabled (default). Containers running as root need `false`.
    #[must_use]
    pub const fn sandbox(mut self, yes: bool) -> Self {
        self.sandbox = yes;
        self
    }

    /// Use a specific Chromium/Chrome executable.
    #[must_use]
    pub fn chrome_executable(mut self, path: Option<PathBuf>) -> Self {
        self.executable = path;
        self
    }

    /// Bound on individual CDP requests.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Finish the connector. Nothing is launched until the first search.
    #[must_use]
    pub fn build(self) -> ChromiumPortal {
        ChromiumPortal {
            headless: self.headless,
            sandbox: self.sandbox,
            executable: self.executable,
            request_timeout: self.request_timeout,
        }
    }
}

impl ChromiumPortal {
    /// Returns a builder with headless defaults.
    #[must_use]
    pub fn builder() -> ChromiumPortalBuilder {
        ChromiumPortalBuilder::default()
    }

    /// True when the browser runs without a window.
    #[must_use]
    pub const fn is_headless(&self) -> bool {
        self.headless
    }
}
