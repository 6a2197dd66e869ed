//! Error context for configuration plumbing
//!
//! Figment, TOML and filesystem failures become domain errors naming the step
//! that failed and, for files, the path involved. The original error stays
//! reachable through `source()`.

use cachet_domain::error::{Error, Result};
use std::path::Path;

/// Extension trait mapping foreign results into [`Error`]
///
/// # Example
///
/// ```ignore
/// use cachet_infrastructure::error_ext::ErrorContext;
///
/// let config: AppConfig = figment.extract().config_context("Failed to extract configuration")?;
/// std::fs::write(&path, text).file_context("Failed to write config file", &path)?;
/// ```
pub trait ErrorContext<T> {
    /// Map the failure to [`Error::Configuration`], prefixed with `step`
    fn config_context(self, step: &str) -> Result<T>;

    /// Map the failure to [`Error::Io`], naming `path`
    fn file_context(self, action: &str, path: &Path) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context(self, step: &str) -> Result<T> {
        self.map_err(|err| Error::configuration_with_source(format!("{}: {}", step, err), err))
    }

    fn file_context(self, action: &str, path: &Path) -> Result<T> {
        self.map_err(|err| {
            Error::io_with_source(format!("{} {}: {}", action, path.display(), err), err)
        })
    }
}
