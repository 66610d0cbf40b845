//! Handle lifecycle

use crate::error::Result;
use compio::fs::File;
use std::path::Path;
use tracing::warn;

/// Close `file` and then return `outcome`
///
/// The handle is closed whether or not the work done with it succeeded. A
/// close failure only surfaces when `outcome` is `Ok`; otherwise the
/// original error wins and the close failure is logged.
///
/// # Errors
///
/// Returns the error from `outcome`, or the close error if `outcome` was `Ok`.
pub async fn close_after<T>(file: File, outcome: Result<T>, path: &Path) -> Result<T> {
    let closed = file.close().await;

    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e.into()),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            warn!(path = %path.display(), "failed to close handle after error: {close_err}");
            Err(e)
        }
    }
}
