use std::path::PathBuf;

use home::home_dir;

use crate::errors::StraightupError;

/// Directory where macOS looks for user-installed Quick Actions.
///
/// # Errors
///
/// Returns an error when the home directory cannot be determined.
pub fn services_dir() -> Result<PathBuf, StraightupError> {
    home_dir()
        .map(|home| home.join("Library").join("Services"))
        .ok_or(StraightupError::HomeDirError)
}
