//! `setup` command: register the right-click upload service.

mod install;
pub mod templates;

pub use install::{ENGINE, InstalledBundle, bundle_dir_name, install_bundle};

use crate::endpoint::Endpoint;
use crate::errors::StraightupError;
use crate::utils::log_utils::Logger;
use crate::utils::path_utils::services_dir;

/// Generate the Automator Quick Action bundle for `endpoint` and tell the
/// user where to find it.
///
/// # Errors
///
/// Returns an error when the home directory cannot be determined or the
/// bundle cannot be written.
pub fn run_setup(endpoint: &Endpoint, logger: &Logger) -> Result<(), StraightupError> {
    let services_dir = services_dir()?;
    logger.debug(&format!("services directory: {}", services_dir.display()));

    let bundle = install_bundle(&services_dir, endpoint)?;
    logger.info(&format!("wrote {}", bundle.info_plist.display()));
    logger.info(&format!("wrote {}", bundle.document_wflow.display()));

    println!("Service Created:");
    println!("right-click on a file -> Services ->");
    println!("{}", bundle.menu_title);

    Ok(())
}
