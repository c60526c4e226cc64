// Public modules
pub mod types;
mod validators;

// Re-export everything from the submodules
pub use types::*;
pub use validators::*;

use clap::Parser;

/// Parse command line arguments.
///
/// Endpoint shape is validated by clap value parsers, so a returned
/// `Args` is ready to dispatch.
#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}
