pub mod args;
pub mod endpoint;
pub mod errors;
pub mod interfaces;
pub mod notify;
pub mod ship;
pub mod storage;
pub mod utils;
pub mod workflow;

pub use args::Args;
pub use endpoint::Endpoint;

use args::Command;
use errors::StraightupError;
use utils::log_utils::Logger;

/// Route the parsed arguments to the selected command handler.
///
/// The two handlers are mutually exclusive execution paths; each process
/// invocation runs exactly one of them.
///
/// # Errors
///
/// Returns an error if the selected handler fails.
pub fn run_app(args: &Args) -> Result<(), StraightupError> {
    let logger = Logger::new(args.verbose);

    match &args.command {
        Command::Setup { endpoint } => workflow::run_setup(endpoint, &logger),
        Command::Ship {
            endpoint,
            file_path,
        } => ship::run_ship(endpoint, file_path, &logger),
    }
}
