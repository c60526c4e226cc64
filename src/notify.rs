//! Desktop notification fired after an upload attempt.

use std::error::Error;

use crate::interfaces::Notifier;
use crate::utils::cmd_utils;

/// Notifier that shells out to `osascript` to display a macOS
/// notification center banner.
pub struct OsaScriptNotifier;

impl Notifier for OsaScriptNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<(), Box<dyn Error>> {
        let script = format!("display notification \"{message}\" with title \"{title}\"");
        let output = cmd_utils::run_command_with_output("osascript", &["-e", &script])?;

        if !output.is_empty() {
            println!("{output}");
        }

        Ok(())
    }
}
