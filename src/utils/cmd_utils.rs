use std::error::Error;
use std::process::{Command, Output};

/// Execute a command and return its output as a Result
///
/// # Errors
///
/// Returns an error if the command cannot be spawned.
pub fn run_command(program: &str, args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Command::new(program)
        .args(args)
        .output()
        .map_err(|e| Box::<dyn Error>::from(format!("Failed to execute '{program}': {e}")))
}

/// Execute a command and return stdout as a string
///
/// # Errors
///
/// Returns an error if the command cannot be spawned, exits non-zero, or
/// produces non-UTF-8 output.
pub fn run_command_with_output(program: &str, args: &[&str]) -> Result<String, Box<dyn Error>> {
    let output = run_command(program, args)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Box::<dyn Error>::from(format!(
            "Command '{program}' failed: {stderr}"
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| Box::<dyn Error>::from(format!("Invalid UTF-8 in command output: {e}")))
}
