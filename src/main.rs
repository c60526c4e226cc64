use straightup::{args, run_app};

fn main() {
    // Parse command-line arguments
    let args = args::args_checks();

    // Run the application logic
    if let Err(e) = run_app(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
