//! serbench CLI entry point.

fn main() {
    if let Err(e) = serbench_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
