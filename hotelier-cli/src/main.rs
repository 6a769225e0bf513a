//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = hotelier_cli::run() {
        eprintln!("hotelier: {err}");
        std::process::exit(1);
    }
}
