use std::process;

fn main() {
    if let Err(e) = yamk::cli::run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
