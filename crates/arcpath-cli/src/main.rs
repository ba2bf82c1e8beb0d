//! Shortest path across a half-annulus grid.
//!
//! Run: cargo run -- -k 128 -r 24 -i 7 -o 10

mod cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
