use std::io;

use calc::{Calculator, Config, demo};

fn main() {
    // stdout carries only the demo lines.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    // Command-line arguments are ignored.
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = demo::run(&Calculator::new(), &Config::default(), &mut out) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
