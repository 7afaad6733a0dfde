//! Tracing setup. `RUST_LOG` wins when set; otherwise the CLI verbosity flags pick
//! the level. Logs go to stderr so command output on stdout stays clean.

use tracing_subscriber::EnvFilter;

pub fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("faiscism={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
