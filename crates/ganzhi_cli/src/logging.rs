use tracing_subscriber::EnvFilter;

/// Target prefixes enabled by `-v`. Matching is by prefix, so `ganzhi`
/// covers the binary as well as `ganzhi_base` and `ganzhi_cli` targets.
const CRATE_TARGETS: &[&str] = &["ganzhi"];

/// Install the stderr subscriber for the `ganzhi` binary.
///
/// `-v` count: none -> warn, 1 -> info, 2 -> debug, 3+ -> trace.
/// `RUST_LOG` replaces the whole directive set when present.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
