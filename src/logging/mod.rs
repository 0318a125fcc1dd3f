use tracing_subscriber::EnvFilter;

/// Stdout carries the export lines, so every log line goes to stderr.
pub fn init(debug: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn filter(debug: bool) -> EnvFilter {
    let directive = if debug { "vaultenv=debug" } else { "vaultenv=warn" };
    EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::WARN.into()),
    )
}
