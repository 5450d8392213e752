use tracing_subscriber::EnvFilter;

/// Filter directive for the CLI verbosity flags; `None` defers to config.
pub fn level_for(verbose: u8, quiet: bool) -> Option<&'static str> {
    if quiet {
        return Some("error");
    }
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `fallback`.
pub fn init(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // a second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbosity() {
        assert_eq!(level_for(3, true), Some("error"));
    }

    #[test]
    fn verbosity_steps() {
        assert_eq!(level_for(0, false), None);
        assert_eq!(level_for(1, false), Some("info"));
        assert_eq!(level_for(2, false), Some("debug"));
        assert_eq!(level_for(5, false), Some("trace"));
    }
}
