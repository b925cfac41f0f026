use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Maps the `-v` count and `-q` flag onto a default filter directive.
pub fn default_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "off";
    }

    match verbosity {
        0 => "site24x7_cli=warn,warn",
        1 => "site24x7_cli=info,warn",
        2 => "site24x7_cli=debug,info",
        _ => "site24x7_cli=trace,debug",
    }
}

/// Logs go to stderr so JSON written to stdout can be piped.
pub fn init_cli_logger(verbosity: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, quiet)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_levels() {
        assert_eq!(default_directive(0, false), "site24x7_cli=warn,warn");
        assert_eq!(default_directive(1, false), "site24x7_cli=info,warn");
        assert_eq!(default_directive(2, false), "site24x7_cli=debug,info");
        assert_eq!(default_directive(7, false), "site24x7_cli=trace,debug");
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert_eq!(default_directive(3, true), "off");
    }
}
