use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "account_collator=debug,info"
    } else {
        "account_collator=info"
    }
}

/// Installs the global subscriber on stderr. `RUST_LOG` wins over the defaults.
/// `json` swaps the compact layer for one line of JSON per event.
pub fn init_logger(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // Each branch builds its own layer so its subscriber type is inferred
    // for the position it occupies in the stack.
    macro_rules! base_layer {
        () => {
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
        };
    }

    let (compact, json) = if json {
        (None, Some(base_layer!().json()))
    } else {
        (Some(base_layer!().compact()), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(json)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        assert!(EnvFilter::try_new(default_directives(false)).is_ok());
        assert!(EnvFilter::try_new(default_directives(true)).is_ok());
    }

    #[test]
    fn test_verbose_enables_debug_for_crate() {
        assert!(default_directives(true).contains("account_collator=debug"));
        assert!(!default_directives(false).contains("debug"));
    }
}
