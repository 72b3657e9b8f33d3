use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "contact_convert=debug,info"
    } else {
        "contact_convert=info"
    }
}

/// `RUST_LOG` wins over the verbosity default.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

fn init_logger(verbose: bool, json: bool) {
    let base = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let fmt_layer = if json {
        base.json().boxed()
    } else {
        base.compact().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt_layer)
        .init();
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(verbose, false);
}

/// JSON lines on stderr, for runs whose logs are collected by another tool.
pub fn init_json_logger(verbose: bool) {
    init_logger(verbose, true);
}
