use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("partner_scout=debug,info")
        } else {
            EnvFilter::new("partner_scout=info")
        }
    })
}

/// Compact human-readable subscriber writing to `writer`.
pub fn cli_subscriber<W>(verbose: bool, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(default_filter(verbose)).with(
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(writer)
            .compact(),
    )
}

pub fn init_cli_logger(verbose: bool) {
    // logs share stdout with the report
    cli_subscriber(verbose, std::io::stdout).init();
}

/// Same filter as the CLI logger, one JSON object per event.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
