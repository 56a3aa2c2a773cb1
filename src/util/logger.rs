use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber used by the `numerus` binary.
///
/// `RUST_LOG` takes precedence when set. Otherwise the crate logs at `debug`
/// level with `verbose` and at `warn` level without it. Output goes to
/// stderr so that results on stdout stay machine readable.
pub fn init_cli_logger(verbose: bool) {
    let fallback = if verbose { "numerus=debug" } else { "numerus=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry().with(filter)
                                  .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)
                                                                        .with_target(false)
                                                                        .with_thread_ids(false)
                                                                        .with_file(false)
                                                                        .with_line_number(false)
                                                                        .compact())
                                  .init();
}
