use tracing_chrome::{ChromeLayerBuilder, FlushGuard};
use tracing_subscriber::prelude::*;

/// Enable tracing to chrome://tracing or https://ui.perfetto.dev/
///
/// The trace is written to a `trace-*.json` file in the working directory when the returned guard
/// is dropped, so keep it alive for the whole conversion. Nothing is written to stdout.
pub fn trace() -> FlushGuard {
    let (chrome_layer, guard) = ChromeLayerBuilder::new().include_args(true).build();
    tracing_subscriber::registry().with(chrome_layer).init();

    guard
}
