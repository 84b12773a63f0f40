use std::io;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable holding the console filter directives, used when no filter is set on the builder.
pub const CONSOLE_LOG_ENV: &str = "CONSOLE_LOG";

/// Installs a global tracing subscriber that writes formatted events to the console.
#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  test_writer: bool,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  /// Write events through the test harness's captured output instead of stderr.
  pub fn with_test_writer(mut self) -> Self {
    self.test_writer = true;
    self
  }

  /// Installs the subscriber, failing if a global subscriber was already installed.
  pub fn try_init(self) -> Result<(), TryInitError> {
    let console_filter = self.console_filter
      .unwrap_or_else(|| EnvFilter::try_from_env(CONSOLE_LOG_ENV).unwrap_or_default());

    let layered = tracing_subscriber::registry();
    if self.test_writer {
      layered.with(
        tracing_subscriber::fmt::layer()
          .with_test_writer()
          .with_filter(console_filter)
      ).try_init()
    } else {
      layered.with(
        tracing_subscriber::fmt::layer()
          .with_writer(io::stderr)
          .with_filter(console_filter)
      ).try_init()
    }
  }
}
