/// Installs console tracing for a test binary; later calls are no-ops.
#[cfg(feature = "app_tracing")]
pub fn init_tracing() {
  let _ = opt_core::app::tracing::AppTracingBuilder::default().with_test_writer().try_init();
}

#[cfg(not(feature = "app_tracing"))]
pub fn init_tracing() {}
