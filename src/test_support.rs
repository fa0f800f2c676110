//! Helpers shared by the unit test modules.

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub(crate) fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_test_writer()
    .with_max_level(tracing::Level::TRACE)
    .try_init();
}
