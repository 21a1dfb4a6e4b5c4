use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards application log lines to the global `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "product_catalog", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "product_catalog", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "product_catalog", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "product_catalog", "{}", message);
    }
}
