use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Adapter that forwards the domain Logger port to the tracing macros.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "backend", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "backend", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "backend", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "backend", "{}", message);
    }
}
