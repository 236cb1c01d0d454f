//! Run context: verbosity and logging sinks.
//!
//! Everything logged here is informational; it never affects the outcome
//! of a clustering run. The default context is silent, so library users
//! who don't care about progress output pay nothing.

use log::{debug, error, info, trace, warn};

/// Verbosity context threaded through a clustering run.
///
/// Sinks forward to the [`log`] facade only when the context is verbose.
/// The host application decides where records go by installing a `log`
/// backend; with no backend (or a quiet context) every sink is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunContext {
    verbose: bool,
}

impl RunContext {
    /// A silent context.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that forwards to the `log` facade.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }

    /// Whether this context emits log records.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Error-level sink.
    pub fn error(&self, msg: &str) {
        if self.verbose {
            error!("{msg}");
        }
    }

    /// Warn-level sink.
    pub fn warn(&self, msg: &str) {
        if self.verbose {
            warn!("{msg}");
        }
    }

    /// Info-level sink.
    pub fn info(&self, msg: &str) {
        if self.verbose {
            info!("{msg}");
        }
    }

    /// Trace-level sink.
    pub fn trace(&self, msg: &str) {
        if self.verbose {
            trace!("{msg}");
        }
    }

    /// Debug-level sink.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            debug!("{msg}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_silent() {
        let ctx = RunContext::new();
        assert!(!ctx.is_verbose());
    }

    #[test]
    fn test_verbose() {
        let ctx = RunContext::verbose();
        assert!(ctx.is_verbose());
        // Sinks must be callable regardless of backend installation.
        ctx.info("info");
        ctx.trace("trace");
    }
}
