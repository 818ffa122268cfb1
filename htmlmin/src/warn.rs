//! Diagnostics emitted when a template is left alone.

use std::sync::Arc;

/// Receives the warning raised when a minifier declines to touch its input.
pub trait Warn: Send + Sync {
    fn warn(&self, message: &str);
}

/// Forwards warnings to `tracing` at `WARN` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingWarn;

impl Warn for TracingWarn {
    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

impl<W: Warn + ?Sized> Warn for &W {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

impl<W: Warn + ?Sized> Warn for Arc<W> {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}
