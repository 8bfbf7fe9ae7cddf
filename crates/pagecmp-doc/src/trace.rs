//! Progress tracing
//!
//! The comparison driver reports what it is doing through a [`Tracer`]
//! handed to it, instead of a global debug switch.

use std::fmt;

/// Receiver of comparison progress messages.
pub trait Tracer {
    /// Record one message.
    fn trace(&self, args: fmt::Arguments<'_>);
}

/// Forwards messages to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&self, args: fmt::Arguments<'_>) {
        log::debug!(target: "pagecmp", "{}", args);
    }
}

/// Discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentTracer;

impl Tracer for SilentTracer {
    fn trace(&self, _args: fmt::Arguments<'_>) {}
}

impl<T: Tracer + ?Sized> Tracer for &T {
    fn trace(&self, args: fmt::Arguments<'_>) {
        (**self).trace(args)
    }
}
