//! Step-by-step search diagnostics.
//!
//! Searches only talk to a [`TraceSink`] when the caller passes
//! `trace = true`; the sink decides where the lines go.

use std::cell::RefCell;
use std::fmt;

/// `log` target used by [`LogSink`].
pub const TRACE_TARGET: &str = "frontier_search::trace";

/// Receiver for trace lines emitted during a search.
pub trait TraceSink {
    fn trace(&self, line: fmt::Arguments<'_>);
}

/// Forwards trace lines to the `log` facade at debug level.
///
/// This is the default sink of every strategy. Nothing is printed unless
/// the host installs a logger.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn trace(&self, line: fmt::Arguments<'_>) {
        log::debug!(target: TRACE_TARGET, "{line}");
    }
}

/// Records trace lines in memory, for hosts that display them and for tests.
#[derive(Debug, Default)]
pub struct TraceLog {
    lines: RefCell<Vec<String>>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every line recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Remove and return the recorded lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl TraceSink for TraceLog {
    fn trace(&self, line: fmt::Arguments<'_>) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &S {
    fn trace(&self, line: fmt::Arguments<'_>) {
        (**self).trace(line);
    }
}

/// Per-call handle: a sink when tracing is on, nothing otherwise.
#[derive(Clone, Copy)]
pub(crate) struct Tracer<'a> {
    sink: Option<&'a dyn TraceSink>,
}

impl<'a> Tracer<'a> {
    pub(crate) fn new(sink: &'a dyn TraceSink, enabled: bool) -> Self {
        Self {
            sink: enabled.then_some(sink),
        }
    }

    pub(crate) fn off() -> Self {
        Self { sink: None }
    }

    #[inline]
    pub(crate) fn emit(&self, line: fmt::Arguments<'_>) {
        if let Some(sink) = self.sink {
            sink.trace(line);
        }
    }
}
