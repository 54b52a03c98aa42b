//! Warning output channel.
//!
//! Warnings are emitted through an explicit sink handle rather than a
//! process-wide stream, so callers can capture, discard, or scope them. The
//! handle is shared through `Rc`/`RefCell` and is therefore single-threaded
//! by construction; a channel cannot be sent to another thread.

use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::mem;
use std::rc::Rc;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Destination for warning messages, injectable to keep warning output
/// testable.
pub trait WarningSink {
    fn emit(&mut self, message: &str);
}

// A null sink for silenced or output-free runs.
pub struct NullSink;
impl WarningSink for NullSink {
    fn emit(&mut self, _message: &str) {}
}

/// Collects warnings into a String for testing or programmatic capture.
pub struct BufferSink {
    pub buffer: String,
}

impl BufferSink {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Default for BufferSink {
    fn default() -> Self {
        Self::new()
    }
}

impl WarningSink for BufferSink {
    fn emit(&mut self, message: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(message);
    }
}

/// Writes warnings to stderr with a colored `warning:` prefix.
pub struct StderrSink;

impl WarningSink for StderrSink {
    fn emit(&mut self, message: &str) {
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
        let _ = write!(stderr, "warning:");
        let _ = stderr.reset();
        let _ = writeln!(stderr, " {}", message);
    }
}

/// Ergonomic, cloneable handle to a shared warning sink.
///
/// Clones share the same sink, so silencing through one handle silences
/// every holder for the duration of the call.
#[derive(Clone)]
pub struct WarningChannel(Rc<RefCell<Box<dyn WarningSink>>>);

impl WarningChannel {
    /// Create a new channel from any WarningSink.
    pub fn new<S: WarningSink + 'static>(sink: S) -> Self {
        WarningChannel(Rc::new(RefCell::new(Box::new(sink))))
    }

    /// A channel that reports to stderr.
    pub fn stderr() -> Self {
        Self::new(StderrSink)
    }

    /// Emit one warning via the current sink.
    pub fn warn(&self, message: &str) {
        self.0.borrow_mut().emit(message);
    }

    /// Runs `action` with warnings discarded, then restores the prior sink.
    ///
    /// Restoration happens on every exit path: if `action` panics, the
    /// guard reinstates the prior sink before the panic propagates. Nested
    /// calls restore in LIFO order. Returns whatever `action` returns.
    pub fn silence<R>(&self, action: impl FnOnce() -> R) -> R {
        let prior = mem::replace(&mut *self.0.borrow_mut(), Box::new(NullSink));
        let _restore = RestoreSink {
            slot: Rc::clone(&self.0),
            prior: Some(prior),
        };
        action()
    }

    /// Borrow the sink mutably (for advanced use).
    pub fn borrow_mut(&self) -> RefMut<'_, Box<dyn WarningSink>> {
        self.0.borrow_mut()
    }
}

impl Default for WarningChannel {
    fn default() -> Self {
        Self::stderr()
    }
}

// Reinstates the displaced sink when dropped, unwinding included.
struct RestoreSink {
    slot: Rc<RefCell<Box<dyn WarningSink>>>,
    prior: Option<Box<dyn WarningSink>>,
}

impl Drop for RestoreSink {
    fn drop(&mut self) {
        if let Some(prior) = self.prior.take() {
            *self.slot.borrow_mut() = prior;
        }
    }
}
