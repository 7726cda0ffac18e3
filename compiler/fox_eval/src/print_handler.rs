//! Print handler for configurable output.
//!
//! Program output (`tulis`) and diagnostics (runtime errors) go to
//! different channels:
//! - Stdout: stdout and stderr (default)
//! - Buffer: two in-memory buffers, for tests and embedding
//! - Silent: discards everything
//!
//! Uses enum dispatch instead of trait objects; the handler set is fixed.

use std::sync::Arc;

use parking_lot::Mutex;

/// Default print handler that writes to stdout and stderr.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a line of program output.
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print a line of diagnostics.
    pub fn eprintln(&self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Print handler that captures output and diagnostics to separate buffers.
pub struct BufferPrintHandler {
    output: Mutex<String>,
    errors: Mutex<String>,
}

impl BufferPrintHandler {
    /// Create a new buffer print handler.
    pub fn new() -> Self {
        BufferPrintHandler {
            output: Mutex::new(String::new()),
            errors: Mutex::new(String::new()),
        }
    }

    /// Print a line of program output.
    pub fn println(&self, msg: &str) {
        let mut buf = self.output.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Print a line of diagnostics.
    pub fn eprintln(&self, msg: &str) {
        let mut buf = self.errors.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Get all captured program output.
    pub fn get_output(&self) -> String {
        self.output.lock().clone()
    }

    /// Get all captured diagnostics.
    pub fn get_errors(&self) -> String {
        self.errors.lock().clone()
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout/stderr (default).
    Stdout(StdoutPrintHandler),
    /// Captures to buffers.
    Buffer(BufferPrintHandler),
    /// Discards all output silently.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line of program output.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Print a line of diagnostics.
    pub fn eprintln(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.eprintln(msg),
            Self::Buffer(h) => h.eprintln(msg),
            Self::Silent => {}
        }
    }

    /// Captured program output; empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Captured diagnostics; empty for handlers that don't capture.
    pub fn get_errors(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_errors(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a silent print handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
