//! `tracing` output routed to the browser console.

use std::io;

use tracing::Level;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::PageConfig;

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    pub filter: String,
    /// Include the emitting module in each line.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn,neonfolio_core=info,neonfolio_web=info".to_string(),
            with_target: false,
        }
    }
}

impl LoggingConfig {
    /// Uses the `?log=` directive when present.
    #[must_use]
    pub fn from_page(config: &PageConfig) -> Self {
        match &config.log {
            Some(filter) => Self { filter: filter.clone(), with_target: true },
            None => Self::default(),
        }
    }
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("invalid log filter {:?}: {e}", config.filter).into());
        EnvFilter::new(LoggingConfig::default().filter)
    });

    let console_layer = fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_target(config.with_target)
        .with_writer(ConsoleMakeWriter);

    if tracing_subscriber::registry().with(filter).with(console_layer).try_init().is_err() {
        tracing::debug!("logging already initialized");
    }
}

/// Hands each event a [`ConsoleWriter`] for its level.
#[derive(Debug, Clone, Copy)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, buffer: Vec::with_capacity(128) }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }

        let message = wasm_bindgen::JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            Level::INFO => web_sys::console::info_1(&message),
            Level::DEBUG | Level::TRACE => web_sys::console::debug_1(&message),
        }
    }
}
