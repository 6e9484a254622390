//! src/logging.rs
//! ============================================================================
//! # Logger: File-Backed Tracing Setup
//!
//! Installs a daily-rolling file subscriber. Nothing is written to stderr
//! since the terminal belongs to the UI while the app runs.

use std::{
    fs,
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};

use tracing::{Metadata, level_filters::LevelFilter};
use tracing_appender::rolling::{RollingFileAppender, daily};
use tracing_subscriber::{
    EnvFilter,
    filter::Directive,
    fmt::{
        self, FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    prelude::*,
};

use crate::error::{AppError, AppResult};

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE_PREFIX: &str = "apex";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

pub struct Logger;

impl Logger {
    /// Parses a configured level. An unusable value yields the default level
    /// together with the parse error so the caller can report it.
    #[must_use]
    pub fn directive_or_default(level: &str) -> (Directive, Option<AppError>) {
        match level.parse::<Directive>() {
            Ok(directive) => (directive, None),
            Err(e) => (
                Directive::from(DEFAULT_LOG_LEVEL),
                Some(AppError::Logging(format!("invalid log level '{level}': {e}"))),
            ),
        }
    }

    /// Call **once** near the start of `main`. `RUST_LOG` overrides `directive`.
    pub fn init_tracing(directive: Directive) -> AppResult<()> {
        Self::init_tracing_in(Path::new(LOG_DIR), directive)
    }

    pub fn init_tracing_in(log_dir: &Path, directive: Directive) -> AppResult<()> {
        fs::create_dir_all(log_dir)?;

        // daily rolling file appender → logs/apex.YYYY-MM-DD
        let file: RollingFileAppender = daily(log_dir, LOG_FILE_PREFIX);

        let file_layer = fmt::layer()
            .event_format(SeqFileMod)
            .with_writer(file)
            .with_ansi(false)
            .with_filter(EnvFilter::from_default_env().add_directive(directive));

        tracing_subscriber::registry()
            .with(file_layer)
            .try_init()
            .map_err(|e| AppError::Logging(e.to_string()))
    }
}

static SEQ: AtomicUsize = AtomicUsize::new(1);

/// Custom formatter: `[SEQ] LEVEL [file:line mod::path] message`
struct SeqFileMod;

impl<S, N> FormatEvent<S, N> for SeqFileMod
where
    S: tracing::Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut w: Writer<'_>,
        ev: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        // monotonically increasing sequence number
        let seq: usize = SEQ.fetch_add(1, Ordering::Relaxed);

        let meta: &'static Metadata<'static> = ev.metadata();
        write!(
            w,
            "{seq:06} {:5} [{}:{} {}] ",
            meta.level(),
            meta.file().unwrap_or("??"),
            meta.line().unwrap_or(0),
            meta.module_path().unwrap_or("???"),
        )?;

        ctx.field_format().format_fields(w.by_ref(), ev)?;
        writeln!(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn formatter_prefixes_sequence_level_and_location() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .event_format(SeqFileMod)
                .with_writer(move || writer.clone())
                .with_ansi(false),
        );

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("catalog ready");
        });

        let out = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(out.starts_with("0"), "{out}");
        assert!(out.contains("INFO"), "{out}");
        assert!(out.contains("logging.rs:"), "{out}");
        assert!(out.contains("apex_core::logging::tests"), "{out}");
        assert!(out.trim_end().ends_with("catalog ready"), "{out}");
    }

    #[test]
    fn bad_level_falls_back_to_info() {
        let (directive, rejected) = Logger::directive_or_default("apex_core=loud");
        assert_eq!(directive.to_string(), "info");
        let err = rejected.unwrap();
        assert!(matches!(err, AppError::Logging(_)));
        assert!(err.to_string().contains("apex_core=loud"));
    }

    #[test]
    fn valid_level_is_kept() {
        let (directive, rejected) = Logger::directive_or_default("apex_core=debug");
        assert_eq!(directive.to_string(), "apex_core=debug");
        assert!(rejected.is_none());
    }
}
