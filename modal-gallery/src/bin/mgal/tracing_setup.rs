//! Tracing configuration for the mgal binary.
//!
//! Gallery code logs through the `log` facade, so most events arrive through
//! the log bridge carrying `log.*` bookkeeping fields. The formatter writes one
//! compact line per event (time, level, originating target, message, extra
//! fields) and drops lines matching a suppressed pattern, which by default
//! covers the pointer and selection chatter the webview produces while the
//! cursor moves over the thumbnail grid.
//!
//! Must run BEFORE Dioxus launches so dioxus-logger does not install its own
//! subscriber.

use std::fmt::Write as _;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use modal_gallery::config::LoggingConfig;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Message, origin and extra fields of one event.
#[derive(Default)]
struct EventText {
    message: String,
    log_target: Option<String>,
    fields: String,
}

impl EventText {
    fn record(&mut self, name: &str, value: String) {
        match name {
            "message" => self.message = value,
            "log.target" => self.log_target = Some(value),
            // Bridge bookkeeping, already shown through the target
            "log.module_path" | "log.file" | "log.line" => {}
            _ => {
                let _ = write!(self.fields, " {name}={value}");
            }
        }
    }
}

impl Visit for EventText {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record(field.name(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.record(field.name(), format!("{value:?}"));
    }
}

fn is_suppressed(line: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| line.contains(pattern.as_str()))
}

/// One-line event format with noise suppression.
struct GalleryFormat {
    timer: SystemTime,
    suppressed_patterns: Vec<String>,
}

impl GalleryFormat {
    fn new(suppressed_patterns: Vec<String>) -> Self {
        Self {
            timer: SystemTime,
            suppressed_patterns,
        }
    }
}

impl<S, N> FormatEvent<S, N> for GalleryFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut text = EventText::default();
        event.record(&mut text);

        let metadata = event.metadata();
        let target = text.log_target.as_deref().unwrap_or(metadata.target());
        let body = format!("{target}: {}{}", text.message, text.fields);
        if is_suppressed(&body, &self.suppressed_patterns) {
            return Ok(());
        }

        self.timer.format_time(&mut writer)?;
        writeln!(writer, " {:>5} {body}", metadata.level())
    }
}

/// Where log lines are written.
enum Destination {
    File(PathBuf, File),
    Stderr,
}

impl Destination {
    /// Open the log file, falling back to stderr when it cannot be created.
    fn open(log_file: Option<&Path>) -> Self {
        let Some(path) = log_file else {
            return Self::Stderr;
        };
        match File::create(path) {
            Ok(file) => Self::File(path.to_path_buf(), file),
            Err(err) => {
                eprintln!("Cannot write log file {}: {err}", path.display());
                Self::Stderr
            }
        }
    }

    fn path(&self) -> Option<PathBuf> {
        match self {
            Self::File(path, _) => Some(path.clone()),
            Self::Stderr => None,
        }
    }

    fn into_writer(self) -> BoxMakeWriter {
        match self {
            Self::File(_, file) => BoxMakeWriter::new(Mutex::new(file)),
            Self::Stderr => BoxMakeWriter::new(io::stderr),
        }
    }
}

/// Initialize the tracing subscriber from `LoggingConfig`.
///
/// `RUST_LOG` overrides the configured level. Returns the log file path when
/// output goes to a file rather than stderr.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) -> Option<PathBuf> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let destination = Destination::open(config.log_file.as_deref());
    let log_path = destination.path();

    let fmt_layer = fmt::layer()
        .with_writer(destination.into_writer())
        .event_format(GalleryFormat::new(config.suppressed_patterns.clone()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    log_path
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn render(patterns: Vec<String>, emit: impl FnOnce()) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(move || writer.clone())
                .event_format(GalleryFormat::new(patterns)),
        );
        tracing::subscriber::with_default(subscriber, emit);
        let bytes = buffer.0.lock().expect("buffer lock").clone();
        String::from_utf8(bytes).expect("utf-8 output")
    }

    #[test]
    fn navigation_lines_carry_level_target_and_message() {
        let output = render(LoggingConfig::default().suppressed_patterns, || {
            tracing::info!(target: "modal_gallery::state", "Location: /img/1");
        });
        assert!(output.contains(" INFO modal_gallery::state: Location: /img/1"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn extra_fields_follow_the_message() {
        let output = render(Vec::new(), || {
            tracing::debug!(target: "modal_gallery", image = 2, "Opened");
        });
        assert!(output.contains("DEBUG modal_gallery: Opened image=2"));
    }

    #[test]
    fn thumbnail_hover_noise_is_dropped() {
        let output = render(LoggingConfig::default().suppressed_patterns, || {
            tracing::debug!(target: "dioxus_desktop", "Dispatched unknown event mouseover");
            tracing::trace!(target: "wry", "pointerover on .gallery-thumb");
            tracing::info!(target: "tao", "SelectionDidChange");
        });
        assert!(output.is_empty(), "unexpected output: {output}");
    }

    #[test]
    fn patterns_match_anywhere_in_the_line() {
        let patterns = vec!["dioxus_desktop".to_string()];
        assert!(is_suppressed("dioxus_desktop: window created", &patterns));
        assert!(!is_suppressed("modal_gallery: Location: /gallery", &patterns));
        assert!(!is_suppressed("anything", &[]));
    }

    #[test]
    fn missing_log_file_goes_to_stderr() {
        assert!(Destination::open(None).path().is_none());
        let dir = tempfile::tempdir().expect("temp dir");
        let unwritable = dir.path().join("missing-dir").join("gallery.log");
        assert!(Destination::open(Some(unwritable.as_path())).path().is_none());

        let log_file = dir.path().join("gallery.log");
        assert_eq!(Destination::open(Some(log_file.as_path())).path(), Some(log_file));
    }
}
