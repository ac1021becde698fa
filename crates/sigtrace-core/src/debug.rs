use core::fmt;
use std::fs::OpenOptions;
use std::io;
use std::sync::Once;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::layer::Identity;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, fmt as tracingfmt};

/// Stdout verbosity per module. Byte-level parsing is noisy, layer 3 and sessions are what
/// a trace reader usually wants to follow.
const STDOUT_DIRECTIVES: &str = "info,\
    sigtrace_core::bytereader=warn,\
    sigtrace_pdus=info,\
    sigtrace_engine::lapdm=info,\
    sigtrace_engine::stats=info,\
    sigtrace_engine::l3=debug,\
    sigtrace_engine::session=debug,\
    sigtrace_engine::engine=debug";

const LOGFILE_DIRECTIVES: &str = "debug";

/// Column at which the message text starts
const MESSAGE_COLUMN: usize = 64;

/// Width reserved for the frame number prefix
const FNR_WIDTH: usize = 7;

/// Prefixes every event with level, frame number and a short source location,
/// then aligns the message text in a single column.
struct AlignedFormatter;

/// Pulls the `fnr` field (frame number of the message being processed) out of an event
#[derive(Default)]
struct FnrVisitor {
    fnr: Option<String>,
}

impl tracing::field::Visit for FnrVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "fnr" {
            self.fnr = Some(format!("{:?}", value));
        }
    }
}

fn level_color(level: &tracing::Level) -> &'static str {
    match *level {
        tracing::Level::ERROR => "\x1b[31m",
        tracing::Level::WARN => "\x1b[33m",
        tracing::Level::INFO => "\x1b[32m",
        tracing::Level::DEBUG => "\x1b[34m",
        tracing::Level::TRACE => "\x1b[35m",
    }
}

/// Shortens a source path to `[crate/module] file.rs`.
/// `crates/sigtrace-engine/src/l3/mm.rs` becomes `[engine/l3] mm.rs`.
fn short_location(file_path: &str) -> String {
    let Some(src_idx) = file_path.find("/src/") else {
        return file_path.to_string();
    };
    let crate_dir = file_path[..src_idx].rsplit('/').next().unwrap_or("unknown");
    let crate_name = crate_dir.strip_prefix("sigtrace-").unwrap_or(crate_dir);
    let in_src = &file_path[src_idx + 5..];

    match in_src.rsplit_once('/') {
        Some((modules, filename)) => {
            let top = modules.split('/').next().unwrap_or("");
            format!("[{}/{}] {}", crate_name, top, filename)
        }
        None => format!("[{}] {}", crate_name, in_src),
    }
}

/// Removes the `fnr=...` field the default field formatter wrote into the message
fn strip_fnr_field(message: &mut String) {
    let Some(start) = message.find("fnr=") else {
        return;
    };
    match message[start..].find(' ') {
        Some(len) => message.replace_range(start..start + len + 1, ""),
        None => message.truncate(start),
    }
}

impl<S, N> FormatEvent<S, N> for AlignedFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        let mut visitor = FnrVisitor::default();
        event.record(&mut visitor);

        let mut message = String::new();
        ctx.field_format().format_fields(format::Writer::new(&mut message), event)?;
        if visitor.fnr.is_some() {
            strip_fnr_field(&mut message);
        }

        let prefix = format!(
            "{}{:<5}\x1b[0m {:>width$} {}:{}:",
            level_color(metadata.level()),
            metadata.level(),
            visitor.fnr.as_deref().unwrap_or(""),
            short_location(metadata.file().unwrap_or("unknown")),
            metadata.line().unwrap_or(0),
            width = FNR_WIDTH,
        );

        // Arrows mark frames entering or leaving a layer and sit slightly to the left
        let column = if message.starts_with("->") || message.starts_with("<-") {
            MESSAGE_COLUMN - 3
        } else {
            MESSAGE_COLUMN
        };
        writeln!(writer, "{:<width$} {}", prefix, message, width = column)
    }
}

static INIT_LOG: Once = Once::new();

/// Sets up logging with maximum verbosity (trace level)
/// Mainly for unit tests
pub fn setup_logging_verbose() {
    install(EnvFilter::new("trace"), None::<Identity>);
}

/// Sets up default logging to stdout and optionally, a verbose log file.
/// Keep the returned guard alive for as long as the log file should be written.
pub fn setup_logging_default(verbose_logfile: Option<String>) -> io::Result<Option<WorkerGuard>> {
    let Some(path) = verbose_logfile else {
        install(EnvFilter::new(STDOUT_DIRECTIVES), None::<Identity>);
        return Ok(None);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let (file_writer, guard) = tracing_appender::non_blocking(file);
    let file_layer = tracingfmt::layer()
        .event_format(AlignedFormatter)
        .with_writer(file_writer)
        .with_ansi(false)
        .with_filter(EnvFilter::new(LOGFILE_DIRECTIVES));
    install(EnvFilter::new(STDOUT_DIRECTIVES), Some(file_layer));
    Ok(Some(guard))
}

/// Installs the global subscriber once. Later calls are ignored.
fn install<L>(stdout_filter: EnvFilter, file_layer: Option<L>)
where
    L: tracing_subscriber::Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    INIT_LOG.call_once(|| {
        let stdout_layer = tracingfmt::layer().event_format(AlignedFormatter).with_filter(stdout_filter);
        tracing_subscriber::registry().with(file_layer).with(stdout_layer).init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_location() {
        assert_eq!(short_location("crates/sigtrace-engine/src/l3/mm.rs"), "[engine/l3] mm.rs");
        assert_eq!(short_location("crates/sigtrace-core/src/debug.rs"), "[core] debug.rs");
        assert_eq!(short_location("bins/sigtrace-tool/src/main.rs"), "[tool] main.rs");
        assert_eq!(short_location("<built-in>"), "<built-in>");
    }

    #[test]
    fn test_strip_fnr_field() {
        let mut message = String::from("fnr=1234 CIPHER MODE COMMAND");
        strip_fnr_field(&mut message);
        assert_eq!(message, "CIPHER MODE COMMAND");

        let mut message = String::from("fnr=1234");
        strip_fnr_field(&mut message);
        assert_eq!(message, "");
    }
}
