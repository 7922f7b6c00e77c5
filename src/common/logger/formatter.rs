use core::fmt as core_fmt;

use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    registry::LookupSpan,
};

const TIMESTAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]");

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

fn level_colour(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[31m",
        Level::WARN => "\x1b[33m",
        Level::INFO => "\x1b[32m",
        Level::DEBUG => "\x1b[34m",
        Level::TRACE => "\x1b[35m",
    }
}

/// Single-line event format:
/// `[timestamp] LEVEL target:line > span{..}: message fields`
pub struct LineFormatter {
    use_ansi: bool,
}

impl LineFormatter {
    pub fn new(use_ansi: bool) -> Self {
        Self { use_ansi }
    }

    fn paint<'a>(&self, code: &'a str) -> &'a str {
        if self.use_ansi { code } else { "" }
    }
}

impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> core_fmt::Result {
        let reset = self.paint(RESET);
        let dim = self.paint(DIM);

        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let timestamp = now
            .format(TIMESTAMP)
            .unwrap_or_else(|_| "Unknown Time".to_string());
        write!(writer, "{dim}[{timestamp}]{reset} ")?;

        let metadata = event.metadata();
        let level = metadata.level();
        write!(
            writer,
            "{}{}{: <5}{} ",
            self.paint(level_colour(level)),
            self.paint(BOLD),
            level.as_str(),
            reset
        )?;

        let line = metadata
            .line()
            .map(|l| l.to_string())
            .unwrap_or_else(|| "??".to_string());
        write!(writer, "{dim}{}:{line}{reset} > ", metadata.target())?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}: ", span.name())?;
            }
        }

        ctx.format_fields(writer.by_ref(), event)?;
        write!(writer, "{reset}")?;
        writeln!(writer)
    }
}
