//! Reporting sinks for merge conflicts.
//!
//! The wrapper operations ([`union`](crate::union) and friends) hand their
//! [`ConflictSummary`] to a caller-supplied [`ConflictSink`]. Nothing here is
//! global: each call names its sink explicitly.

use std::fmt::{self, Debug, Display};
use std::io::Write;

use tracing::info;

use crate::config::{ReportConfig, ReportLevel};
use crate::conflict::{ConflictSummary, MergeKind};
use crate::error::ReportResult;

/// Receives the conflicts of one merge call.
///
/// A sink may fail (for example on I/O). The merge result is computed before
/// the sink runs and is returned regardless.
pub trait ConflictSink<S, N> {
    fn report(&mut self, kind: MergeKind, summary: &ConflictSummary<S, N>) -> ReportResult<()>;
}

/// Emit a `tracing` event at a level chosen at runtime.
macro_rules! event_at {
    ($level:expr, $($arg:tt)+) => {
        match $level {
            ReportLevel::Trace => tracing::trace!($($arg)+),
            ReportLevel::Debug => tracing::debug!($($arg)+),
            ReportLevel::Info => tracing::info!($($arg)+),
            ReportLevel::Warn => tracing::warn!($($arg)+),
        }
    };
}

/// Logs conflicts through `tracing`.
///
/// Category counts are logged at `info`; individual entries at the
/// configured level, up to `max_listed` per category. A category cut short
/// gets one extra event carrying the number of entries left out.
#[derive(Clone, Debug, Default)]
pub struct TracingSink {
    config: ReportConfig,
}

impl TracingSink {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }
}

impl<S: Debug, N: Debug> ConflictSink<S, N> for TracingSink {
    fn report(&mut self, kind: MergeKind, summary: &ConflictSummary<S, N>) -> ReportResult<()> {
        info!(
            %kind,
            duplicates = summary.duplicates.len(),
            mismatches = summary.sequence_name_mismatches.len(),
            collisions = summary.name_collisions.len(),
            "merge conflicts"
        );

        let level = self.config.level;
        let max = self.config.max_listed;
        for d in summary.duplicates.iter().take(max) {
            event_at!(level, %kind, sequence = ?d.sequence, name = ?d.name, "duplicate binding");
        }
        note_omitted(level, kind, "duplicates", summary.duplicates.len(), max);
        for m in summary.sequence_name_mismatches.iter().take(max) {
            event_at!(
                level,
                %kind,
                sequence = ?m.sequence,
                left = ?m.left_name,
                right = ?m.right_name,
                "sequence bound to different names"
            );
        }
        note_omitted(
            level,
            kind,
            "sequence/name mismatches",
            summary.sequence_name_mismatches.len(),
            max,
        );
        for c in summary.name_collisions.iter().take(max) {
            event_at!(
                level,
                %kind,
                name = ?c.name,
                left = ?c.left_sequence,
                right = ?c.right_sequence,
                "name bound to different sequences"
            );
        }
        note_omitted(level, kind, "name collisions", summary.name_collisions.len(), max);
        Ok(())
    }
}

fn note_omitted(level: ReportLevel, kind: MergeKind, category: &str, len: usize, max: usize) {
    if len > max {
        event_at!(level, %kind, category, omitted = len - max, "more conflict entries not listed");
    }
}

/// Writes a plain-text report to any [`Write`] implementation.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
    config: ReportConfig,
}

impl<W: Write> WriterSink<W> {
    /// A sink that lists every entry.
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, ReportConfig::unlimited())
    }

    pub fn with_config(writer: W, config: ReportConfig) -> Self {
        Self { writer, config }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, S, N> ConflictSink<S, N> for WriterSink<W>
where
    W: Write,
    S: Display,
    N: Display,
{
    fn report(&mut self, kind: MergeKind, summary: &ConflictSummary<S, N>) -> ReportResult<()> {
        let max = self.config.max_listed;
        writeln!(self.writer, "{kind}: {} conflict entries", summary.total())?;
        write_category(&mut self.writer, "duplicates", &summary.duplicates, max)?;
        write_category(
            &mut self.writer,
            "sequence/name mismatches",
            &summary.sequence_name_mismatches,
            max,
        )?;
        write_category(&mut self.writer, "name collisions", &summary.name_collisions, max)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn write_category<W: Write, T: fmt::Display>(
    writer: &mut W,
    label: &str,
    entries: &[T],
    max: usize,
) -> std::io::Result<()> {
    writeln!(writer, "  {label}: {}", entries.len())?;
    for entry in entries.iter().take(max) {
        writeln!(writer, "    {entry}")?;
    }
    if entries.len() > max {
        writeln!(writer, "    ... and {} more", entries.len() - max)?;
    }
    Ok(())
}

/// Keeps every report it receives. Mostly useful in tests.
#[derive(Clone, Debug)]
pub struct CollectingSink<S, N> {
    reports: Vec<(MergeKind, ConflictSummary<S, N>)>,
}

impl<S, N> CollectingSink<S, N> {
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    /// Reports received so far, oldest first.
    pub fn reports(&self) -> &[(MergeKind, ConflictSummary<S, N>)] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<(MergeKind, ConflictSummary<S, N>)> {
        self.reports
    }
}

impl<S, N> Default for CollectingSink<S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone, N: Clone> ConflictSink<S, N> for CollectingSink<S, N> {
    fn report(&mut self, kind: MergeKind, summary: &ConflictSummary<S, N>) -> ReportResult<()> {
        self.reports.push((kind, summary.clone()));
        Ok(())
    }
}

/// Drops every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardSink;

impl<S, N> ConflictSink<S, N> for DiscardSink {
    fn report(&mut self, _kind: MergeKind, _summary: &ConflictSummary<S, N>) -> ReportResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn sample() -> ConflictSummary<&'static str, &'static str> {
        let mut summary = ConflictSummary::new();
        summary.record_duplicate("BBB", "y");
        summary.record_mismatch("AAA", "x", "x2");
        summary.record_collision("n", "DDD", "EEE");
        summary.record_collision("n", "DDD", "FFF");
        summary
    }

    #[test]
    fn writer_sink_lists_entries() {
        let mut sink = WriterSink::new(Vec::new());
        sink.report(MergeKind::Union, &sample()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        assert!(text.starts_with("union: 4 conflict entries\n"));
        assert!(text.contains("  duplicates: 1\n    duplicate BBB (y)\n"));
        assert!(text.contains("sequence AAA named x on the left, x2 on the right"));
        assert!(text.contains("  name collisions: 2\n"));
    }

    #[test]
    fn writer_sink_truncates_long_categories() {
        let config = ReportConfig {
            max_listed: 1,
            ..Default::default()
        };
        let mut sink = WriterSink::with_config(Vec::new(), config);
        sink.report(MergeKind::Difference, &sample()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        assert!(text.contains("name n bound to DDD on the left, EEE on the right"));
        assert!(!text.contains("FFF"));
        assert!(text.contains("... and 1 more"));
    }

    #[test]
    fn writer_sink_surfaces_io_errors() {
        struct Full;
        impl Write for Full {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("no space"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sink = WriterSink::new(Full);
        let err = sink.report(MergeKind::Union, &sample()).unwrap_err();
        assert!(err.to_string().contains("no space"));
    }

    #[test]
    fn collecting_sink_keeps_order() {
        let mut sink = CollectingSink::new();
        sink.report(MergeKind::Intersect, &sample()).unwrap();
        sink.report(MergeKind::Union, &ConflictSummary::new()).unwrap();

        let reports = sink.into_reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].0, MergeKind::Intersect);
        assert_eq!(reports[0].1.total(), 4);
        assert!(reports[1].1.is_empty());
    }

    /// Shared buffer handed to a `fmt` subscriber as its writer.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logged(config: ReportConfig, summary: &ConflictSummary<&str, &str>) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            TracingSink::new(config).report(MergeKind::Union, summary).unwrap();
        });
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn tracing_sink_notes_omitted_entries() {
        let config = ReportConfig {
            max_listed: 1,
            level: ReportLevel::Warn,
        };
        let text = logged(config, &sample());

        assert!(text.contains("EEE"));
        assert!(!text.contains("FFF"));
        let notes: Vec<_> = text
            .lines()
            .filter(|l| l.contains("more conflict entries not listed"))
            .collect();
        assert_eq!(notes.len(), 1, "got: {text}");
        assert!(notes[0].contains("WARN"));
        assert!(notes[0].contains("name collisions"));
        assert!(notes[0].contains("omitted=1"));
    }

    #[test]
    fn tracing_sink_lists_everything_under_the_limit() {
        let text = logged(ReportConfig::default(), &sample());
        assert!(text.contains("FFF"));
        assert!(!text.contains("not listed"));
    }

    #[test]
    fn tracing_and_discard_sinks_accept_reports() {
        let summary = sample();
        assert!(TracingSink::default().report(MergeKind::Union, &summary).is_ok());
        assert!(DiscardSink.report(MergeKind::Union, &summary).is_ok());
    }
}
