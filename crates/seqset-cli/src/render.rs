//! Text and JSON output for the `seqset` binary.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;
use seqset_merge::{ConflictSink, ConflictSummary, MergeKind, ReportResult};

use crate::load::Collection;

/// Colored conflict report, one line per entry.
pub struct TerminalSink<W> {
    writer: W,
    max_listed: usize,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(writer: W, max_listed: usize) -> Self {
        Self { writer, max_listed }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ConflictSink<String, String> for TerminalSink<W> {
    fn report(
        &mut self,
        kind: MergeKind,
        summary: &ConflictSummary<String, String>,
    ) -> ReportResult<()> {
        let w = &mut self.writer;
        if summary.is_empty() {
            writeln!(w, "{} {kind}: no conflicts", "✓".green().bold())?;
            return Ok(());
        }

        let marker = if summary.has_disagreements() {
            "!".yellow().bold()
        } else {
            "✓".green().bold()
        };
        writeln!(
            w,
            "{marker} {kind}: {} duplicates, {} mismatches, {} collisions",
            summary.duplicates.len(),
            summary.sequence_name_mismatches.len(),
            summary.name_collisions.len()
        )?;

        for d in summary.duplicates.iter().take(self.max_listed) {
            writeln!(w, "  {} {} {}", "duplicate".dimmed(), d.sequence, d.name.cyan())?;
        }
        for m in summary.sequence_name_mismatches.iter().take(self.max_listed) {
            writeln!(
                w,
                "  {} {} {} ≠ {}",
                "mismatch".yellow(),
                m.sequence,
                m.left_name.green(),
                m.right_name.red()
            )?;
        }
        for c in summary.name_collisions.iter().take(self.max_listed) {
            writeln!(
                w,
                "  {} {} {} ↔ {}",
                "collision".red(),
                c.name.cyan(),
                c.left_sequence,
                c.right_sequence
            )?;
        }

        let hidden = summary.total().saturating_sub(
            summary.duplicates.len().min(self.max_listed)
                + summary.sequence_name_mismatches.len().min(self.max_listed)
                + summary.name_collisions.len().min(self.max_listed),
        );
        if hidden > 0 {
            writeln!(w, "  {}", format!("... {hidden} more not shown").dimmed())?;
        }
        w.flush()?;
        Ok(())
    }
}

/// Print bindings as `sequence<TAB>name` lines.
pub fn write_pairs<W: Write>(mut w: W, collection: &Collection) -> std::io::Result<()> {
    write!(w, "{collection}")?;
    w.flush()
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    operation: Option<MergeKind>,
    result: Vec<(&'a str, &'a str)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conflicts: Option<&'a ConflictSummary<String, String>>,
}

/// Print bindings (and conflicts, for merges) as one JSON document.
pub fn write_json<W: Write>(
    mut w: W,
    operation: Option<MergeKind>,
    collection: &Collection,
    conflicts: Option<&ConflictSummary<String, String>>,
) -> anyhow::Result<()> {
    let output = JsonOutput {
        operation,
        result: collection
            .iter()
            .map(|(sequence, name)| (sequence.as_str(), name.as_str()))
            .collect(),
        conflicts,
    };
    serde_json::to_writer_pretty(&mut w, &output)?;
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(pairs: &[(&str, &str)]) -> Collection {
        pairs
            .iter()
            .map(|(s, n)| (s.to_string(), n.to_string()))
            .collect()
    }

    fn summary() -> ConflictSummary<String, String> {
        let left = collection(&[("AAA", "x"), ("BBB", "y")]);
        let right = collection(&[("BBB", "y"), ("CCC", "x"), ("AAA", "x2")]);
        seqset_merge::union_with_conflicts(&left, &right).1
    }

    #[test]
    fn terminal_sink_lists_each_category() {
        colored::control::set_override(false);
        let mut sink = TerminalSink::new(Vec::new(), 10);
        sink.report(MergeKind::Union, &summary()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        assert!(text.contains("union: 1 duplicates, 1 mismatches, 1 collisions"));
        assert!(text.contains("duplicate BBB y"));
        assert!(text.contains("mismatch AAA x ≠ x2"));
        assert!(text.contains("collision x AAA ↔ CCC"));
        assert!(!text.contains("more not shown"));
    }

    #[test]
    fn terminal_sink_truncates() {
        colored::control::set_override(false);
        let mut sink = TerminalSink::new(Vec::new(), 0);
        sink.report(MergeKind::Union, &summary()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("... 3 more not shown"));
    }

    #[test]
    fn terminal_sink_empty_summary() {
        colored::control::set_override(false);
        let mut sink = TerminalSink::new(Vec::new(), 10);
        sink.report(MergeKind::Difference, &ConflictSummary::new()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.contains("difference: no conflicts"));
    }

    #[test]
    fn pairs_are_sorted_lines() {
        let mut out = Vec::new();
        write_pairs(&mut out, &collection(&[("BBB", "y"), ("AAA", "x")])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "AAA\tx\nBBB\ty\n");
    }

    #[test]
    fn json_includes_conflicts() {
        let mut out = Vec::new();
        let result = collection(&[("AAA", "x")]);
        write_json(&mut out, Some(MergeKind::Union), &result, Some(&summary())).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["operation"], "union");
        assert_eq!(value["result"], serde_json::json!([["AAA", "x"]]));
        assert_eq!(value["conflicts"]["sequence_name_mismatches"][0]["right_name"], "x2");
    }

    #[test]
    fn json_without_merge_omits_conflicts() {
        let mut out = Vec::new();
        write_json(&mut out, None, &collection(&[("AAA", "x")]), None).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value.get("operation").is_none());
        assert!(value.get("conflicts").is_none());
    }
}
