use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::Context;
use seqset_merge::{
    difference, difference_with_conflicts, intersect, intersect_with_conflicts, union,
    union_with_conflicts, ConflictSink, DiscardSink, MergeKind, ReportConfig, TracingSink,
    WriterSink,
};
use tracing::warn;

use crate::cli::*;
use crate::config::CliConfig;
use crate::load::{load, Collection};
use crate::render::{write_json, write_pairs, TerminalSink};

pub fn run_command(cli: Cli, config: &CliConfig) -> anyhow::Result<()> {
    match cli.command {
        Command::Union(args) => cmd_merge(MergeKind::Union, args, cli.format, config),
        Command::Intersect(args) => cmd_merge(MergeKind::Intersect, args, cli.format, config),
        Command::Difference(args) => cmd_merge(MergeKind::Difference, args, cli.format, config),
        Command::Show(args) => cmd_show(args, cli.format, config),
    }
}

fn cmd_merge(
    kind: MergeKind,
    args: MergeArgs,
    format: OutputFormat,
    config: &CliConfig,
) -> anyhow::Result<()> {
    let left = load(&args.left, args.input, &config.input)?;
    let right = load(&args.right, args.input, &config.input)?;

    match format {
        OutputFormat::Json => {
            let (result, summary) = match kind {
                MergeKind::Union => union_with_conflicts(&left, &right),
                MergeKind::Intersect => intersect_with_conflicts(&left, &right),
                MergeKind::Difference => difference_with_conflicts(&left, &right),
            };
            // The selected sink gets the summary in both formats.
            let mut sink = conflict_sink(&args, &config.report)?;
            if let Err(e) = sink.report(kind, &summary) {
                warn!(%kind, error = %e, "failed to report merge conflicts");
            }
            write_json(io::stdout().lock(), Some(kind), &result, Some(&summary))
        }
        OutputFormat::Text => {
            let mut sink = conflict_sink(&args, &config.report)?;
            let result = merge_reported(kind, &left, &right, sink.as_mut());
            write_pairs(io::stdout().lock(), &result)?;
            Ok(())
        }
    }
}

fn merge_reported(
    kind: MergeKind,
    left: &Collection,
    right: &Collection,
    sink: &mut dyn ConflictSink<String, String>,
) -> Collection {
    match kind {
        MergeKind::Union => union(left, right, sink),
        MergeKind::Intersect => intersect(left, right, sink),
        MergeKind::Difference => difference(left, right, sink),
    }
}

fn conflict_sink(
    args: &MergeArgs,
    report: &ReportConfig,
) -> anyhow::Result<Box<dyn ConflictSink<String, String>>> {
    if let Some(path) = &args.report_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create report {}", path.display()))?;
        return Ok(Box::new(WriterSink::with_config(
            BufWriter::new(file),
            report.clone(),
        )));
    }
    Ok(match args.report {
        ReportTarget::Terminal => Box::new(TerminalSink::new(io::stderr(), report.max_listed)),
        ReportTarget::Log => Box::new(TracingSink::new(report.clone())),
        ReportTarget::Discard => Box::new(DiscardSink),
    })
}

fn cmd_show(args: ShowArgs, format: OutputFormat, config: &CliConfig) -> anyhow::Result<()> {
    let collection = load(&args.path, args.input, &config.input)?;
    match format {
        OutputFormat::Json => write_json(io::stdout().lock(), None, &collection, None),
        OutputFormat::Text => {
            write_pairs(io::stdout().lock(), &collection)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn write_input(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    fn merge_args(dir: &Path, report_file: Option<std::path::PathBuf>) -> MergeArgs {
        MergeArgs {
            left: write_input(dir, "left.tsv", "AAA\tx\nBBB\ty\nDDD\tn\n"),
            right: write_input(dir, "right.tsv", "BBB\ty2\nCCC\tx\nEEE\tn\n"),
            input: InputFormat::Pairs,
            report: ReportTarget::Discard,
            report_file,
        }
    }

    #[test]
    fn report_file_receives_conflicts() {
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("report.txt");
        let args = merge_args(dir.path(), Some(report_path.clone()));
        let config = CliConfig::default();

        let left = load(&args.left, args.input, &config.input).unwrap();
        let right = load(&args.right, args.input, &config.input).unwrap();
        let mut sink = conflict_sink(&args, &config.report).unwrap();
        let result = merge_reported(MergeKind::Difference, &left, &right, sink.as_mut());
        drop(sink);

        let keys: Vec<_> = result.keys().cloned().collect();
        assert_eq!(keys, vec!["AAA", "DDD"]);

        let report = std::fs::read_to_string(&report_path).unwrap();
        assert!(report.starts_with("difference: 3 conflict entries"));
        assert!(report.contains("name n bound to DDD on the left, EEE on the right"));
    }

    #[test]
    fn text_merge_runs_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let args = merge_args(dir.path(), None);
        cmd_merge(MergeKind::Union, args, OutputFormat::Text, &CliConfig::default()).unwrap();
    }

    #[test]
    fn json_merge_runs_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let args = merge_args(dir.path(), None);
        cmd_merge(MergeKind::Intersect, args, OutputFormat::Json, &CliConfig::default()).unwrap();
    }

    #[test]
    fn json_merge_still_writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let report_path = dir.path().join("report.txt");
        let args = merge_args(dir.path(), Some(report_path.clone()));

        cmd_merge(MergeKind::Union, args, OutputFormat::Json, &CliConfig::default()).unwrap();

        let report = std::fs::read_to_string(&report_path).unwrap();
        assert!(report.starts_with("union: "));
        assert!(report.contains("sequence BBB named y on the left, y2 on the right"));
        assert!(report.contains("name x bound to AAA on the left, CCC on the right"));
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = merge_args(dir.path(), None);
        args.right = dir.path().join("absent.tsv");
        let err = cmd_merge(MergeKind::Union, args, OutputFormat::Text, &CliConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("failed to open"));
    }
}
