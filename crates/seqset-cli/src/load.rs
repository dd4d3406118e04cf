//! Reading sequence/name bindings from input files.
//!
//! Collections are backed by a `BTreeMap` so that output comes out sorted by
//! sequence. Conflicting re-bindings inside a single file are logged and the
//! first binding is kept.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context};
use seqset_core::{InsertOutcome, KeyedCollection};
use tracing::{debug, warn};

use crate::cli::InputFormat;
use crate::config::InputConfig;

pub type Collection = KeyedCollection<String, String, BTreeMap<String, String>>;

/// Load `path` in the given format.
pub fn load(path: &Path, format: InputFormat, config: &InputConfig) -> anyhow::Result<Collection> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let source = path.display().to_string();
    let collection = match format {
        InputFormat::Pairs => parse_pairs(reader, &source, config)?,
        InputFormat::Fasta => parse_fasta(reader, &source)?,
    };
    debug!(source = %source, bindings = collection.len(), "loaded input");
    Ok(collection)
}

/// Parse `sequence<delimiter>name` lines.
pub fn parse_pairs<R: BufRead>(
    reader: R,
    source: &str,
    config: &InputConfig,
) -> anyhow::Result<Collection> {
    let mut collection = Collection::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("{source}:{line_no}: read failed"))?;
        let content = if config.trim { line.trim_start() } else { line.as_str() };
        if content.trim().is_empty() || is_comment(content, &config.comment_prefix) {
            continue;
        }

        let Some((sequence, name)) = line.split_once(config.delimiter.as_str()) else {
            bail!("{source}:{line_no}: missing delimiter {:?}", config.delimiter);
        };
        let (sequence, name) = if config.trim {
            (sequence.trim(), name.trim())
        } else {
            (sequence, name)
        };
        if sequence.is_empty() {
            bail!("{source}:{line_no}: empty sequence");
        }

        insert_logged(&mut collection, source, line_no, sequence.to_string(), name.to_string());
    }
    Ok(collection)
}

/// Parse FASTA records. The sequence is the key; the first token of the
/// header is the name. Lines starting with `;` are comments.
pub fn parse_fasta<R: BufRead>(reader: R, source: &str) -> anyhow::Result<Collection> {
    let mut collection = Collection::new();
    // (header line, name, sequence so far)
    let mut current: Option<(usize, String, String)> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("{source}:{line_no}: read failed"))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                finish_record(&mut collection, source, record)?;
            }
            let Some(name) = header.split_whitespace().next() else {
                bail!("{source}:{line_no}: empty FASTA header");
            };
            current = Some((line_no, name.to_string(), String::new()));
        } else {
            match current.as_mut() {
                Some((_, _, sequence)) => sequence.push_str(line),
                None => bail!("{source}:{line_no}: sequence data before first header"),
            }
        }
    }

    if let Some(record) = current {
        finish_record(&mut collection, source, record)?;
    }
    Ok(collection)
}

fn is_comment(line: &str, prefix: &str) -> bool {
    !prefix.is_empty() && line.starts_with(prefix)
}

fn finish_record(
    collection: &mut Collection,
    source: &str,
    (line_no, name, sequence): (usize, String, String),
) -> anyhow::Result<()> {
    if sequence.is_empty() {
        bail!("{source}:{line_no}: record {name} has no sequence");
    }
    insert_logged(collection, source, line_no, sequence, name);
    Ok(())
}

fn insert_logged(
    collection: &mut Collection,
    source: &str,
    line_no: usize,
    sequence: String,
    name: String,
) {
    match collection.insert((sequence, name)) {
        InsertOutcome::Inserted => {}
        InsertOutcome::Duplicate => {
            debug!(source, line = line_no, "repeated binding ignored");
        }
        InsertOutcome::Rejected { existing, rejected } => {
            warn!(
                source,
                line = line_no,
                kept = %existing,
                dropped = %rejected,
                "sequence already bound to another name; keeping the first"
            );
        }
    }
}
