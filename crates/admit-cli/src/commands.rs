use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span, trace, warn};

use admit_model::ReferenceCatalog;
use admit_transform::ProgramParser;

use crate::cli::ParseArgs;
use crate::logging::redact_value;
use crate::types::{ParseOutcome, ParsedLine};

/// Load the reference catalog from `dir`, `ADMIT_STANDARDS_DIR`, or the
/// embedded data.
pub fn load_catalog(dir: Option<&Path>) -> Result<ReferenceCatalog> {
    match dir {
        Some(dir) => admit_standards::load(Some(dir))
            .with_context(|| format!("load reference data from {}", dir.display())),
        None => admit_standards::load(None).context("load reference data"),
    }
}

/// Collect input lines from arguments, `--input`, or stdin.
pub fn read_input_lines(args: &ParseArgs) -> Result<Vec<String>> {
    if !args.lines.is_empty() {
        return Ok(args.lines.clone());
    }
    if let Some(path) = &args.input {
        let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
        return collect_lines(BufReader::new(file))
            .with_context(|| format!("read {}", path.display()));
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("no input lines: pass LINE arguments, --input FILE, or pipe lines on stdin");
    }
    collect_lines(stdin.lock()).context("read stdin")
}

fn collect_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Parse every non-blank line.
pub fn parse_lines<I, S>(catalog: &ReferenceCatalog, lines: I) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let span = info_span!("parse");
    let _guard = span.enter();
    let parser = ProgramParser::new(catalog);

    let mut parsed_lines = Vec::new();
    let mut unmatched = 0usize;
    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        let number = parsed_lines.len() + 1;
        trace!(line = number, text = redact_value(line), "parsing line");
        let parsed = parser.parse(line);
        if parsed.is_matched() {
            debug!(
                line = number,
                program = parsed.program.as_deref().unwrap_or_default(),
                level = parsed.level.map(|level| level.as_str()).unwrap_or("-"),
                "matched"
            );
        } else {
            unmatched += 1;
            warn!(line = number, "no program recognized; needs manual review");
        }
        parsed_lines.push(ParsedLine {
            line: number,
            parsed,
        });
    }

    let outcome = ParseOutcome {
        lines: parsed_lines,
        unmatched,
    };
    info!(
        lines = outcome.lines.len(),
        matched = outcome.matched(),
        unmatched = outcome.unmatched,
        "parse complete"
    );
    outcome
}

/// Render parsed lines as JSON, one object per line.
pub fn to_json_lines(outcome: &ParseOutcome) -> Result<Vec<String>> {
    outcome
        .lines
        .iter()
        .map(|line| serde_json::to_string(line).context("serialize parsed line"))
        .collect()
}
