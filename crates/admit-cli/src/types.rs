use admit_transform::ParsedProgram;
use serde::Serialize;

/// One parsed input line.
#[derive(Debug, Serialize)]
pub struct ParsedLine {
    /// 1-based position among the non-blank input lines.
    pub line: usize,
    #[serde(flatten)]
    pub parsed: ParsedProgram,
}

#[derive(Debug)]
pub struct ParseOutcome {
    pub lines: Vec<ParsedLine>,
    pub unmatched: usize,
}

impl ParseOutcome {
    pub fn matched(&self) -> usize {
        self.lines.len() - self.unmatched
    }

    /// Process exit code for a finished parse run.
    ///
    /// Unmatched lines fail the run only when `fail_on_unmatched` is set.
    pub fn exit_code(&self, fail_on_unmatched: bool) -> i32 {
        i32::from(fail_on_unmatched && self.unmatched > 0)
    }
}
