//! Whole-token search over space-padded lines.
//!
//! A line is padded with one space on each side so every token, including the
//! first and last, is delimited by spaces. A token matches only as `" token "`,
//! never inside a larger word.

pub(crate) fn pad(line: &str) -> String {
    format!(" {line} ")
}

fn delimited(token: &str) -> String {
    format!(" {token} ")
}

/// Whether `padded` contains `token` as a whole, space-delimited token.
pub(crate) fn contains_token(padded: &str, token: &str) -> bool {
    padded.contains(&delimited(token))
}

/// Remove the first whole-token occurrence of `token`, keeping one space.
pub(crate) fn remove_token(padded: &str, token: &str) -> String {
    padded.replacen(&delimited(token), " ", 1)
}
