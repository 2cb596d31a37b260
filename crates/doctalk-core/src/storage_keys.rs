//! Storage key conventions.
//!
//! Pure string functions. These define the canonical names of persisted
//! documents regardless of which store backs them.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::models::user::UserId;

pub const QUIZ_RESULTS_PREFIX: &str = "doctalk-quiz-results-";

/// Bytes kept as-is in a file name. Everything else, `.` included, is
/// percent-encoded, so the result is never `..`, never contains a path
/// separator and never starts with a dot.
const FILE_NAME_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

pub fn quiz_results(user: &UserId) -> String {
    format!("{QUIZ_RESULTS_PREFIX}{user}")
}

/// File name for a key on a local filesystem store. The encoding is
/// reversible: distinct keys always get distinct file names.
pub fn file_name(key: &str) -> String {
    format!("{}.json", utf8_percent_encode(key, FILE_NAME_ESCAPES))
}
