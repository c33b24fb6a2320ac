use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment attached to an analysis result
///
/// Only the English variant names are accepted on the wire, so a row always
/// holds exactly the value that was posted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mock analysis result for a single post
///
/// Records are never mutated after creation: they are picked from the mock
/// list, rendered, and optionally appended to the spreadsheet as one row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Handle of the post author
    pub username: String,

    /// Text of the post
    pub content: String,

    /// One-line summary of the post
    pub summary: String,

    pub sentiment: Sentiment,

    /// Post time as displayed, stored verbatim
    pub timestamp: String,
}

impl AnalysisRecord {
    /// Spreadsheet row for this record, in column order
    pub fn to_row(&self) -> [String; 5] {
        [
            self.username.clone(),
            self.content.clone(),
            self.summary.clone(),
            self.sentiment.to_string(),
            self.timestamp.clone(),
        ]
    }
}
