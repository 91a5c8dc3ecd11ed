//! Smoke run results and their one-line rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Count of records containing one needle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedleCount {
    pub needle: String,
    pub count: u64,
}

/// Result of one smoke run: one count per needle, in query order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokeReport {
    pub app_name: String,
    pub input_path: String,
    pub counts: Vec<NeedleCount>,
}

impl SmokeReport {
    pub fn new(app_name: impl Into<String>, input_path: impl Into<String>) -> Self {
        SmokeReport {
            app_name: app_name.into(),
            input_path: input_path.into(),
            counts: Vec::new(),
        }
    }

    pub fn push(&mut self, needle: impl Into<String>, count: u64) {
        self.counts.push(NeedleCount {
            needle: needle.into(),
            count,
        });
    }

    /// Count for `needle`, if it was queried.
    pub fn count_for(&self, needle: &str) -> Option<u64> {
        self.counts
            .iter()
            .find(|c| c.needle == needle)
            .map(|c| c.count)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// `Lines with a: 2, lines with b: 1`
impl fmt::Display for SmokeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.counts.iter().enumerate() {
            if i == 0 {
                write!(f, "Lines with {}: {}", c.needle, c.count)?;
            } else {
                write!(f, ", lines with {}: {}", c.needle, c.count)?;
            }
        }
        Ok(())
    }
}
