use std::fmt;

use serde::{Deserialize, Serialize};

/// One drawable entry: a seat number or an imported label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Number(u32),
    Label(String),
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Number(n) => write!(f, "{n}"),
            Entry::Label(label) => f.write_str(label),
        }
    }
}

impl From<u32> for Entry {
    fn from(n: u32) -> Self {
        Entry::Number(n)
    }
}

impl From<String> for Entry {
    fn from(label: String) -> Self {
        Entry::Label(label)
    }
}

impl From<&str> for Entry {
    fn from(label: &str) -> Self {
        Entry::Label(label.to_string())
    }
}

/// Where the current pool came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolSource {
    Numbers,
    Labels,
}
