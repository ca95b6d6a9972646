//! Labeled samples and their loaders.
//!
//! A sample is two disjoint sets of words — accepted and rejected — plus the
//! alphabet of symbols appearing in either set. Two file formats are
//! supported: the line-oriented Abbadingo format and a JSON problem-instance
//! document. All validation happens here, before the search core ever runs.

pub mod abbadingo;
pub mod json;

use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Input format of a sample file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// Line-oriented numeric format: `count alphabet-size` header, then one
    /// `label length sym sym ...` line per word.
    Abbadingo,
    /// JSON document with `positive`/`negative` word lists and redundant
    /// counts.
    Json,
}

/// A validated labeled sample: disjoint accept and reject word sets over a
/// sorted alphabet. Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub accept: Vec<String>,
    pub reject: Vec<String>,
    pub alphabet: Vec<char>,
}

impl Sample {
    /// Build a sample from raw word lists, checking disjointness and deriving
    /// the sorted alphabet.
    pub fn new(accept: Vec<String>, reject: Vec<String>) -> Result<Self, SampleError> {
        let reject_set: BTreeSet<&String> = reject.iter().collect();
        if let Some(word) = accept.iter().find(|w| reject_set.contains(w)) {
            return Err(SampleError::Overlap { word: word.clone() });
        }
        let alphabet: BTreeSet<char> = accept
            .iter()
            .chain(reject.iter())
            .flat_map(|w| w.chars())
            .collect();
        Ok(Self {
            accept,
            reject,
            alphabet: alphabet.into_iter().collect(),
        })
    }

    /// Load and validate a sample file in the given format.
    pub fn load(path: &Path, format: SampleFormat) -> Result<Self, SampleError> {
        match format {
            SampleFormat::Abbadingo => abbadingo::load(path),
            SampleFormat::Json => json::load(path),
        }
    }
}

/// Errors from loading or validating a sample.
#[derive(Debug)]
pub enum SampleError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file contains no words.
    Empty { path: PathBuf },
    /// The `count alphabet-size` header line is malformed.
    Header { content: String },
    /// A word line is malformed; `number` is the 1-based line number.
    Line { number: usize, message: String },
    /// The number of word lines does not match the declared count.
    WordCount { declared: usize, actual: usize },
    /// The derived alphabet is larger than the declared alphabet size.
    AlphabetSize { declared: usize, actual: usize },
    /// A word appears in both the accept and the reject set.
    Overlap { word: String },
    /// The JSON document could not be parsed.
    Json { message: String },
    /// A redundant count field in the JSON document does not match the data.
    Count {
        field: &'static str,
        declared: usize,
        actual: usize,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            SampleError::Empty { path } => {
                write!(f, "there are no words in {}", path.display())
            }
            SampleError::Header { content } => {
                write!(f, "malformed header line: {:?}", content)
            }
            SampleError::Line { number, message } => {
                write!(f, "line {}: {}", number, message)
            }
            SampleError::WordCount { declared, actual } => write!(
                f,
                "file declares {} words but contains {}",
                declared, actual
            ),
            SampleError::AlphabetSize { declared, actual } => write!(
                f,
                "declared alphabet size {} is less than real alphabet size {}",
                declared, actual
            ),
            SampleError::Overlap { word } => write!(
                f,
                "word {:?} appears in both the accept and the reject set",
                word
            ),
            SampleError::Json { message } => write!(f, "invalid JSON sample: {}", message),
            SampleError::Count {
                field,
                declared,
                actual,
            } => write!(
                f,
                "{} declares {} words but the list contains {}",
                field, declared, actual
            ),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
