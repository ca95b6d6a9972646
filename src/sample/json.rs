//! Loader for the JSON problem-instance sample format.
//!
//! The document carries the two labeled word lists plus redundant counts that
//! are checked against the lists before the sample is accepted.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{Sample, SampleError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProblemInstance {
    positive: Vec<String>,
    negative: Vec<String>,
    num_positive: usize,
    num_negative: usize,
    num_total: usize,
}

/// Read and parse a JSON problem-instance file.
pub fn load(path: &Path) -> Result<Sample, SampleError> {
    let text = fs::read_to_string(path).map_err(|source| SampleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Parse a JSON problem-instance document and validate its redundant counts.
pub fn parse(text: &str) -> Result<Sample, SampleError> {
    let instance: ProblemInstance =
        serde_json::from_str(text).map_err(|e| SampleError::Json {
            message: e.to_string(),
        })?;

    if instance.positive.len() != instance.num_positive {
        return Err(SampleError::Count {
            field: "numPositive",
            declared: instance.num_positive,
            actual: instance.positive.len(),
        });
    }
    if instance.negative.len() != instance.num_negative {
        return Err(SampleError::Count {
            field: "numNegative",
            declared: instance.num_negative,
            actual: instance.negative.len(),
        });
    }
    let total = instance.positive.len() + instance.negative.len();
    if instance.num_total != total {
        return Err(SampleError::Count {
            field: "numTotal",
            declared: instance.num_total,
            actual: total,
        });
    }

    Sample::new(instance.positive, instance.negative)
}
