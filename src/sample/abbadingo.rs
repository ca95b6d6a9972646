//! Loader for the line-oriented Abbadingo sample format.
//!
//! The first line is a header `count alphabet-size`. Every following line
//! describes one word as `label length sym sym ...` where label 1 marks an
//! accept word, label 0 a reject word, and each `sym` is a single symbol.
//! The empty word is written with length 0 and no symbols.

use std::fs;
use std::path::Path;

use super::{Sample, SampleError};

/// Read and parse an Abbadingo file.
pub fn load(path: &Path) -> Result<Sample, SampleError> {
    let text = fs::read_to_string(path).map_err(|source| SampleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if text.lines().count() <= 1 {
        return Err(SampleError::Empty {
            path: path.to_path_buf(),
        });
    }
    parse(&text)
}

/// Parse Abbadingo text. Validates the header, the per-line format, the
/// declared word count and alphabet size, and set disjointness.
pub fn parse(text: &str) -> Result<Sample, SampleError> {
    let mut lines = text.lines();
    let header = lines.next().unwrap_or("");
    let (declared_count, declared_alphabet) = parse_header(header)?;

    let mut accept = Vec::new();
    let mut reject = Vec::new();
    let mut actual = 0;
    for (index, line) in lines.enumerate() {
        let number = index + 2;
        if line.trim().is_empty() {
            continue;
        }
        actual += 1;
        let (label, word) = parse_word_line(number, line)?;
        if label {
            accept.push(word);
        } else {
            reject.push(word);
        }
    }

    if actual != declared_count {
        return Err(SampleError::WordCount {
            declared: declared_count,
            actual,
        });
    }

    let sample = Sample::new(accept, reject)?;
    if sample.alphabet.len() > declared_alphabet {
        return Err(SampleError::AlphabetSize {
            declared: declared_alphabet,
            actual: sample.alphabet.len(),
        });
    }
    Ok(sample)
}

fn parse_header(line: &str) -> Result<(usize, usize), SampleError> {
    let malformed = || SampleError::Header {
        content: line.to_string(),
    };
    let mut fields = line.split_whitespace();
    let count = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(malformed)?;
    let alphabet = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }
    Ok((count, alphabet))
}

/// Parse one `label length sym sym ...` line. Returns the label (true for
/// accept) and the word.
fn parse_word_line(number: usize, line: &str) -> Result<(bool, String), SampleError> {
    let mut fields = line.split_whitespace();

    let label = match fields.next() {
        Some("1") => true,
        Some("0") => false,
        Some(other) => {
            return Err(SampleError::Line {
                number,
                message: format!("unrecognized label {:?}", other),
            });
        }
        None => {
            return Err(SampleError::Line {
                number,
                message: "missing label".to_string(),
            });
        }
    };

    let length: usize = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| SampleError::Line {
            number,
            message: "missing or malformed word length".to_string(),
        })?;

    let mut word = String::new();
    for field in fields {
        let mut chars = field.chars();
        let symbol = chars.next().ok_or_else(|| SampleError::Line {
            number,
            message: "empty symbol".to_string(),
        })?;
        if chars.next().is_some() {
            return Err(SampleError::Line {
                number,
                message: format!("symbol {:?} is not a single character", field),
            });
        }
        word.push(symbol);
    }

    if word.chars().count() != length {
        return Err(SampleError::Line {
            number,
            message: format!(
                "word has {} symbols but declares length {}",
                word.chars().count(),
                length
            ),
        });
    }

    Ok((label, word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_small_sample() {
        let text = "3 2\n1 1 a\n1 2 a a\n0 1 b\n";
        let sample = parse(text).unwrap();
        assert_eq!(sample.accept, vec!["a", "aa"]);
        assert_eq!(sample.reject, vec!["b"]);
        assert_eq!(sample.alphabet, vec!['a', 'b']);
    }

    #[test]
    fn test_parse_empty_word() {
        let text = "2 1\n0 0\n1 1 a\n";
        let sample = parse(text).unwrap();
        assert_eq!(sample.reject, vec![""]);
        assert_eq!(sample.accept, vec!["a"]);
    }

    #[test]
    fn test_malformed_header() {
        assert!(matches!(
            parse("nonsense\n1 1 a\n"),
            Err(SampleError::Header { .. })
        ));
        assert!(matches!(
            parse("2\n1 1 a\n"),
            Err(SampleError::Header { .. })
        ));
    }

    #[test]
    fn test_word_count_mismatch() {
        let err = parse("3 1\n1 1 a\n0 2 a a\n").unwrap_err();
        match err {
            SampleError::WordCount { declared, actual } => {
                assert_eq!(declared, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected WordCount, got {:?}", other),
        }
    }

    #[test]
    fn test_length_mismatch() {
        let err = parse("1 1\n1 3 a a\n").unwrap_err();
        assert!(matches!(err, SampleError::Line { number: 2, .. }));
    }

    #[test]
    fn test_unrecognized_label() {
        let err = parse("1 1\n2 1 a\n").unwrap_err();
        assert!(matches!(err, SampleError::Line { number: 2, .. }));
    }

    #[test]
    fn test_declared_alphabet_too_small() {
        let err = parse("2 1\n1 1 a\n0 1 b\n").unwrap_err();
        assert!(matches!(
            err,
            SampleError::AlphabetSize {
                declared: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_overlap_detected() {
        let err = parse("2 1\n1 1 a\n0 1 a\n").unwrap_err();
        assert!(matches!(err, SampleError::Overlap { .. }));
    }
}
