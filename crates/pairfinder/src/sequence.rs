//! Text input for integer sequences
//!
//! Accepts the shapes people type or paste: `[1, 2, 3]`, `1,2,3`,
//! `1 2 3`, or any mix of commas and whitespace between elements.

use std::io::Read;

use crate::error::{PairFinderError, Result};

/// Parse a sequence of `i64` from text.
///
/// Surrounding brackets are optional but must be balanced. Elements are
/// separated by commas, whitespace, or both. Blank input and `[]` give the
/// empty sequence, and a single trailing comma is allowed.
///
/// # Errors
///
/// - `UnbalancedBrackets` if only one of `[` / `]` is present
/// - `EmptyToken` for a separator with no element before it (`1,,2`)
/// - `InvalidInteger` for anything that does not parse as `i64`
///
/// # Example
///
/// ```
/// use pairfinder::parse_sequence;
///
/// assert_eq!(parse_sequence("[2, 7, 11, 15]").unwrap(), vec![2, 7, 11, 15]);
/// assert_eq!(parse_sequence("-1 0 1").unwrap(), vec![-1, 0, 1]);
/// assert!(parse_sequence("1,,2").is_err());
/// ```
pub fn parse_sequence(input: &str) -> Result<Vec<i64>> {
    let body = strip_brackets(input.trim())?;
    let chunks: Vec<&str> = body.split(',').collect();
    let last = chunks.len() - 1;
    let mut values = Vec::new();

    for (i, chunk) in chunks.iter().enumerate() {
        let mut tokens = chunk.split_whitespace().peekable();

        if tokens.peek().is_none() {
            // Blank input, or the chunk after a trailing comma
            if last == 0 || (i == last && i > 0) {
                continue;
            }
            return Err(PairFinderError::EmptyToken {
                position: values.len(),
            });
        }

        for token in tokens {
            let value = token
                .parse::<i64>()
                .map_err(|_| PairFinderError::InvalidInteger {
                    token: token.to_string(),
                    position: values.len(),
                })?;
            values.push(value);
        }
    }

    Ok(values)
}

/// Read all of `reader` and parse it with [`parse_sequence`].
pub fn read_sequence<R: Read>(mut reader: R) -> Result<Vec<i64>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_sequence(&input)
}

fn strip_brackets(input: &str) -> Result<&str> {
    match (input.strip_prefix('['), input.ends_with(']')) {
        (Some(rest), true) => Ok(&rest[..rest.len() - 1]),
        (None, false) => Ok(input),
        _ => Err(PairFinderError::UnbalancedBrackets),
    }
}
