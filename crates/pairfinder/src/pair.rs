//! The ordered index pair returned by a successful scan

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PairFinderError;

/// Two distinct positions `(first, second)` with `first < second`.
///
/// Serializes as a two-element array, `[first, second]`. Deserializing
/// rejects arrays whose indices are not strictly increasing. For a scan
/// result that may be empty, see [`optional`].
///
/// # Example
///
/// ```
/// use pairfinder::ResultPair;
///
/// let pair = ResultPair::new(1, 3).unwrap();
/// assert_eq!(pair.indices(), (1, 3));
/// assert_eq!(pair.to_string(), "(1, 3)");
///
/// assert!(ResultPair::new(3, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[usize; 2]", try_from = "[usize; 2]")]
pub struct ResultPair {
    first: usize,
    second: usize,
}

impl ResultPair {
    /// Build a pair, checking `first < second`.
    pub fn new(first: usize, second: usize) -> Result<Self, PairFinderError> {
        if first >= second {
            return Err(PairFinderError::InvalidPair { first, second });
        }
        Ok(Self { first, second })
    }

    /// Caller guarantees `first < second`.
    pub(crate) fn ordered(first: usize, second: usize) -> Self {
        debug_assert!(first < second);
        Self { first, second }
    }

    /// The earlier index.
    pub fn first(&self) -> usize {
        self.first
    }

    /// The later index.
    pub fn second(&self) -> usize {
        self.second
    }

    /// Both indices as a tuple.
    pub fn indices(&self) -> (usize, usize) {
        (self.first, self.second)
    }
}

impl fmt::Display for ResultPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

impl From<ResultPair> for [usize; 2] {
    fn from(pair: ResultPair) -> Self {
        [pair.first, pair.second]
    }
}

impl From<ResultPair> for (usize, usize) {
    fn from(pair: ResultPair) -> Self {
        pair.indices()
    }
}

impl TryFrom<[usize; 2]> for ResultPair {
    type Error = PairFinderError;

    fn try_from([first, second]: [usize; 2]) -> Result<Self, Self::Error> {
        Self::new(first, second)
    }
}

impl TryFrom<(usize, usize)> for ResultPair {
    type Error = PairFinderError;

    fn try_from((first, second): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(first, second)
    }
}

/// Serde adapter for `Option<ResultPair>`: `[first, second]` for a pair and
/// `[]` for no pair.
///
/// ```
/// use pairfinder::{find, ResultPair};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Answer {
///     #[serde(with = "pairfinder::pair::optional")]
///     pair: Option<ResultPair>,
/// }
///
/// let answer = Answer { pair: find(&[3], 6) };
/// assert_eq!(serde_json::to_string(&answer).unwrap(), r#"{"pair":[]}"#);
/// ```
pub mod optional {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::ResultPair;

    /// Write `[first, second]`, or `[]` for `None`.
    pub fn serialize<S: Serializer>(
        result: &Option<ResultPair>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match result {
            Some(pair) => pair.serialize(serializer),
            None => <[usize; 0]>::serialize(&[], serializer),
        }
    }

    /// Read `[]` as `None` and `[first, second]` as a checked pair.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ResultPair>, D::Error> {
        let indices = Vec::<usize>::deserialize(deserializer)?;
        match *indices.as_slice() {
            [] => Ok(None),
            [first, second] => ResultPair::new(first, second)
                .map(Some)
                .map_err(D::Error::custom),
            _ => Err(D::Error::invalid_length(
                indices.len(),
                &"an empty array or two indices",
            )),
        }
    }
}
