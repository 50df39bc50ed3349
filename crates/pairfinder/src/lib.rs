//! # PairFinder
//!
//! Single-pass lookup of two positions in an integer sequence whose values
//! add up to a target.
//!
//! The scan walks the sequence once, left to right, keeping a table of the
//! earliest index at which each value was seen. At every position it asks
//! whether the value still missing to reach the target has already been
//! seen; the first time the answer is yes, the two indices are returned.
//!
//! ## Layout
//!
//! - **Finder**: the scan itself ([`find`], [`PairFinder`])
//! - **Lookup table**: value to earliest-index map ([`LookupTable`])
//! - **Result**: the ordered index pair ([`ResultPair`])
//! - **Sequence input**: text parsing for the command line ([`parse_sequence`])
//!
//! ```
//! use pairfinder::find;
//!
//! let pair = find(&[2, 7, 11, 15], 9).unwrap();
//! assert_eq!(pair.indices(), (0, 1));
//!
//! assert!(find(&[3], 6).is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod finder;
pub mod lookup;
pub mod pair;
pub mod sequence;

// Re-export main types
pub use error::{PairFinderError, Result};
pub use finder::{find, PairFinder};
pub use lookup::LookupTable;
pub use pair::ResultPair;
pub use sequence::{parse_sequence, read_sequence};

/// PairFinder version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
