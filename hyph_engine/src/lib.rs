/*! The hyphenation engine of a `troff`/`nroff` style formatter.

 Given a cell buffer framing a single word, [`analyze`](hyphen::analyze) returns the
 positions a hyphen may be inserted at, consulting an exception dictionary, a suffix
 table and digram statistics in turn. Configuration (threshold, exception words, mode)
 lives in a [`HyphenationConfig`](config::HyphenationConfig), which also understands the
 formatter's hyphenation requests.

 ```
 use hyph_engine::prelude::*;
 let mut config = HyphenationConfig::new();
 config.apply_request(".hw hy-phen-ation").unwrap();
 assert_eq!(mark_breaks("hyphenation", &config, "-"), "hy-phen-ation");
 ```
 */
#![forbid(unsafe_code)]

pub mod utils;
pub mod cells;
pub mod hyphen;
pub mod config;
pub mod requests;

#[doc(hidden)]
pub mod tests;

pub mod prelude {
    pub use crate::cells::{Cell, cells};
    pub use crate::config::{HyphenationConfig, HyphenationMode, DEFAULT_THRESHOLD};
    pub use crate::hyphen::{analyze, word_breaks, mark_breaks, BreakList};
    pub use crate::hyphen::exceptions::ExceptionDictionary;
    pub use crate::hyphen::suffixes::SuffixTable;
    pub use crate::hyphen::window::WordWindow;
    pub use crate::requests::Request;
    pub use crate::utils::errors::HyphError;
}
