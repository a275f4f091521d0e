/*! Errors raised while *configuring* the hyphenation engine.

   Analysing a word never fails: malformed input, missing table entries and the like
   simply yield fewer (or no) break points. Only loading exception words, applying
   requests and building custom suffix tables report a [`HyphError`].
 */

/// Error type of the configuration interface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HyphError {
    /// The exception dictionary has no room for another word; the words loaded before
    /// the offending one are kept.
    #[error("Exception word list full.")]
    DictionaryFull { capacity: usize },
    /// A numeric request argument that is not a number.
    #[error("bad number `{argument}` in request .{request}")]
    InvalidNumber { request: &'static str, argument: String },
    /// A line of a textual suffix table that could not be read.
    #[error("suffix table, line {line}: {message}")]
    SuffixNotation { line: usize, message: String },
}
