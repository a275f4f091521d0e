/*! Everything [`analyze`](crate::hyphen::analyze) depends on besides the word itself.

 A [`HyphenationConfig`] is owned by whoever drives the formatter. Analysis only needs a
 shared reference, while loading exception words or changing the threshold needs an
 exclusive one, so no word can be analyzed while the dictionary is being extended.
 */

use crate::cells::Cell;
use crate::hyphen::{self, BreakList};
use crate::hyphen::exceptions::ExceptionDictionary;
use crate::hyphen::suffixes::SuffixTable;
use crate::hyphen::window::WordWindow;
use crate::utils::Ptr;
use crate::utils::errors::HyphError;

/// The digram score a break must exceed unless configured otherwise.
pub const DEFAULT_THRESHOLD: i32 = 160;

/// Which breaks the caller wants, as the historic bit set: `1` hyphenate at all, `2` not on
/// the last line of a page, `4` never before the last two letters, `8` never after the
/// first two letters. `0` turns hyphenation off.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HyphenationMode(u8);

impl HyphenationMode {
    pub const OFF: HyphenationMode = HyphenationMode(0);
    pub const ON: HyphenationMode = HyphenationMode(1);
    /// Recorded for the page builder; has no effect on [`permits`](Self::permits).
    pub const NOT_LAST_LINE: HyphenationMode = HyphenationMode(2);
    pub const NOT_LAST_TWO: HyphenationMode = HyphenationMode(4);
    pub const NOT_FIRST_TWO: HyphenationMode = HyphenationMode(8);

    /// From the argument of a `.hy` request; negative values turn hyphenation off.
    pub fn new(n: i32) -> Self { HyphenationMode(n.clamp(0, u8::MAX as i32) as u8) }
    pub fn bits(self) -> u8 { self.0 }
    pub fn is_enabled(self) -> bool { self.0 != 0 }
    pub fn contains(self, other: HyphenationMode) -> bool { self.0 & other.0 == other.0 }

    /// Whether a break at `pos` in `window` may be used. Breaks after the first letter
    /// and before the last one are never permitted.
    pub fn permits(self, pos: usize, window: &WordWindow) -> bool {
        let (start, end) = (window.start(), window.end());
        self.is_enabled() && pos > start + 1 && pos < end
            && (!self.contains(Self::NOT_LAST_TWO) || pos + 1 < end)
            && (!self.contains(Self::NOT_FIRST_TWO) || pos > start + 2)
    }

    /// Drops the breaks this mode does not permit.
    pub fn filter(self, breaks: &mut BreakList, window: &WordWindow) {
        breaks.retain(|&p| self.permits(p, window))
    }
}

impl Default for HyphenationMode {
    fn default() -> Self { Self::ON }
}

impl std::ops::BitOr for HyphenationMode {
    type Output = HyphenationMode;
    fn bitor(self, rhs: Self) -> Self { HyphenationMode(self.0 | rhs.0) }
}

/// See the [module documentation](self).
#[derive(Clone, Debug)]
pub struct HyphenationConfig {
    threshold: i32,
    exceptions: ExceptionDictionary,
    mode: HyphenationMode,
    suffixes: Ptr<SuffixTable>,
}

impl Default for HyphenationConfig {
    fn default() -> Self {
        HyphenationConfig {
            threshold: DEFAULT_THRESHOLD,
            exceptions: ExceptionDictionary::default(),
            mode: HyphenationMode::default(),
            suffixes: SuffixTable::standard(),
        }
    }
}

impl HyphenationConfig {
    pub fn new() -> Self { Self::default() }

    /// Replaces the suffix table, e.g. by [`SuffixTable::empty`].
    pub fn with_suffixes(mut self, suffixes: Ptr<SuffixTable>) -> Self {
        self.suffixes = suffixes;
        self
    }

    /// Replaces the exception dictionary by an empty one of the given capacity.
    pub fn with_exception_capacity(mut self, capacity: usize) -> Self {
        self.exceptions = ExceptionDictionary::with_capacity(capacity);
        self
    }

    pub fn threshold(&self) -> i32 { self.threshold }
    /// Sets the digram threshold; `None` restores [`DEFAULT_THRESHOLD`].
    pub fn set_threshold(&mut self, threshold: Option<i32>) {
        self.threshold = threshold.unwrap_or(DEFAULT_THRESHOLD);
    }

    pub fn mode(&self) -> HyphenationMode { self.mode }
    pub fn set_mode(&mut self, mode: HyphenationMode) { self.mode = mode }

    pub fn exceptions(&self) -> &ExceptionDictionary { &self.exceptions }
    pub fn exceptions_mut(&mut self) -> &mut ExceptionDictionary { &mut self.exceptions }

    /// Adds exception words (see [`ExceptionDictionary::load`]), reporting a full
    /// dictionary as a warning as well.
    pub fn load_exceptions(&mut self, text: &str) -> Result<usize, HyphError> {
        self.exceptions.load(text).inspect_err(|e| log::warn!(target: "hyphen", "{e}"))
    }

    pub fn suffixes(&self) -> &SuffixTable { &self.suffixes }
    pub fn set_suffixes(&mut self, suffixes: Ptr<SuffixTable>) { self.suffixes = suffixes }

    /// Shorthand for [`hyphen::analyze`].
    pub fn analyze(&self, buffer: &[Cell], cursor: usize) -> BreakList {
        hyphen::analyze(buffer, cursor, self)
    }
}
