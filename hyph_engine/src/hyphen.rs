/*! Finding break points in a single word.

 [`analyze`] locates the word in a cell buffer (see [`WordWindow`]) and runs three stages,
 the first one that resolves the word winning:
 1. the [exception dictionary](exceptions::ExceptionDictionary),
 2. [suffix stripping](suffixes::SuffixTable::strip),
 3. [digram scoring](digrams) of whatever stem the suffix stage left.

 The result is a [`BreakList`] of cell indices, sorted ascending; a break at `i` means a
 hyphen may be set before the cell at `i`. Whether the caller actually uses any of them,
 and which edge margins it keeps, is up to the caller (see
 [`HyphenationMode`](crate::config::HyphenationMode)).
 */

pub mod window;
pub mod exceptions;
pub mod notation;
pub mod suffixes;
pub mod digrams;

use log::debug;
use crate::cells::{cells, Cell};
use crate::config::HyphenationConfig;
use crate::hyphen::window::WordWindow;

/// Break positions, as indices into the analyzed cell buffer.
pub type BreakList = Vec<usize>;

/// Computes the break points of the word at `cursor` in `buffer`. Returns an empty list if
/// the buffer does not hold exactly one word of at least
/// [`MIN_WORD_LEN`](window::MIN_WORD_LEN) letters from `cursor` on.
pub fn analyze(buffer: &[Cell], cursor: usize, config: &HyphenationConfig) -> BreakList {
    let Some(mut window) = WordWindow::locate(buffer, cursor) else { return Vec::new() };
    let mut breaks = BreakList::new();
    if config.exceptions().lookup(&window, &mut breaks) {
        debug!(target: "hyphen", "{window}: exception word");
    } else if config.suffixes().strip(&mut window, config.exceptions(), &mut breaks) {
        debug!(target: "hyphen", "{window}: suffixes");
    } else {
        digrams::hyphenate(&mut window, config.threshold(), &mut breaks);
        debug!(target: "hyphen", "{window}: digrams");
    }
    breaks.sort();
    breaks
}

/// The breaks of `word` the configured [mode](HyphenationConfig::mode) permits, as
/// character offsets into `word`.
pub fn word_breaks(word: &str, config: &HyphenationConfig) -> BreakList {
    let buf = cells(word);
    let Some(window) = WordWindow::locate(&buf, 0) else { return Vec::new() };
    let mode = config.mode();
    analyze(&buf, 0, config).into_iter().filter(|&p| mode.permits(p, &window)).collect()
}

/// `word` with `marker` inserted at every permitted break.
pub fn mark_breaks(word: &str, config: &HyphenationConfig, marker: &str) -> String {
    let breaks = word_breaks(word, config);
    let mut ret = String::with_capacity(word.len() + breaks.len() * marker.len());
    for (i, c) in word.chars().enumerate() {
        if breaks.binary_search(&i).is_ok() { ret.push_str(marker) }
        ret.push(c);
    }
    ret
}
