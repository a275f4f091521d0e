/*! Digram scoring: the statistical fallback for words neither the exception dictionary
 nor the suffix table resolve.

 The stem is cut into segments between consecutive vowels, from its end backward. Every
 position in a segment gets a score from three "goodness" lookups (0..=15 each) around a
 break after it; the best position of each segment becomes a break if its score exceeds
 the threshold.
 */

use crate::cells::lower_code;
use crate::hyphen::BreakList;
use crate::hyphen::window::WordWindow;

/// A 26×26 table of 4-bit values, two per byte, indexed by the first letter of a pair.
pub type DigramTable = [[u8; 13]; 26];

/// The highest possible score.
pub const MAX_SCORE: i32 = 15 * 15 * 15;

/// The goodness of the letter pair `a`,`b` in `table`, `0` if either is not a letter.
/// The value for an even (zero-based) second letter is in the high nibble.
pub(crate) fn lookup(table: &DigramTable, a: u8, b: u8) -> u8 {
    match letter_index(a) {
        Some(row) => nibble(&table[row], b),
        None => 0,
    }
}

fn nibble(row: &[u8; 13], b: u8) -> u8 {
    let Some(j) = letter_index(b) else { return 0 };
    let byte = row[j / 2];
    if j % 2 == 0 { byte >> 4 } else { byte & 0o17 }
}

fn letter_index(code: u8) -> Option<usize> {
    let code = lower_code(code);
    code.is_ascii_lowercase().then(|| (code - b'a') as usize)
}

/// Where a candidate sits; selects the table for its left context.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Position {
    /// The first letter of the word.
    Initial,
    /// The second letter.
    Second,
    Interior,
}

impl Position {
    fn of(window: &WordWindow, w: usize) -> Self {
        match w - window.start() {
            0 => Position::Initial,
            1 => Position::Second,
            _ => Position::Interior,
        }
    }
}

/// The score of a break between the letters `w` and `w + 1` of `window`. Meaningful
/// for `start <= w` and `w + 2 <= end`; past the last letter it is `0`.
pub(crate) fn score(window: &WordWindow, w: usize) -> i32 {
    let l = |i: usize| window.letter(i);
    let left = match Position::of(window, w) {
        Position::Initial => nibble(&BXH, l(w)),
        Position::Second => lookup(&BXXH, l(w - 1), l(w)),
        Position::Interior => lookup(&XXH, l(w - 1), l(w)),
    };
    left as i32 * lookup(&XHX, l(w), l(w + 1)) as i32 * lookup(&HXX, l(w + 1), l(w + 2)) as i32
}

/// Scores the stem of `window` segment by segment, appending a break for every segment
/// whose best score exceeds `threshold`. Moves the stem end back to the first vowel.
pub(crate) fn hyphenate(window: &mut WordWindow, threshold: i32, breaks: &mut BreakList) {
    let end = window.end();
    while let Some(upper) = window.vowel_before(window.stem_end() + 1) {
        window.set_stem_end(upper);
        let Some(lower) = window.vowel_before(upper) else { return };
        let mut best: Option<(usize, i32)> = None;
        for w in (lower..upper).take_while(|&w| w + 1 < end) {
            let val = score(window, w);
            if val > best.map_or(0, |(_, m)| m) { best = Some((w + 1, val)) }
        }
        log::trace!(target: "hyphen", "{window}: segment {lower}..{upper}, best {best:?}");
        if let Some((pos, val)) = best {
            if val > threshold { breaks.push(pos) }
        }
        window.set_stem_end(lower);
    }
}

/// Word-initial left context; a single row, consulted for the first letter.
pub(crate) static BXH: [u8;13] = [0o060,0o000,0o040,0o000,0o040,0o000,0o000,0o040,0o000,0o000,0o040,0o000,0o040];

/// Left context of a break after the second letter.
pub(crate) static BXXH: DigramTable = [
    [0o005,0o150,0o153,0o062,0o062,0o246,0o152,0o127,0o146,0o203,0o310,0o017,0o206], // a
    [0o100,0o000,0o120,0o000,0o140,0o000,0o000,0o100,0o000,0o000,0o120,0o000,0o060], // b
    [0o100,0o000,0o040,0o000,0o060,0o000,0o000,0o060,0o000,0o000,0o220,0o000,0o040], // c
    [0o100,0o000,0o120,0o000,0o200,0o000,0o000,0o100,0o000,0o000,0o140,0o000,0o060], // d
    [0o043,0o142,0o046,0o140,0o062,0o147,0o210,0o131,0o046,0o106,0o246,0o017,0o111], // e
    [0o060,0o000,0o020,0o000,0o060,0o000,0o000,0o040,0o000,0o000,0o100,0o000,0o000], // f
    [0o060,0o000,0o040,0o000,0o040,0o000,0o000,0o040,0o000,0o000,0o100,0o000,0o040], // g
    [0o100,0o000,0o100,0o000,0o100,0o000,0o000,0o040,0o000,0o000,0o100,0o000,0o140], // h
    [0o066,0o045,0o145,0o140,0o000,0o070,0o377,0o030,0o130,0o103,0o003,0o017,0o006], // i
    [0o040,0o000,0o040,0o000,0o020,0o000,0o000,0o040,0o000,0o000,0o100,0o000,0o000], // j
    [0o200,0o000,0o020,0o000,0o140,0o000,0o000,0o120,0o000,0o000,0o120,0o000,0o040], // k
    [0o120,0o000,0o040,0o000,0o060,0o000,0o000,0o060,0o000,0o000,0o160,0o000,0o040], // l
    [0o120,0o000,0o040,0o000,0o120,0o000,0o000,0o040,0o000,0o000,0o160,0o000,0o040], // m
    [0o120,0o000,0o020,0o000,0o140,0o000,0o000,0o120,0o000,0o000,0o140,0o000,0o040], // n
    [0o051,0o126,0o150,0o140,0o060,0o210,0o146,0o006,0o006,0o165,0o003,0o017,0o244], // o
    [0o120,0o000,0o040,0o000,0o160,0o000,0o000,0o140,0o000,0o000,0o060,0o000,0o140], // p
    [0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000], // q
    [0o140,0o000,0o140,0o000,0o060,0o000,0o000,0o100,0o000,0o000,0o140,0o000,0o020], // r
    [0o120,0o000,0o020,0o000,0o060,0o000,0o000,0o060,0o000,0o000,0o060,0o000,0o040], // s
    [0o140,0o000,0o020,0o000,0o100,0o000,0o000,0o140,0o000,0o000,0o140,0o000,0o020], // t
    [0o070,0o125,0o051,0o162,0o120,0o105,0o126,0o104,0o006,0o044,0o000,0o017,0o052], // u
    [0o140,0o000,0o020,0o000,0o140,0o000,0o000,0o060,0o000,0o000,0o060,0o000,0o040], // v
    [0o020,0o000,0o000,0o000,0o020,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o060], // w
    [0o140,0o000,0o160,0o000,0o200,0o000,0o000,0o140,0o000,0o000,0o000,0o000,0o240], // x
    [0o065,0o042,0o060,0o200,0o000,0o210,0o222,0o146,0o006,0o204,0o220,0o012,0o003], // y
    [0o240,0o000,0o020,0o000,0o120,0o000,0o000,0o200,0o000,0o000,0o200,0o000,0o240], // z
];

/// Left context of a break further in.
pub(crate) static XXH: DigramTable = [
    [0o045,0o150,0o154,0o162,0o042,0o246,0o210,0o147,0o152,0o103,0o230,0o017,0o206], // a
    [0o100,0o000,0o040,0o000,0o140,0o000,0o000,0o100,0o000,0o021,0o120,0o017,0o060], // b
    [0o100,0o000,0o040,0o002,0o140,0o320,0o000,0o060,0o000,0o001,0o220,0o017,0o040], // c
    [0o100,0o001,0o120,0o001,0o241,0o000,0o000,0o100,0o000,0o020,0o140,0o017,0o060], // d
    [0o023,0o162,0o046,0o142,0o022,0o207,0o210,0o131,0o052,0o106,0o250,0o017,0o110], // e
    [0o060,0o000,0o042,0o000,0o160,0o000,0o000,0o040,0o000,0o212,0o100,0o017,0o000], // f
    [0o140,0o000,0o040,0o002,0o140,0o000,0o000,0o120,0o000,0o040,0o120,0o017,0o040], // g
    [0o100,0o000,0o100,0o000,0o140,0o001,0o021,0o140,0o000,0o046,0o100,0o017,0o140], // h
    [0o066,0o045,0o025,0o201,0o020,0o130,0o146,0o030,0o130,0o103,0o025,0o017,0o006], // i
    [0o100,0o000,0o040,0o000,0o020,0o000,0o000,0o040,0o000,0o000,0o200,0o017,0o000], // j
    [0o200,0o000,0o020,0o001,0o140,0o000,0o000,0o140,0o000,0o000,0o120,0o017,0o040], // k
    [0o120,0o026,0o042,0o020,0o140,0o161,0o042,0o143,0o000,0o022,0o162,0o017,0o040], // l
    [0o121,0o042,0o060,0o020,0o140,0o200,0o000,0o123,0o000,0o021,0o220,0o017,0o041], // m
    [0o121,0o042,0o060,0o120,0o140,0o200,0o000,0o123,0o000,0o021,0o160,0o017,0o041], // n
    [0o051,0o126,0o150,0o141,0o060,0o210,0o146,0o066,0o026,0o165,0o026,0o017,0o247], // o
    [0o120,0o000,0o040,0o003,0o160,0o000,0o000,0o140,0o000,0o021,0o100,0o017,0o140], // p
    [0o000,0o000,0o000,0o000,0o200,0o000,0o000,0o000,0o000,0o000,0o000,0o017,0o000], // q
    [0o141,0o023,0o122,0o040,0o160,0o143,0o042,0o142,0o000,0o047,0o143,0o017,0o020], // r
    [0o120,0o000,0o040,0o006,0o140,0o060,0o000,0o141,0o000,0o026,0o100,0o017,0o040], // s
    [0o140,0o000,0o020,0o007,0o100,0o000,0o000,0o140,0o000,0o001,0o140,0o017,0o020], // t
    [0o110,0o125,0o051,0o162,0o120,0o125,0o127,0o104,0o006,0o104,0o000,0o017,0o052], // u
    [0o140,0o000,0o040,0o000,0o160,0o000,0o000,0o140,0o000,0o000,0o060,0o017,0o000], // v
    [0o040,0o005,0o020,0o000,0o040,0o313,0o231,0o030,0o000,0o140,0o000,0o017,0o056], // w
    [0o140,0o000,0o160,0o000,0o200,0o000,0o000,0o140,0o000,0o000,0o000,0o017,0o240], // x
    [0o065,0o042,0o060,0o040,0o000,0o206,0o231,0o146,0o006,0o224,0o220,0o017,0o004], // y
    [0o240,0o000,0o020,0o000,0o140,0o000,0o000,0o220,0o000,0o000,0o200,0o017,0o141], // z
];

/// The pair straddling the break.
pub(crate) static XHX: DigramTable = [
    [0o032,0o146,0o042,0o107,0o076,0o102,0o042,0o146,0o202,0o050,0o006,0o000,0o051], // a
    [0o036,0o377,0o057,0o013,0o057,0o366,0o377,0o057,0o001,0o377,0o057,0o000,0o040], // b
    [0o037,0o377,0o020,0o000,0o100,0o022,0o377,0o057,0o362,0o116,0o100,0o000,0o017], // c
    [0o057,0o377,0o057,0o031,0o137,0o363,0o377,0o037,0o362,0o270,0o077,0o000,0o117], // d
    [0o074,0o142,0o012,0o236,0o076,0o125,0o063,0o165,0o341,0o046,0o047,0o000,0o024], // e
    [0o020,0o017,0o075,0o377,0o040,0o001,0o377,0o017,0o001,0o204,0o020,0o000,0o040], // f
    [0o057,0o017,0o057,0o340,0o140,0o362,0o314,0o117,0o003,0o302,0o100,0o000,0o057], // g
    [0o057,0o357,0o077,0o017,0o100,0o366,0o314,0o057,0o342,0o346,0o037,0o000,0o060], // h
    [0o252,0o145,0o072,0o157,0o377,0o165,0o063,0o066,0o164,0o050,0o363,0o000,0o362], // i
    [0o000,0o000,0o020,0o000,0o020,0o000,0o000,0o017,0o000,0o000,0o020,0o000,0o000], // j
    [0o117,0o017,0o237,0o377,0o200,0o354,0o125,0o110,0o004,0o257,0o000,0o000,0o300], // k
    [0o057,0o367,0o054,0o357,0o157,0o216,0o314,0o114,0o217,0o353,0o053,0o000,0o057], // l
    [0o077,0o213,0o077,0o077,0o177,0o317,0o377,0o114,0o377,0o352,0o077,0o000,0o076], // m
    [0o077,0o213,0o077,0o077,0o157,0o177,0o377,0o054,0o377,0o352,0o117,0o000,0o075], // n
    [0o125,0o230,0o065,0o216,0o057,0o066,0o063,0o047,0o345,0o126,0o011,0o000,0o033], // o
    [0o057,0o377,0o051,0o360,0o120,0o361,0o273,0o056,0o001,0o256,0o057,0o000,0o060], // p
    [0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000], // q
    [0o076,0o310,0o056,0o310,0o137,0o174,0o273,0o055,0o335,0o266,0o033,0o000,0o155], // r
    [0o077,0o157,0o057,0o360,0o057,0o063,0o042,0o024,0o077,0o206,0o020,0o000,0o040], // s
    [0o057,0o037,0o077,0o360,0o100,0o365,0o377,0o037,0o362,0o176,0o050,0o000,0o026], // t
    [0o167,0o146,0o042,0o112,0o077,0o110,0o062,0o254,0o366,0o052,0o377,0o000,0o163], // u
    [0o060,0o000,0o040,0o000,0o120,0o000,0o377,0o060,0o012,0o000,0o037,0o000,0o257], // v
    [0o037,0o232,0o157,0o361,0o040,0o003,0o125,0o010,0o001,0o256,0o000,0o000,0o340], // w
    [0o377,0o377,0o377,0o377,0o377,0o377,0o377,0o377,0o377,0o377,0o377,0o017,0o277], // x
    [0o253,0o315,0o257,0o216,0o377,0o206,0o146,0o306,0o371,0o126,0o232,0o000,0o004], // y
    [0o057,0o012,0o100,0o360,0o160,0o360,0o000,0o040,0o000,0o017,0o157,0o000,0o176], // z
];

/// The two letters after the break.
pub(crate) static HXX: DigramTable = [
    [0o006,0o042,0o041,0o123,0o021,0o024,0o063,0o042,0o002,0o043,0o021,0o001,0o022], // a
    [0o140,0o000,0o200,0o003,0o260,0o006,0o000,0o160,0o007,0o000,0o140,0o000,0o320], // b
    [0o220,0o000,0o160,0o005,0o240,0o010,0o000,0o100,0o006,0o000,0o200,0o000,0o320], // c
    [0o240,0o000,0o120,0o003,0o140,0o000,0o000,0o240,0o010,0o000,0o220,0o000,0o160], // d
    [0o042,0o023,0o041,0o040,0o040,0o022,0o043,0o041,0o030,0o064,0o021,0o000,0o041], // e
    [0o100,0o000,0o140,0o000,0o220,0o006,0o000,0o140,0o003,0o000,0o200,0o000,0o000], // f
    [0o200,0o000,0o120,0o002,0o220,0o010,0o000,0o160,0o006,0o000,0o140,0o000,0o320], // g
    [0o020,0o000,0o020,0o000,0o020,0o000,0o000,0o020,0o000,0o000,0o020,0o000,0o000], // h
    [0o043,0o163,0o065,0o044,0o022,0o043,0o104,0o042,0o061,0o146,0o061,0o000,0o007], // i
    [0o100,0o000,0o140,0o000,0o040,0o000,0o000,0o100,0o000,0o000,0o120,0o000,0o000], // j
    [0o140,0o000,0o040,0o011,0o060,0o004,0o001,0o120,0o003,0o000,0o140,0o000,0o040], // k
    [0o200,0o000,0o100,0o000,0o140,0o000,0o000,0o140,0o000,0o000,0o140,0o000,0o240], // l
    [0o200,0o000,0o140,0o000,0o160,0o000,0o000,0o220,0o000,0o000,0o140,0o000,0o240], // m
    [0o200,0o000,0o140,0o000,0o160,0o000,0o000,0o220,0o000,0o000,0o060,0o000,0o240], // n
    [0o021,0o043,0o041,0o121,0o040,0o023,0o042,0o003,0o142,0o042,0o061,0o001,0o022], // o
    [0o120,0o000,0o140,0o010,0o140,0o010,0o000,0o140,0o002,0o000,0o120,0o000,0o120], // p
    [0o000,0o000,0o000,0o000,0o360,0o000,0o000,0o000,0o000,0o000,0o160,0o000,0o000], // q
    [0o100,0o000,0o040,0o005,0o120,0o000,0o000,0o100,0o000,0o000,0o060,0o000,0o140], // r
    [0o140,0o040,0o100,0o001,0o240,0o041,0o000,0o242,0o000,0o002,0o140,0o000,0o100], // s
    [0o240,0o000,0o120,0o002,0o200,0o000,0o000,0o320,0o007,0o000,0o240,0o000,0o340], // t
    [0o101,0o021,0o041,0o020,0o040,0o005,0o042,0o121,0o002,0o021,0o201,0o000,0o020], // u
    [0o160,0o000,0o100,0o000,0o140,0o000,0o000,0o160,0o006,0o000,0o220,0o000,0o140], // v
    [0o140,0o000,0o020,0o001,0o020,0o000,0o000,0o100,0o001,0o000,0o300,0o000,0o000], // w
    [0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000,0o000], // x
    [0o106,0o041,0o040,0o147,0o040,0o000,0o063,0o041,0o001,0o102,0o160,0o002,0o002], // y
    [0o300,0o000,0o040,0o017,0o140,0o017,0o000,0o240,0o000,0o000,0o140,0o000,0o120], // z
];
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::cells;

    fn digrams(word: &str, threshold: i32) -> BreakList {
        let buf = cells(word);
        let mut window = WordWindow::locate(&buf, 0).unwrap();
        let mut breaks = Vec::new();
        hyphenate(&mut window, threshold, &mut breaks);
        breaks
    }

    #[test]
    fn nibbles() {
        assert_eq!(nibble(&BXH, b'a'), 3);
        assert_eq!(nibble(&BXH, b'B'), 0);
        assert_eq!(lookup(&BXXH, b'a', b'a'), 0);
        assert_eq!(lookup(&BXXH, b'A', b'b'), 5);
        assert_eq!(lookup(&XHX, b'z', b'z'), 14);
    }

    #[test]
    fn scores() {
        let buf = cells("banana");
        let window = WordWindow::locate(&buf, 0).unwrap();
        assert_eq!(Position::of(&window, 0), Position::Initial);
        assert_eq!(Position::of(&window, 1), Position::Second);
        assert_eq!(Position::of(&window, 3), Position::Interior);
        assert_eq!(score(&window, 1), 64);
        assert_eq!(score(&window, 2), 72);
        assert_eq!(score(&window, 3), 80);
        for w in 0..4 {
            assert!((0..=MAX_SCORE).contains(&score(&window, w)));
        }
    }

    #[test]
    fn past_the_word() {
        let buf = cells("banana");
        let window = WordWindow::locate(&buf, 0).unwrap();
        assert_eq!(score(&window, 4), 0);
        assert_eq!(score(&window, 5), 0);
        assert_eq!(lookup(&XHX, 0, b'a'), 0);
        assert_eq!(lookup(&XHX, b'a', b' '), 0);
        assert_eq!(nibble(&BXH, b'{'), 0);
    }

    #[test]
    fn segments() {
        // ba|na|na: one candidate per segment, from the end backward
        assert_eq!(digrams("banana", 70), vec![4, 3]);
        assert_eq!(digrams("banana", 75), vec![4]);
        assert_eq!(digrams("banana", 80), vec![]);
        assert_eq!(digrams("computer", 160), vec![5, 3]);
        assert_eq!(digrams("quizzical", 160), vec![6, 4]);
    }

    #[test]
    fn too_few_vowels() {
        assert_eq!(digrams("strength", 0), vec![]);
        assert_eq!(digrams("rhythm", 0), vec![]);
        assert_eq!(digrams("aaaaa", 0), vec![]);
    }

    #[test]
    fn word_initial_vowel() {
        assert_eq!(digrams("abacus", 160), vec![3, 1]);
    }
}
