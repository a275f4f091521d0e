/*! The text notation of suffix tables, and the packed form it compiles to.

 One entry per line: a suffix written forward with a `-` before every letter a hyphen
 may precede, optionally followed by the flags `novowel` and `stop`. `#` starts a
 comment. For example
 ```text
 -a-tion
 -wise novowel stop
 ```
 Entries are filed under their final letter; within a letter the file order is the
 order in which they are tried.

 The packed form is a byte stream plus an index of 26 offsets into it (`0`: no entries).
 An entry is a header byte followed by the letters before the final one (which the
 index implies). The header holds the entry length (header included) in its low nibble
 and the flags [`BREAK_MARK`] (break before the final letter), [`SKIP_VOWEL_CHECK`] and
 [`STOP`] above it. A letter carries [`BREAK_MARK`] if a break precedes it. Every list
 ends with a `0` byte.

 This module is also compiled into the build script, so it only depends on `std`.
 */

/// On a pattern letter: a break precedes it. On a header: a break precedes the final letter.
pub const BREAK_MARK: u8 = 0x80;
pub const SKIP_VOWEL_CHECK: u8 = 0x40;
pub const STOP: u8 = 0x20;
pub const LENGTH_MASK: u8 = 0x0f;
/// The longest suffix the packed form can hold.
pub const MAX_SUFFIX_LEN: usize = LENGTH_MASK as usize;

/// A parsed line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotationEntry {
    /// The final letter, `a..=z`.
    pub last: u8,
    pub header: u8,
    /// The letters before the final one, with [`BREAK_MARK`]s.
    pub pattern: Vec<u8>,
}

/// Parses a single line; `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<NotationEntry>, String> {
    let line = match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    };
    let mut parts = line.split_whitespace();
    let Some(suffix) = parts.next() else { return Ok(None) };
    let mut flags = 0u8;
    for flag in parts {
        flags |= match flag {
            "novowel" => SKIP_VOWEL_CHECK,
            "stop" => STOP,
            _ => return Err(format!("unknown flag `{flag}`")),
        };
    }
    let mut letters = Vec::with_capacity(suffix.len());
    let mut pending = false;
    for c in suffix.chars() {
        match c {
            '-' if pending => return Err(format!("doubled hyphen in `{suffix}`")),
            '-' => pending = true,
            c if c.is_ascii_alphabetic() => {
                let mark = if pending { BREAK_MARK } else { 0 };
                letters.push(c.to_ascii_lowercase() as u8 | mark);
                pending = false;
            }
            _ => return Err(format!("`{c}` is not a letter")),
        }
    }
    if pending {
        return Err(format!("`{suffix}` ends in a hyphen"))
    }
    if letters.len() > MAX_SUFFIX_LEN {
        return Err(format!("`{suffix}` is longer than {MAX_SUFFIX_LEN} letters"))
    }
    if flags & STOP == 0 && letters.iter().all(|l| l & BREAK_MARK == 0) {
        return Err(format!("`{suffix}` has no break and no `stop`, so it would never shrink a stem"))
    }
    let Some(last) = letters.pop() else { return Err("empty suffix".to_string()) };
    let header = (letters.len() as u8 + 1) | (last & BREAK_MARK) | flags;
    Ok(Some(NotationEntry { last: last & !BREAK_MARK, header, pattern: letters }))
}

/// Parses a whole table; errors carry the (1-based) line number.
pub fn parse(text: &str) -> Result<Vec<NotationEntry>, (usize, String)> {
    let mut ret = Vec::new();
    for (i, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(e)) => ret.push(e),
            Ok(None) => (),
            Err(e) => return Err((i + 1, e)),
        }
    }
    Ok(ret)
}

/// Packs entries into the offset index and byte stream described in the
/// [module documentation](self).
pub fn pack(entries: &[NotationEntry]) -> Result<([u16; 26], Vec<u8>), String> {
    let mut index = [0u16; 26];
    let mut bytes = vec![0u8];
    for (i, letter) in (b'a'..=b'z').enumerate() {
        let mut list = entries.iter().filter(|e| e.last == letter).peekable();
        if list.peek().is_none() { continue }
        index[i] = u16::try_from(bytes.len()).map_err(|_| "suffix table too large".to_string())?;
        for e in list {
            bytes.push(e.header);
            bytes.extend_from_slice(&e.pattern);
        }
        bytes.push(0);
    }
    Ok((index, bytes))
}
