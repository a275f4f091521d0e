#[doc(hidden)]
#[cfg(any(test, doctest))]
#[allow(dead_code)]
pub mod test_utils {
    use crate::prelude::*;

    #[allow(unused_must_use)]
    pub fn trace() {
        env_logger::builder().filter_level(log::LevelFilter::Trace).try_init();
    }
    #[allow(unused_must_use)]
    pub fn debug() {
        env_logger::builder().filter_level(log::LevelFilter::Debug).try_init();
    }
    #[allow(unused_must_use)]
    pub fn info() {
        env_logger::builder().filter_level(log::LevelFilter::Info).try_init();
    }
    #[allow(unused_must_use)]
    pub fn warn() {
        env_logger::builder().filter_level(log::LevelFilter::Warn).try_init();
    }
    #[allow(unused_must_use)]
    pub fn error() {
        env_logger::builder().filter_level(log::LevelFilter::Error).try_init();
    }

    /// A configuration without suffixes, so words only go through the dictionary and
    /// the digram tables.
    pub fn digrams_only() -> HyphenationConfig {
        HyphenationConfig::new().with_suffixes(SuffixTable::empty().into())
    }

    /// Unfiltered breaks of a bare word.
    pub fn breaks(word: &str, config: &HyphenationConfig) -> BreakList {
        analyze(&cells(word), 0, config)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::*;
    use crate::prelude::*;
    use log::*;

    const WORDS: [&str; 16] = [
        "banana", "computer", "processing", "hopefully", "mathematics", "information",
        "nationalism", "hyphenation", "establishment", "carelessness", "backwards",
        "abacus", "strengths", "quizzical", "concatenate", "presently",
    ];

    #[test]
    fn short_words() {
        debug();
        let mut config = HyphenationConfig::new();
        config.load_exceptions("a-b-c-d").unwrap();
        for w in ["", "a", "abcd", "(ABCD).", "ab"] {
            assert!(analyze(&cells(w), 0, &config).is_empty(), "{w}");
        }
    }

    #[test]
    fn trailing_tokens() {
        debug();
        let mut config = HyphenationConfig::new();
        config.load_exceptions("hy-phen-ation").unwrap();
        for w in ["hyphenation more", "hyphenation, more", "(hyphenation) x", "2 hyphenation x"] {
            assert!(analyze(&cells(w), 0, &config).is_empty(), "{w}");
        }
        // digits count as punctuation
        assert_eq!(analyze(&cells("hyphenation 2"), 0, &config), vec![2, 6]);
        let mut buf = cells("hyphenation");
        buf.insert(4, Cell::Marker(0o100020));
        assert!(analyze(&buf, 0, &config).is_empty());
    }

    #[test]
    fn sorted_and_in_range() {
        debug();
        let config = HyphenationConfig::new();
        for threshold in [0, 50, 160] {
            let mut config = config.clone();
            config.set_threshold(Some(threshold));
            for w in WORDS {
                let text = format!(" \"({w}),");
                let buf = cells(&text);
                let window = WordWindow::locate(&buf, 0).unwrap();
                let breaks = analyze(&buf, 0, &config);
                info!(target: "hyphen", "{w} @ {threshold}: {breaks:?}");
                assert!(breaks.windows(2).all(|p| p[0] <= p[1]), "{w}: {breaks:?}");
                assert!(breaks.iter().all(|&p| window.contains_break(p)), "{w}: {breaks:?}");
            }
        }
    }

    #[test]
    fn standard_tables() {
        let config = HyphenationConfig::new();
        assert_eq!(breaks("processing", &config), vec![3, 7]);
        assert_eq!(breaks("hopefully", &config), vec![4, 7]);
        assert_eq!(breaks("carelessness", &config), vec![4, 8]);
        assert_eq!(breaks("nationalism", &config), vec![2, 6, 8]);
        assert_eq!(breaks("computer", &config), vec![3, 5]);
        assert_eq!(breaks("strengths", &config), vec![]);
        assert_eq!(mark_breaks("Information", &config, "-"), "In-form-a-tion");
        assert_eq!(mark_breaks("carelessness", &config, "\\%"), "care\\%less\\%ness");
    }

    #[test]
    fn exceptions_win() {
        let mut config = HyphenationConfig::new();
        assert_eq!(breaks("computer", &config), vec![3, 5]);
        config.load_exceptions("comp-uter").unwrap();
        assert_eq!(breaks("computer", &config), vec![4]);
        assert_eq!(breaks("Computers", &config), vec![4]);
        config.load_exceptions("pro-cessing").unwrap();
        assert_eq!(breaks("processing", &config), vec![3]);
    }

    #[test]
    fn exceptions_after_suffixes() {
        let mut config = HyphenationConfig::new();
        assert_eq!(breaks("presently", &config), vec![7]);
        config.load_exceptions("pre-sent").unwrap();
        assert_eq!(breaks("presently", &config), vec![3, 7]);
        assert_eq!(breaks("presents", &config), vec![3]);
    }

    #[test]
    fn plurals_before_suffixes() {
        let mut config = HyphenationConfig::new()
            .with_suffixes(SuffixTable::from_notation("-ly").unwrap().into());
        config.load_exceptions("pro-gram").unwrap();
        assert_eq!(breaks("programly", &config), vec![3, 7]);
        // the plural `s` is taken at the end of the stripped stem
        assert_eq!(breaks("programsly", &config), vec![3, 8]);
    }

    #[test]
    fn threshold_monotonic() {
        let mut config = digrams_only();
        for w in WORDS {
            let mut previous: Option<BreakList> = None;
            for t in (0..=400).step_by(8) {
                config.set_threshold(Some(t));
                let current = breaks(w, &config);
                if let Some(prev) = &previous {
                    assert!(current.iter().all(|p| prev.contains(p)), "{w} @ {t}: {current:?} vs {prev:?}");
                }
                previous = Some(current);
            }
        }
    }

    #[test]
    fn idempotent() {
        let mut config = HyphenationConfig::new();
        config.load_exceptions("ta-ble").unwrap();
        for w in WORDS {
            let buf = cells(w);
            assert_eq!(analyze(&buf, 0, &config), analyze(&buf, 0, &config), "{w}");
        }
    }

    #[test]
    fn duplicate_exceptions() {
        let mut once = HyphenationConfig::new();
        once.load_exceptions("hy-phen-ation").unwrap();
        let mut twice = once.clone();
        twice.load_exceptions("hy-phen-ation").unwrap();
        assert_eq!(twice.exceptions().len(), 2);
        assert_eq!(breaks("hyphenation", &once), breaks("hyphenation", &twice));
    }

    #[test]
    fn hyphenation() {
        let mut config = HyphenationConfig::new();
        config.load_exceptions("hy-phen-ation").unwrap();
        // h y | p h e n | a t i o n
        assert_eq!(breaks("hyphenation", &config), vec![2, 6]);
        assert_eq!(mark_breaks("hyphenation", &config, "-"), "hy-phen-ation");
    }

    #[test]
    fn running() {
        let config = HyphenationConfig::new()
            .with_suffixes(SuffixTable::from_notation("-ing novowel").unwrap().into());
        assert_eq!(breaks("running", &config), vec![4]);
        assert_eq!(mark_breaks("running", &config, "-"), "runn-ing");
    }

    #[test]
    fn banana() {
        let mut config = digrams_only();
        assert_eq!(breaks("banana", &config), vec![]);
        config.set_threshold(Some(0));
        let b = breaks("banana", &config);
        assert_eq!(b, vec![3, 4]);
        assert!(b.iter().all(|&p| p > 1 && p < 5));
    }

    #[test]
    fn edge_margins() {
        let config = HyphenationConfig::new();
        assert_eq!(breaks("abacus", &config), vec![1, 3]);
        assert_eq!(word_breaks("abacus", &config), vec![3]);
        let mut off = config.clone();
        off.apply_request(".nh").unwrap();
        assert!(word_breaks("abacus", &off).is_empty());
        assert_eq!(breaks("abacus", &off), vec![1, 3]);
    }

    #[test]
    fn requests() {
        let mut config = HyphenationConfig::new();
        for line in [".hw pro-cessing", ".ht 1000", ".hy 12", ".sp"] {
            config.apply_request(line).unwrap();
        }
        assert_eq!(breaks("processing", &config), vec![3]);
        assert_eq!(breaks("computer", &digrams_only()), vec![3, 5]);
        assert_eq!(config.mode().bits(), 12);
        assert_eq!(config.threshold(), 1000);
    }

    #[test]
    fn packed_cells() {
        // "Table" in italics (formatting bits set), followed by a motion and the terminator
        let mut raw: Vec<u32> = "Table".bytes().map(|b| b as u32 | (2 << 7)).collect();
        raw.push(0o100000 | 12);
        raw.push(0);
        let buf: Vec<Cell> = raw.into_iter().map(Cell::from_packed).collect();
        let config = HyphenationConfig::new();
        assert_eq!(analyze(&buf, 0, &config), breaks("table", &config));
    }

    #[test]
    fn shared_between_threads() {
        let mut config = HyphenationConfig::new();
        config.load_exceptions("hy-phen-ation").unwrap();
        let config = std::sync::Arc::new(config);
        let handles: Vec<_> = WORDS.into_iter().map(|w| {
            let config = config.clone();
            std::thread::spawn(move || breaks(w, &config))
        }).collect();
        for (w, h) in WORDS.iter().zip(handles) {
            assert_eq!(h.join().unwrap(), breaks(w, &config));
        }
    }
}
