/*! The formatter requests that configure hyphenation: `.ht`, `.hw`, `.hy` and `.nh`. */

use phf::phf_map;
use crate::config::{HyphenationConfig, HyphenationMode};
use crate::utils::errors::HyphError;

/// A hyphenation request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// `.ht [N]`: set the digram threshold, or reset it.
    Threshold,
    /// `.hw word...`: add exception words.
    ExceptionWords,
    /// `.hy [N]`: set the hyphenation mode, `1` if absent.
    Hyphenate,
    /// `.nh`: no hyphenation.
    NoHyphenate,
}

static REQUESTS: phf::Map<&'static str, Request> = phf_map! {
    "ht" => Request::Threshold,
    "hw" => Request::ExceptionWords,
    "hy" => Request::Hyphenate,
    "nh" => Request::NoHyphenate,
};

impl Request {
    pub fn name(self) -> &'static str {
        match self {
            Request::Threshold => "ht",
            Request::ExceptionWords => "hw",
            Request::Hyphenate => "hy",
            Request::NoHyphenate => "nh",
        }
    }

    pub fn from_name(name: &str) -> Option<Request> {
        REQUESTS.get(name).copied()
    }

    /// Splits a control line (`.` or `'`, optional blanks, the name, the arguments)
    /// into a request and its argument text. `None` if it is not one of ours.
    pub fn parse(line: &str) -> Option<(Request, &str)> {
        let rest = line.strip_prefix(['.', '\''])?.trim_start();
        let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        Some((Self::from_name(name)?, args.trim()))
    }

    /// Applies the request with the given argument text to `config`.
    pub fn apply(self, args: &str, config: &mut HyphenationConfig) -> Result<(), HyphError> {
        let first = args.split_whitespace().next();
        match self {
            Request::Threshold => {
                config.set_threshold(None);
                if let Some(arg) = first {
                    config.set_threshold(Some(self.number(arg)?));
                }
            }
            Request::ExceptionWords => {
                config.load_exceptions(args)?;
            }
            Request::Hyphenate => {
                config.set_mode(HyphenationMode::ON);
                if let Some(arg) = first {
                    config.set_mode(HyphenationMode::new(self.number(arg)?));
                }
            }
            Request::NoHyphenate => config.set_mode(HyphenationMode::OFF),
        }
        log::debug!(target: "hyphen", ".{} {args}", self.name());
        Ok(())
    }

    fn number(self, arg: &str) -> Result<i32, HyphError> {
        arg.parse().map_err(|_| HyphError::InvalidNumber { request: self.name(), argument: arg.to_string() })
    }
}

impl HyphenationConfig {
    /// Interprets `line` if it is a hyphenation request. Returns `Ok(false)` for any other
    /// line, which is left to the caller.
    pub fn apply_request(&mut self, line: &str) -> Result<bool, HyphError> {
        let Some((request, args)) = Request::parse(line) else { return Ok(false) };
        request.apply(args, self)?;
        Ok(true)
    }
}
