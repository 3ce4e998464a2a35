//! Inline reference-macro normalization.
//!
//! Catalog rules text embeds cross-reference macros of the form
//! `{@tag value}`, `{@tag value|display}`, and `{@tag value|display|extra}`.
//! The normalizer strips them down to their display text in three ordered
//! regex passes, one per arity. Anything not matching the strict
//! bracket/pipe grammar is left untouched.

use regex::Regex;

/// Layered macro stripper. Regexes are compiled once per instance.
pub struct MacroNormalizer {
    no_pipe: Regex,
    one_pipe: Regex,
    two_pipe: Regex,
}

impl MacroNormalizer {
    /// Create a normalizer with the three pass patterns compiled.
    pub fn new() -> Self {
        Self {
            // {@tag value} -> value
            no_pipe: Regex::new(r"\{@\w+ ([^|{}]+)\}").unwrap(),
            // {@tag value|display} -> display
            one_pipe: Regex::new(r"\{@\w+ [^|{}]+\|([^|{}]+)\}").unwrap(),
            // {@tag value|display|extra} -> extra
            two_pipe: Regex::new(r"\{@\w+ [^|{}]+\|[^|{}]*\|([^|{}]+)\}").unwrap(),
        }
    }

    /// Strip all well-formed macros, each pass feeding the next.
    pub fn process(&self, text: &str) -> String {
        let result = self.no_pipe.replace_all(text, "$1");
        let result = self.one_pipe.replace_all(&result, "$1");
        let result = self.two_pipe.replace_all(&result, "$1");
        result.into_owned()
    }
}

impl Default for MacroNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
