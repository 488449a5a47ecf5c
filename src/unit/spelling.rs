//! Lookup of user-typed spellings.
//!
//! Spellings and inputs are normalised the same way before comparison, so
//! `"deg/s^2"`, `"°/s²"` and `"° / s2"` all share one key.

use std::collections::HashMap;

/// Canonical comparison key: whitespace removed, exponent and product symbols
/// folded to ASCII, micro and degree signs spelled out.
pub(crate) fn normalize(input: &str) -> String {
    let mut key = String::with_capacity(input.len());
    for c in input.chars().filter(|c| !c.is_whitespace()) {
        match c {
            '·' | '⋅' | '×' => key.push('*'),
            '²' => key.push('2'),
            '³' => key.push('3'),
            '^' => {}
            'µ' | 'μ' => key.push('u'),
            '°' | 'º' => key.push_str("deg"),
            c => key.push(c),
        }
    }
    key
}

/// A spelling table for one closed set of named values.
#[derive(Debug)]
pub(crate) struct SpellingTable<T> {
    family: &'static str,
    exact: HashMap<String, T>,
    folded: HashMap<String, Vec<T>>,
}

impl<T: Copy + PartialEq> SpellingTable<T> {
    pub(crate) fn new(
        family: &'static str,
        entries: impl IntoIterator<Item = (&'static str, T)>,
    ) -> Self {
        let mut exact = HashMap::new();
        let mut folded: HashMap<String, Vec<T>> = HashMap::new();
        for (spelling, value) in entries {
            let key = normalize(spelling);
            let candidates = folded.entry(key.to_lowercase()).or_default();
            if !candidates.contains(&value) {
                candidates.push(value);
            }
            exact.entry(key).or_insert(value);
        }
        Self {
            family,
            exact,
            folded,
        }
    }

    /// Exact (case-preserving) match first, then a case-insensitive match that
    /// must name a single value.
    pub(crate) fn lookup(&self, input: &str) -> Option<T> {
        let key = normalize(input);
        if let Some(value) = self.exact.get(&key) {
            return Some(*value);
        }
        match self.folded.get(&key.to_lowercase()).map(Vec::as_slice) {
            Some([value]) => Some(*value),
            Some(candidates) => {
                tracing::debug!(
                    family = self.family,
                    input,
                    candidates = candidates.len(),
                    "ambiguous spelling"
                );
                None
            }
            None => {
                tracing::debug!(family = self.family, input, "unrecognised spelling");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Power {
        Milliwatt,
        Megawatt,
        Watt,
    }

    fn table() -> SpellingTable<Power> {
        SpellingTable::new(
            "Power",
            [
                ("mW", Power::Milliwatt),
                ("MW", Power::Megawatt),
                ("W", Power::Watt),
                ("watt", Power::Watt),
                ("watts", Power::Watt),
            ],
        )
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" deg / s^2 "), "deg/s2");
        assert_eq!(normalize("°/s²"), "deg/s2");
        assert_eq!(normalize("N·m"), "N*m");
        assert_eq!(normalize("µm³"), "um3");
    }

    #[test]
    fn test_exact_match_wins_over_case_folding() {
        let table = table();
        assert_eq!(table.lookup("mW"), Some(Power::Milliwatt));
        assert_eq!(table.lookup("MW"), Some(Power::Megawatt));
    }

    #[test]
    fn test_ambiguous_folded_match_is_rejected() {
        assert_eq!(table().lookup("mw"), None);
    }

    #[test]
    fn test_unambiguous_folded_match() {
        let table = table();
        assert_eq!(table.lookup("WATTS"), Some(Power::Watt));
        assert_eq!(table.lookup("w"), Some(Power::Watt));
        assert_eq!(table.lookup("furlong"), None);
    }
}
