//! Property parsers for xraydb.
//!
//! Each parser implements [`PropertyParser`] from `xraydb-core` and yields
//! [`Property`](xraydb_core::Property) records. Persistence is left to the
//! database builder in `xraydb-db`.
//!
//! The built-in parsers need no input and are returned by
//! [`default_parsers`]. File-backed parsers ([`CampbellRadiativeWidthParser`],
//! [`JsonDatasetParser`]) are constructed from a path.

mod campbell;
mod element;
mod json_dataset;
mod notation;
mod shell;
mod tables;
mod transition;

pub use campbell::{CampbellRadiativeWidthParser, campbell_reference};
pub use element::{ElementNameParser, ElementSymbolParser};
pub use json_dataset::{Dataset, JsonDatasetParser};
pub use shell::{AtomicShellNotationParser, AtomicSubshellNotationParser};
pub use transition::{XrayTransitionNotationParser, XrayTransitionSetNotationParser};

use xraydb_core::PropertyParser;

/// Highest principal quantum number covered by the notation parsers.
pub const MAX_N: u32 = 7;

/// The built-in parsers, in the order the database should run them.
pub fn default_parsers() -> Vec<Box<dyn PropertyParser>> {
    vec![
        Box::new(ElementSymbolParser),
        Box::new(ElementNameParser),
        Box::new(AtomicShellNotationParser),
        Box::new(AtomicSubshellNotationParser),
        Box::new(XrayTransitionNotationParser),
        Box::new(XrayTransitionSetNotationParser),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parsers_have_unique_names() {
        let parsers = default_parsers();
        let mut names: Vec<_> = parsers.iter().map(|p| p.name().to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), parsers.len());
    }
}
