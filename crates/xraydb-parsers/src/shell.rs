//! Unattributed shell and subshell notations.

use tracing::debug;
use xraydb_core::{
    AtomicShell, AtomicSubshell, Notation, NotationValues, ParseError, Property, PropertyParser,
    PropertyRecord, Reference,
};

use crate::MAX_N;
use crate::notation::{
    shell_iupac, shell_orbital, shell_siegbahn, subshell_iupac, subshell_orbital,
    subshell_siegbahn,
};

/// Siegbahn, IUPAC and orbital notations of shells K to Q.
pub struct AtomicShellNotationParser;

impl PropertyParser for AtomicShellNotationParser {
    fn name(&self) -> &str {
        "atomic_shell_notation"
    }

    fn parse(&self) -> Result<Vec<Property>, ParseError> {
        let reference = Reference::unattributed();
        let mut props = Vec::new();

        for n in 1..=MAX_N {
            let atomic_shell = AtomicShell::new(n)?;
            let entries = [
                (Notation::siegbahn(), shell_siegbahn(n)),
                (Notation::iupac(), shell_iupac(n)),
                (Notation::orbital(), Some(shell_orbital(n))),
            ];

            for (notation, values) in entries {
                let Some(values) = values else { continue };
                let prop = Property::new(
                    reference.clone(),
                    PropertyRecord::AtomicShellNotation {
                        atomic_shell,
                        notation,
                        values,
                    },
                );
                debug!(%prop, n, "Parsed");
                props.push(prop);
            }
        }

        Ok(props)
    }
}

/// Siegbahn, IUPAC and orbital notations of every subshell up to Q.
pub struct AtomicSubshellNotationParser;

impl AtomicSubshellNotationParser {
    fn entries(subshell: &AtomicSubshell, index: u32) -> [(Notation, Option<NotationValues>); 3] {
        [
            (Notation::siegbahn(), subshell_siegbahn(subshell, index)),
            (Notation::iupac(), subshell_iupac(subshell, index)),
            (Notation::orbital(), subshell_orbital(subshell)),
        ]
    }
}

impl PropertyParser for AtomicSubshellNotationParser {
    fn name(&self) -> &str {
        "atomic_subshell_notation"
    }

    fn parse(&self) -> Result<Vec<Property>, ParseError> {
        let reference = Reference::unattributed();
        let mut props = Vec::new();

        for (atomic_subshell, index) in AtomicSubshell::iter_up_to(MAX_N) {
            for (notation, values) in Self::entries(&atomic_subshell, index) {
                let Some(values) = values else { continue };
                let prop = Property::new(
                    reference.clone(),
                    PropertyRecord::AtomicSubshellNotation {
                        atomic_subshell,
                        notation,
                        values,
                    },
                );
                debug!(%prop, %atomic_subshell, "Parsed");
                props.push(prop);
            }
        }

        Ok(props)
    }
}
