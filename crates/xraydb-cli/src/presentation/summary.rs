//! Rendering of element summaries, transition tables and lines.

use std::fmt::Write as _;

use xraydb_core::{ElementSummary, TransitionSummary, XrayLine};

use super::tables::{format_optional, format_value, separator};

const LABEL_WIDTH: usize = 16;

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$}{value}");
}

/// Multi-line summary of an element.
pub fn format_element_summary(summary: &ElementSummary) -> String {
    let mut out = String::new();
    row(&mut out, "Atomic number:", &summary.element.z().to_string());
    row(&mut out, "Symbol:", &format_optional(summary.symbol.as_ref(), "-"));
    row(&mut out, "Name:", &format_optional(summary.name.as_ref(), "-"));
    row(
        &mut out,
        "Atomic weight:",
        &summary
            .atomic_weight
            .map_or_else(|| "-".to_string(), format_value),
    );
    row(
        &mut out,
        "Density:",
        &summary.mass_density_kg_per_m3.map_or_else(
            || "-".to_string(),
            |d| format!("{} g/cm3", format_value(d / 1000.0)),
        ),
    );
    out
}

/// Table of transitions: notation, energy and probability.
pub fn format_transitions(transitions: &[TransitionSummary]) -> String {
    if transitions.is_empty() {
        return "No X-ray transitions.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:>14} {:>12}", "Transition", "Energy (eV)", "Probability");
    let _ = writeln!(out, "{}", separator(40));
    for t in transitions {
        let notation = t
            .iupac
            .clone()
            .unwrap_or_else(|| t.transition.to_string());
        let _ = writeln!(
            out,
            "{:<12} {:>14} {:>12}",
            notation,
            t.energy_ev.map_or_else(|| "-".to_string(), format_value),
            t.probability.map_or_else(|| "-".to_string(), format_value),
        );
    }
    out
}

/// One-line rendering of an X-ray line.
pub fn format_line(line: &XrayLine) -> String {
    let names = if line.siegbahn == line.iupac {
        line.iupac.clone()
    } else {
        format!("{} ({})", line.iupac, line.siegbahn)
    };
    format!(
        "Z={} {}: {} eV, {} transition(s)",
        line.z(),
        names,
        format_value(line.energy_ev),
        line.transitions.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use xraydb_core::{AtomicSubshell, Element, XrayTransition};

    fn ka1() -> XrayTransition {
        XrayTransition::new(
            AtomicSubshell::new(2, 1, 3).unwrap(),
            AtomicSubshell::new(1, 0, 1).unwrap(),
        )
    }

    #[test]
    fn test_element_summary_with_missing_values() {
        let summary = ElementSummary {
            element: Element::new(26).unwrap(),
            symbol: Some("Fe".to_string()),
            name: None,
            atomic_weight: Some(55.845),
            mass_density_kg_per_m3: Some(7874.0),
        };
        let text = format_element_summary(&summary);
        assert!(text.contains("Atomic number:  26"));
        assert!(text.contains("Name:           -"));
        assert!(text.contains("7.874 g/cm3"));
    }

    #[test]
    fn test_transition_table() {
        let text = format_transitions(&[TransitionSummary {
            transition: ka1(),
            iupac: Some("K\u{2013}L3".to_string()),
            energy_ev: Some(6403.84),
            probability: None,
        }]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("K\u{2013}L3"));
        assert!(lines[2].contains("6403.84"));
        assert!(lines[2].trim_end().ends_with('-'));

        assert_eq!(format_transitions(&[]), "No X-ray transitions.\n");
    }

    #[test]
    fn test_line() {
        let line = XrayLine {
            element: Element::new(26).unwrap(),
            transitions: vec![ka1()],
            iupac: "K\u{2013}L3".to_string(),
            siegbahn: "K\u{3b1}1".to_string(),
            energy_ev: 6403.84,
        };
        assert_eq!(
            format_line(&line),
            "Z=26 K\u{2013}L3 (K\u{3b1}1): 6403.84 eV, 1 transition(s)"
        );
    }
}
