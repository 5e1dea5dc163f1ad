//! Unattributed X-ray transition and transition set notations.

use std::collections::BTreeMap;

use tracing::debug;
use xraydb_core::{
    AtomicSubshell, Notation, NotationValues, ParseError, Property, PropertyParser,
    PropertyRecord, Reference, XrayTransition, XrayTransitionSet,
};

use crate::MAX_N;
use crate::notation::{
    multiplet_iupac, shell_iupac, shell_siegbahn, subshell_by_iupac, subshell_iupac,
    subshell_siegbahn, transition_iupac,
};

/// Siegbahn names of the diagram lines: destination, source, then the
/// ascii, utf16, html and latex renderings.
const SIEGBAHN_LINES: &[(&str, &str, [&str; 4])] = &[
    ("K", "L3", ["Ka1", "K\u{3b1}1", "K&alpha;<sub>1</sub>", "K$\\alpha_1$"]),
    ("K", "L2", ["Ka2", "K\u{3b1}2", "K&alpha;<sub>2</sub>", "K$\\alpha_2$"]),
    ("K", "M3", ["Kb1", "K\u{3b2}1", "K&beta;<sub>1</sub>", "K$\\beta_1$"]),
    ("K", "M2", ["Kb3", "K\u{3b2}3", "K&beta;<sub>3</sub>", "K$\\beta_3$"]),
    ("L3", "M5", ["La1", "L\u{3b1}1", "L&alpha;<sub>1</sub>", "L$\\alpha_1$"]),
    ("L3", "M4", ["La2", "L\u{3b1}2", "L&alpha;<sub>2</sub>", "L$\\alpha_2$"]),
    ("L2", "M4", ["Lb1", "L\u{3b2}1", "L&beta;<sub>1</sub>", "L$\\beta_1$"]),
    ("L3", "N5", ["Lb2", "L\u{3b2}2", "L&beta;<sub>2</sub>", "L$\\beta_2$"]),
    ("L2", "N4", ["Lg1", "L\u{3b3}1", "L&gamma;<sub>1</sub>", "L$\\gamma_1$"]),
    ("L3", "M1", ["Ll", "Ll", "Ll", "Ll"]),
    ("L2", "M1", ["Ln", "L\u{3b7}", "L&eta;", "L$\\eta$"]),
    ("M5", "N7", ["Ma1", "M\u{3b1}1", "M&alpha;<sub>1</sub>", "M$\\alpha_1$"]),
    ("M5", "N6", ["Ma2", "M\u{3b1}2", "M&alpha;<sub>2</sub>", "M$\\alpha_2$"]),
    ("M4", "N6", ["Mb", "M\u{3b2}", "M&beta;", "M$\\beta$"]),
    ("M3", "N5", ["Mg", "M\u{3b3}", "M&gamma;", "M$\\gamma$"]),
    ("M5", "N3", ["Mz", "M\u{3b6}", "M&zeta;", "M$\\zeta$"]),
];

/// Siegbahn multiplets: destination, member sources, renderings.
const SIEGBAHN_MULTIPLETS: &[(&str, &[&str], [&str; 4])] = &[
    ("K", &["L2", "L3"], ["Ka", "K\u{3b1}", "K&alpha;", "K$\\alpha$"]),
    ("K", &["M2", "M3"], ["Kb", "K\u{3b2}", "K&beta;", "K$\\beta$"]),
    ("L3", &["M4", "M5"], ["La", "L\u{3b1}", "L&alpha;", "L$\\alpha$"]),
    ("M5", &["N6", "N7"], ["Ma", "M\u{3b1}", "M&alpha;", "M$\\alpha$"]),
];

/// A transition together with the per-shell indices of its subshells.
struct IndexedTransition {
    transition: XrayTransition,
    source_index: u32,
    destination_index: u32,
}

/// Every transition from a subshell to a lower or equal shell.
///
/// Within one shell (Coster-Kronig), the source must come after the
/// destination in canonical order.
fn iter_transitions(max_n: u32) -> impl Iterator<Item = IndexedTransition> {
    AtomicSubshell::iter_up_to(max_n).flat_map(move |(src, src_i)| {
        AtomicSubshell::iter_up_to(max_n).filter_map(move |(dst, dst_i)| {
            if src == dst || src.n() < dst.n() || (src.n() == dst.n() && src_i <= dst_i) {
                return None;
            }
            Some(IndexedTransition {
                transition: XrayTransition::new(src, dst),
                source_index: src_i,
                destination_index: dst_i,
            })
        })
    })
}

fn values(rendered: &[&str; 4]) -> NotationValues {
    NotationValues::new(rendered[0], rendered[1], rendered[2], rendered[3])
}

fn lookup(label: &str) -> Result<AtomicSubshell, ParseError> {
    subshell_by_iupac(label).ok_or_else(|| ParseError::Dataset(format!("Unknown subshell {label}")))
}

/// IUPAC notation of a multiplet such as `K-L2,3`.
fn multiplet_values(destination: &str, sources: &[&str]) -> Result<NotationValues, ParseError> {
    let unknown = || ParseError::Dataset(format!("Invalid multiplet {destination}-{sources:?}"));

    let dst = lookup(destination)?;
    let dst_values = AtomicSubshell::iter_shell(dst.n())
        .find(|(subshell, _)| *subshell == dst)
        .and_then(|(subshell, index)| subshell_iupac(&subshell, index))
        .ok_or_else(unknown)?;

    let shell = sources.first().and_then(|s| s.get(..1)).ok_or_else(unknown)?;
    let indices = sources
        .iter()
        .map(|s| s.strip_prefix(shell).ok_or_else(unknown))
        .collect::<Result<Vec<_>, _>>()?
        .join(",");
    Ok(multiplet_iupac(&dst_values, shell, &indices))
}

/// IUPAC notation of every transition, plus Siegbahn names of diagram lines.
pub struct XrayTransitionNotationParser;

impl PropertyParser for XrayTransitionNotationParser {
    fn name(&self) -> &str {
        "xray_transition_notation"
    }

    fn parse(&self) -> Result<Vec<Property>, ParseError> {
        let reference = Reference::unattributed();
        let mut props = Vec::new();

        for indexed in iter_transitions(MAX_N) {
            let xray_transition = indexed.transition;
            let (Some(src), Some(dst)) = (
                subshell_iupac(&xray_transition.source, indexed.source_index),
                subshell_iupac(&xray_transition.destination, indexed.destination_index),
            ) else {
                continue;
            };

            let prop = Property::new(
                reference.clone(),
                PropertyRecord::XrayTransitionNotation {
                    xray_transition,
                    notation: Notation::iupac(),
                    values: transition_iupac(&dst, &src),
                },
            );
            debug!(%prop, %xray_transition, "Parsed");
            props.push(prop);
        }

        for (destination, source, rendered) in SIEGBAHN_LINES {
            let xray_transition = XrayTransition::new(lookup(source)?, lookup(destination)?);
            let prop = Property::new(
                reference.clone(),
                PropertyRecord::XrayTransitionNotation {
                    xray_transition,
                    notation: Notation::siegbahn(),
                    values: values(rendered),
                },
            );
            debug!(%prop, %xray_transition, "Parsed");
            props.push(prop);
        }

        Ok(props)
    }
}

/// Series (per shell), families (per subshell) and Siegbahn multiplets.
pub struct XrayTransitionSetNotationParser;

impl XrayTransitionSetNotationParser {
    fn push(
        props: &mut Vec<Property>,
        reference: &Reference,
        set: &XrayTransitionSet,
        notation: Notation,
        values: NotationValues,
    ) {
        let prop = Property::new(
            reference.clone(),
            PropertyRecord::XrayTransitionSetNotation {
                xray_transitionset: set.clone(),
                notation,
                values,
            },
        );
        debug!(%prop, %set, "Parsed");
        props.push(prop);
    }
}

impl PropertyParser for XrayTransitionSetNotationParser {
    fn name(&self) -> &str {
        "xray_transitionset_notation"
    }

    fn parse(&self) -> Result<Vec<Property>, ParseError> {
        let reference = Reference::unattributed();
        let mut props = Vec::new();

        let mut series: BTreeMap<u32, Vec<XrayTransition>> = BTreeMap::new();
        let mut families: BTreeMap<(AtomicSubshell, u32), Vec<XrayTransition>> = BTreeMap::new();
        for indexed in iter_transitions(MAX_N) {
            let dst = indexed.transition.destination;
            series.entry(dst.n()).or_default().push(indexed.transition);
            families
                .entry((dst, indexed.destination_index))
                .or_default()
                .push(indexed.transition);
        }

        for (n, transitions) in series {
            let set = XrayTransitionSet::new(transitions)?;
            if let Some(v) = shell_siegbahn(n) {
                Self::push(&mut props, &reference, &set, Notation::siegbahn(), v);
            }
            if let Some(v) = shell_iupac(n) {
                Self::push(&mut props, &reference, &set, Notation::iupac(), v);
            }
        }

        for ((subshell, index), transitions) in families {
            // K is a single subshell, already covered by the K series
            if subshell.n() == 1 {
                continue;
            }
            let set = XrayTransitionSet::new(transitions)?;
            if let Some(v) = subshell_siegbahn(&subshell, index) {
                Self::push(&mut props, &reference, &set, Notation::siegbahn(), v);
            }
            if let Some(v) = subshell_iupac(&subshell, index) {
                Self::push(&mut props, &reference, &set, Notation::iupac(), v);
            }
        }

        for (destination, sources, rendered) in SIEGBAHN_MULTIPLETS {
            let dst = lookup(destination)?;
            let transitions = sources
                .iter()
                .map(|src| Ok(XrayTransition::new(lookup(src)?, dst)))
                .collect::<Result<Vec<_>, ParseError>>()?;
            let set = XrayTransitionSet::new(transitions)?;
            Self::push(&mut props, &reference, &set, Notation::siegbahn(), values(rendered));
            Self::push(
                &mut props,
                &reference,
                &set,
                Notation::iupac(),
                multiplet_values(destination, sources)?,
            );
        }

        Ok(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subshell(n: u32, l: u32, j_n: u32) -> AtomicSubshell {
        AtomicSubshell::new(n, l, j_n).unwrap()
    }

    fn notation_of(props: &[Property], target: &XrayTransition, notation: &str) -> Option<String> {
        props.iter().find_map(|p| match &p.record {
            PropertyRecord::XrayTransitionNotation {
                xray_transition,
                notation: nt,
                values,
            } if xray_transition == target && nt.name() == notation => Some(values.utf16.clone()),
            _ => None,
        })
    }

    #[test]
    fn test_transition_count() {
        // Every unordered pair of the 49 subshells up to Q
        assert_eq!(iter_transitions(MAX_N).count(), 49 * 48 / 2);
    }

    #[test]
    fn test_coster_kronig_direction() {
        let l1_l3 = iter_transitions(MAX_N).find(|t| {
            t.transition.source == subshell(2, 1, 3) && t.transition.destination == subshell(2, 0, 1)
        });
        assert!(l1_l3.is_some());
        let reversed = iter_transitions(MAX_N).find(|t| {
            t.transition.source == subshell(2, 0, 1) && t.transition.destination == subshell(2, 1, 3)
        });
        assert!(reversed.is_none());
    }

    #[test]
    fn test_transition_notations() {
        let props = XrayTransitionNotationParser.parse().unwrap();
        let ka1 = XrayTransition::new(subshell(2, 1, 3), subshell(1, 0, 1));
        assert_eq!(notation_of(&props, &ka1, "iupac").as_deref(), Some("K\u{2013}L3"));
        assert_eq!(notation_of(&props, &ka1, "siegbahn").as_deref(), Some("K\u{3b1}1"));

        let la1 = XrayTransition::new(subshell(3, 2, 5), subshell(2, 1, 3));
        assert_eq!(notation_of(&props, &la1, "siegbahn").as_deref(), Some("L\u{3b1}1"));
        assert_eq!(props.len(), 49 * 48 / 2 + SIEGBAHN_LINES.len());
    }

    #[test]
    fn test_transition_set_notations() {
        let props = XrayTransitionSetNotationParser.parse().unwrap();
        let sets: Vec<(&str, usize)> = props
            .iter()
            .filter_map(|p| match &p.record {
                PropertyRecord::XrayTransitionSetNotation {
                    xray_transitionset,
                    notation,
                    values,
                } if notation.name() == "iupac" || values.ascii.len() <= 2 => {
                    Some((values.ascii.as_str(), xray_transitionset.len()))
                }
                _ => None,
            })
            .collect();

        // K series: every subshell above K
        assert!(sets.contains(&("K", 48)));
        assert!(sets.contains(&("Ka", 2)));
        assert!(sets.contains(&("K-L2,3", 2)));
        assert!(sets.contains(&("L3-M4,5", 2)));
        // L3 family: sources in the shells above L plus nothing from L itself
        let l3 = sets.iter().find(|(name, _)| *name == "L3").unwrap();
        assert_eq!(l3.1, 49 - 4);
    }
}
