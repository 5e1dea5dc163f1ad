//! Rendering of shell, subshell and transition notations.

use xraydb_core::{AtomicSubshell, NotationValues};

const SHELLS: [&str; 7] = ["K", "L", "M", "N", "O", "P", "Q"];

const ROMAN: [&str; 13] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII",
];

const ORBITAL_L: [&str; 7] = ["s", "p", "d", "f", "g", "h", "i"];

/// Shell letter (`K` for n = 1). Out of range shells have no letter.
pub fn shell_letter(n: u32) -> Option<&'static str> {
    SHELLS.get(usize::try_from(n).ok()?.checked_sub(1)?).copied()
}

pub fn shell_siegbahn(n: u32) -> Option<NotationValues> {
    shell_letter(n).map(NotationValues::uniform)
}

pub fn shell_iupac(n: u32) -> Option<NotationValues> {
    shell_letter(n).map(NotationValues::uniform)
}

pub fn shell_orbital(n: u32) -> NotationValues {
    NotationValues::uniform(&n.to_string())
}

/// `LIII`; the K shell has a single subshell and no numeral.
pub fn subshell_siegbahn(subshell: &AtomicSubshell, index: u32) -> Option<NotationValues> {
    let shell = shell_letter(subshell.n())?;
    if subshell.n() == 1 {
        return Some(NotationValues::uniform(shell));
    }
    let numeral = ROMAN.get(usize::try_from(index).ok()?.checked_sub(1)?)?;
    Some(NotationValues::uniform(&format!("{shell}{numeral}")))
}

/// `L3`, `L<sub>3</sub>`, `L$_{3}$`.
pub fn subshell_iupac(subshell: &AtomicSubshell, index: u32) -> Option<NotationValues> {
    let shell = shell_letter(subshell.n())?;
    if subshell.n() == 1 {
        return Some(NotationValues::uniform(shell));
    }
    let plain = format!("{shell}{index}");
    Some(NotationValues::new(
        &plain,
        &plain,
        &format!("{shell}<sub>{index}</sub>"),
        &format!("{shell}$_{{{index}}}$"),
    ))
}

/// `2p3/2`, `2p<sub>3/2</sub>`, `2p$_{3/2}$`.
pub fn subshell_orbital(subshell: &AtomicSubshell) -> Option<NotationValues> {
    let letter = ORBITAL_L.get(usize::try_from(subshell.l()).ok()?)?;
    let n = subshell.n();
    let j_n = subshell.j_n();
    let plain = format!("{n}{letter}{j_n}/2");
    Some(NotationValues::new(
        &plain,
        &plain,
        &format!("{n}{letter}<sub>{j_n}/2</sub>"),
        &format!("{n}{letter}$_{{{j_n}/2}}$"),
    ))
}

/// IUPAC transition notation, destination first: `K-L3`, `K–L3`.
pub fn transition_iupac(destination: &NotationValues, source: &NotationValues) -> NotationValues {
    NotationValues {
        ascii: format!("{}-{}", destination.ascii, source.ascii),
        utf16: format!("{}\u{2013}{}", destination.utf16, source.utf16),
        html: format!("{}&ndash;{}", destination.html, source.html),
        latex: format!("{}--{}", destination.latex, source.latex),
    }
}

/// IUPAC notation of a multiplet whose sources share one shell:
/// `K-L2,3`, `K–L2,3`.
pub fn multiplet_iupac(destination: &NotationValues, shell: &str, indices: &str) -> NotationValues {
    NotationValues {
        ascii: format!("{}-{shell}{indices}", destination.ascii),
        utf16: format!("{}\u{2013}{shell}{indices}", destination.utf16),
        html: format!("{}&ndash;{shell}<sub>{indices}</sub>", destination.html),
        latex: format!("{}--{shell}$_{{{indices}}}$", destination.latex),
    }
}

/// Resolve an IUPAC subshell label (`K`, `L3`, `N7`) to its subshell.
pub fn subshell_by_iupac(label: &str) -> Option<AtomicSubshell> {
    let label = label.trim();
    let mut chars = label.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let n = SHELLS
        .iter()
        .position(|s| s.starts_with(letter))
        .and_then(|i| u32::try_from(i + 1).ok())?;

    let rest = chars.as_str();
    let index: u32 = if rest.is_empty() {
        if n != 1 {
            return None;
        }
        1
    } else {
        rest.parse().ok()?
    };

    AtomicSubshell::iter_shell(n)
        .find(|(_, i)| *i == index)
        .map(|(subshell, _)| subshell)
}
