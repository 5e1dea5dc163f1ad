//! Atomic shell and subshell descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DescriptorError;

/// Atomic shell, identified by its principal quantum number `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct AtomicShell {
    principal_quantum_number: u32,
}

impl AtomicShell {
    pub fn new(principal_quantum_number: u32) -> Result<Self, DescriptorError> {
        if principal_quantum_number < 1 {
            return Err(DescriptorError::InvalidPrincipalQuantumNumber(
                principal_quantum_number,
            ));
        }
        Ok(Self {
            principal_quantum_number,
        })
    }

    pub const fn principal_quantum_number(&self) -> u32 {
        self.principal_quantum_number
    }

    pub const fn n(&self) -> u32 {
        self.principal_quantum_number
    }
}

impl TryFrom<u32> for AtomicShell {
    type Error = DescriptorError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AtomicShell> for u32 {
    fn from(shell: AtomicShell) -> Self {
        shell.principal_quantum_number
    }
}

impl fmt::Display for AtomicShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AtomicShell(n={})", self.principal_quantum_number)
    }
}

/// Atomic subshell, identified by `(n, l, j_n)`.
///
/// `j_n` is the numerator of the total angular momentum over two, so that
/// `j = j_n / 2` stays an integer quantity. Ordering follows `n`, then `l`,
/// then `j_n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u32; 3]", into = "[u32; 3]")]
pub struct AtomicSubshell {
    principal_quantum_number: u32,
    azimuthal_quantum_number: u32,
    total_angular_momentum_nominator: u32,
}

impl AtomicSubshell {
    /// Create a subshell.
    ///
    /// `l` must lie in `[0, n - 1]` and `j_n` in `[|2l - 1|, 2l + 1]`.
    pub fn new(n: u32, l: u32, j_n: u32) -> Result<Self, DescriptorError> {
        AtomicShell::new(n)?;

        let lmax = n - 1;
        if l > lmax {
            return Err(DescriptorError::InvalidAzimuthalQuantumNumber { l, max: lmax });
        }

        let jmin_n = (2 * l).abs_diff(1);
        let jmax_n = 2 * l + 1;
        if !(jmin_n..=jmax_n).contains(&j_n) {
            return Err(DescriptorError::InvalidTotalAngularMomentum {
                j_n,
                min: jmin_n,
                max: jmax_n,
            });
        }

        Ok(Self {
            principal_quantum_number: n,
            azimuthal_quantum_number: l,
            total_angular_momentum_nominator: j_n,
        })
    }

    /// Create a subshell of an existing shell.
    pub fn of_shell(shell: AtomicShell, l: u32, j_n: u32) -> Result<Self, DescriptorError> {
        Self::new(shell.n(), l, j_n)
    }

    /// Iterate the subshells of shell `n` in canonical order (by `l`, then `j`).
    ///
    /// The yielded index starts at 1 and is the subshell number used by the
    /// IUPAC and Siegbahn notations (`L1`, `L2`, `L3`, ...).
    pub fn iter_shell(n: u32) -> impl Iterator<Item = (Self, u32)> {
        (0..n)
            .flat_map(move |l| {
                let jmin_n = (2 * l).abs_diff(1);
                let jmax_n = 2 * l + 1;
                let js: Vec<u32> = if jmin_n == jmax_n {
                    vec![jmax_n]
                } else {
                    vec![jmin_n, jmax_n]
                };
                js.into_iter().map(move |j_n| Self {
                    principal_quantum_number: n,
                    azimuthal_quantum_number: l,
                    total_angular_momentum_nominator: j_n,
                })
            })
            .zip(1..)
    }

    /// Iterate the subshells of shells `1..=max_n` with their per-shell index.
    pub fn iter_up_to(max_n: u32) -> impl Iterator<Item = (Self, u32)> {
        (1..=max_n).flat_map(Self::iter_shell)
    }

    pub const fn atomic_shell(&self) -> AtomicShell {
        AtomicShell {
            principal_quantum_number: self.principal_quantum_number,
        }
    }

    pub const fn n(&self) -> u32 {
        self.principal_quantum_number
    }

    pub const fn l(&self) -> u32 {
        self.azimuthal_quantum_number
    }

    pub const fn j_n(&self) -> u32 {
        self.total_angular_momentum_nominator
    }

    pub fn total_angular_momentum(&self) -> f64 {
        f64::from(self.total_angular_momentum_nominator) / 2.0
    }

    pub fn j(&self) -> f64 {
        self.total_angular_momentum()
    }
}

impl TryFrom<[u32; 3]> for AtomicSubshell {
    type Error = DescriptorError;

    fn try_from([n, l, j_n]: [u32; 3]) -> Result<Self, Self::Error> {
        Self::new(n, l, j_n)
    }
}

impl TryFrom<(u32, u32, u32)> for AtomicSubshell {
    type Error = DescriptorError;

    fn try_from((n, l, j_n): (u32, u32, u32)) -> Result<Self, Self::Error> {
        Self::new(n, l, j_n)
    }
}

impl From<AtomicSubshell> for [u32; 3] {
    fn from(subshell: AtomicSubshell) -> Self {
        [subshell.n(), subshell.l(), subshell.j_n()]
    }
}

impl fmt::Display for AtomicSubshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AtomicSubshell(n={}, l={}, j={:.1})",
            self.n(),
            self.l(),
            self.j()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_validation() {
        assert!(AtomicShell::new(0).is_err());
        assert_eq!(AtomicShell::new(3).unwrap().n(), 3);
    }

    #[test]
    fn test_subshell_validation() {
        assert!(AtomicSubshell::new(1, 0, 1).is_ok());
        assert!(AtomicSubshell::new(1, 1, 1).is_err());
        assert!(AtomicSubshell::new(2, 1, 3).is_ok());
        assert!(AtomicSubshell::new(2, 1, 2).is_ok());
        assert!(AtomicSubshell::new(2, 1, 0).is_err());
        assert!(AtomicSubshell::new(1, 0, 0).is_err());
        assert_eq!(
            AtomicSubshell::new(2, 1, 5),
            Err(DescriptorError::InvalidTotalAngularMomentum {
                j_n: 5,
                min: 1,
                max: 3
            })
        );
        assert!(AtomicSubshell::new(0, 0, 1).is_err());
    }

    #[test]
    fn test_subshell_accessors() {
        let l3 = AtomicSubshell::new(2, 1, 3).unwrap();
        assert_eq!(l3.atomic_shell(), AtomicShell::new(2).unwrap());
        assert!((l3.j() - 1.5).abs() < f64::EPSILON);
        assert_eq!(l3.to_string(), "AtomicSubshell(n=2, l=1, j=1.5)");
    }

    #[test]
    fn test_iter_shell_order() {
        let m: Vec<_> = AtomicSubshell::iter_shell(3)
            .map(|(s, i)| (s.l(), s.j_n(), i))
            .collect();
        assert_eq!(m, vec![(0, 1, 1), (1, 1, 2), (1, 3, 3), (2, 3, 4), (2, 5, 5)]);
    }

    #[test]
    fn test_iter_up_to_counts() {
        // 2n - 1 subshells per shell
        assert_eq!(AtomicSubshell::iter_up_to(7).count(), 49);
    }
}
