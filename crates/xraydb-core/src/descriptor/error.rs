//! Validation errors raised when constructing descriptors.

use thiserror::Error;

/// Invalid descriptor input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("Atomic number ({0}) must be [1, 118]")]
    InvalidAtomicNumber(u32),

    #[error("Principal quantum number ({0}) must be [1, inf[")]
    InvalidPrincipalQuantumNumber(u32),

    #[error("Azimuthal quantum number ({l}) must be between [0, {max}]")]
    InvalidAzimuthalQuantumNumber { l: u32, max: u32 },

    #[error("Total angular momentum ({j_n}/2) must be {min}/2 or {max}/2")]
    InvalidTotalAngularMomentum { j_n: u32, min: u32, max: u32 },

    #[error("At least one transition must be defined")]
    EmptyTransitionSet,

    #[error("Language code must be between 2 and 3 characters, got '{0}'")]
    InvalidLanguageCode(String),

    #[error("Notation name cannot be empty")]
    EmptyNotation,

    #[error("Reference bibtex key cannot be empty")]
    EmptyReference,
}
