//! Descriptor types.
//!
//! Descriptors are small immutable values identifying the physical
//! entities the database stores properties for. They validate their input
//! on construction and are independent of any storage concern.

mod element;
mod error;
mod line;
mod meta;
mod shell;
mod transition;

pub use element::{Element, MAX_ATOMIC_NUMBER};
pub use error::DescriptorError;
pub use line::XrayLine;
pub use meta::{Language, Notation, Reference};
pub use shell::{AtomicShell, AtomicSubshell};
pub use transition::{XrayTransition, XrayTransitionSet};
