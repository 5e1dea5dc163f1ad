//! Core domain of xraydb: descriptors, property records, queries, ports,
//! settings and the services composed over them.
//!
//! This crate has no storage dependency. `xraydb-db` implements the ports
//! on `SQLite`; `xraydb-parsers` supplies the data.

#![deny(unsafe_code)]

pub mod descriptor;
pub mod paths;
pub mod ports;
pub mod property;
pub mod query;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use descriptor::{
    AtomicShell, AtomicSubshell, DescriptorError, Element, Language, Notation, Reference,
    XrayLine, XrayTransition, XrayTransitionSet,
};
pub use ports::{
    CoreError, DatabaseError, ParseError, PropertyParser, Repos, RepositoryError,
    SettingsRepository, XrayDatabase, optional,
};
pub use property::{NotationValues, Property, PropertyKind, PropertyRecord};
pub use query::{
    AtomicShellQuery, AtomicSubshellQuery, ElementQuery, Encoding, XrayLineQuery,
    XrayTransitionQuery, XrayTransitionSetQuery,
};
pub use services::{AppCore, ElementSummary, SettingsService, TransitionSummary, XrayService};
pub use settings::{
    DEFAULT_LANGUAGE, DefaultReferences, Settings, SettingsError, SettingsUpdate,
    validate_settings,
};
