//! Configuration management subcommands.

use clap::Subcommand;

/// Settings commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show all current settings
    Show,
    /// Prefer a reference for a property
    SetReference {
        /// Property name (e.g. "xray_transition_energy")
        property: String,
        /// BibTeX key of the reference
        reference: String,
    },
    /// Remove the preferred reference of a property
    UnsetReference {
        /// Property name
        property: String,
    },
    /// Set the default language of element names
    SetLanguage {
        /// Language code (e.g. "en", "fr")
        code: String,
    },
}
