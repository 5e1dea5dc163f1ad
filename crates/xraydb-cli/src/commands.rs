//! Main commands enum and primary subcommands.

use std::path::PathBuf;

use clap::Subcommand;
use xraydb_core::Encoding;

use crate::config_commands::ConfigCommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Populate the database from the built-in parsers and data files
    Build {
        /// JSON dataset to load (repeatable)
        #[arg(long = "dataset", value_name = "JSON")]
        datasets: Vec<PathBuf>,
        /// Campbell & Papp radiative width table
        #[arg(long, value_name = "FILE")]
        campbell: Option<PathBuf>,
    },

    /// Show what is known about an element
    Element {
        /// Atomic number, symbol or name
        query: String,
        /// Language of the element name (defaults to the configured one)
        #[arg(short, long)]
        language: Option<String>,
        /// Also list the element's X-ray transitions
        #[arg(short, long)]
        transitions: bool,
        /// Restrict the transitions to a transition set (e.g. "Ka")
        #[arg(long, requires = "transitions")]
        set: Option<String>,
    },

    /// Show an atomic shell
    Shell {
        /// Principal quantum number or notation (e.g. "L")
        query: String,
        /// Notation system
        #[arg(short, long, default_value = "iupac")]
        notation: String,
        /// Encoding of the notation (ascii, utf16, html, latex)
        #[arg(short, long, value_parser = parse_encoding)]
        encoding: Option<Encoding>,
    },

    /// Show an atomic subshell
    Subshell {
        /// "n,l,j_n" quantum numbers or notation (e.g. "L3")
        query: String,
        /// Notation system
        #[arg(short, long, default_value = "iupac")]
        notation: String,
        /// Encoding of the notation (ascii, utf16, html, latex)
        #[arg(short, long, value_parser = parse_encoding)]
        encoding: Option<Encoding>,
        /// Also show the element's values for this subshell
        #[arg(long)]
        element: Option<String>,
    },

    /// Show an X-ray transition
    Transition {
        /// Transition notation (e.g. "K-L3", "Ka1")
        query: String,
        /// Also show the element's values for this transition
        #[arg(long)]
        element: Option<String>,
        /// Encoding of the notations (ascii, utf16, html, latex)
        #[arg(short, long, value_parser = parse_encoding)]
        encoding: Option<Encoding>,
    },

    /// Resolve an X-ray line of an element
    Line {
        /// Atomic number, symbol or name
        element: String,
        /// Transition or transition set notation (e.g. "Ka1", "Ka")
        line: String,
        /// Reference to take the energy from
        #[arg(short, long)]
        reference: Option<String>,
    },

    /// Print one numeric property
    Property {
        /// Property name (e.g. "xray_transition_energy_ev")
        name: String,
        /// Atomic number, symbol or name
        element: String,
        /// Subshell, transition or transition set the property belongs to
        target: Option<String>,
        /// Reference to take the value from
        #[arg(short, long)]
        reference: Option<String>,
    },

    /// View or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Show the resolved database location
    Paths,
}

/// Parse an encoding name (case-insensitive).
pub fn parse_encoding(value: &str) -> Result<Encoding, String> {
    value
        .parse::<Encoding>()
        .map_err(|_| format!("unknown encoding '{value}' (expected ascii, utf16, html or latex)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::Parser;

    #[test]
    fn test_build_collects_datasets() {
        let cli = Cli::parse_from([
            "xraydb",
            "build",
            "--dataset",
            "a.json",
            "--dataset",
            "b.json",
            "--campbell",
            "widths.txt",
        ]);
        match cli.command {
            Some(Commands::Build { datasets, campbell }) => {
                assert_eq!(datasets, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
                assert_eq!(campbell, Some(PathBuf::from("widths.txt")));
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_encoding_is_parsed() {
        let cli = Cli::parse_from(["xraydb", "subshell", "L3", "-e", "LaTeX"]);
        match cli.command {
            Some(Commands::Subshell {
                query,
                notation,
                encoding,
                ..
            }) => {
                assert_eq!(query, "L3");
                assert_eq!(notation, "iupac");
                assert_eq!(encoding, Some(Encoding::Latex));
            }
            _ => panic!("expected subshell"),
        }
    }

    #[test]
    fn test_bad_encoding_is_rejected() {
        assert!(Cli::try_parse_from(["xraydb", "shell", "K", "--encoding", "ebcdic"]).is_err());
    }

    #[test]
    fn test_set_requires_transitions() {
        assert!(Cli::try_parse_from(["xraydb", "element", "Fe", "--set", "Ka"]).is_err());
        assert!(
            Cli::try_parse_from(["xraydb", "element", "Fe", "--transitions", "--set", "Ka"])
                .is_ok()
        );
    }

    #[test]
    fn test_property_target_is_optional() {
        let cli = Cli::parse_from(["xraydb", "property", "element_atomic_weight", "Fe"]);
        match cli.command {
            Some(Commands::Property { target, .. }) => assert!(target.is_none()),
            _ => panic!("expected property"),
        }
    }
}
