//! Config command handler.
//!
//! Settings are persisted in the database; changes take effect on the next
//! invocation (they are applied at bootstrap).

use anyhow::Result;
use xraydb_core::{PropertyKind, Settings, SettingsUpdate};

use crate::bootstrap::CliContext;
use crate::config_commands::ConfigCommand;
use crate::error::CliError;

/// Execute the config command.
pub async fn execute(ctx: &CliContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let settings = ctx.app().settings().get().await?;
            print!("{}", format_settings(&settings));
        }
        ConfigCommand::SetReference {
            property,
            reference,
        } => {
            let kind = parse_property(&property)?;
            let mut update = SettingsUpdate::default();
            update
                .default_references
                .insert(kind.to_string(), Some(reference.clone()));
            ctx.app().settings().update(update).await?;
            println!("✓ Default reference for {kind} set to {reference}");
        }
        ConfigCommand::UnsetReference { property } => {
            let kind = parse_property(&property)?;
            let mut update = SettingsUpdate::default();
            update.default_references.insert(kind.to_string(), None);
            ctx.app().settings().update(update).await?;
            println!("✓ Default reference for {kind} removed");
        }
        ConfigCommand::SetLanguage { code } => {
            let update = SettingsUpdate {
                default_language: Some(Some(code)),
                ..Default::default()
            };
            let settings = ctx.app().settings().update(update).await?;
            println!(
                "✓ Default language set to {}",
                settings.effective_language()
            );
        }
    }
    Ok(())
}

fn parse_property(name: &str) -> Result<PropertyKind, CliError> {
    name.parse::<PropertyKind>()
        .map_err(|_| CliError::Arguments(format!("unknown property '{name}'")))
}

/// Render settings as `key = value` lines.
pub fn format_settings(settings: &Settings) -> String {
    let mut out = format!(
        "default_language = {}\ndefault_encoding = {}\n",
        settings.effective_language(),
        settings.effective_encoding()
    );
    if settings.default_references.is_empty() {
        out.push_str("default_references = (none)\n");
    } else {
        for (property, reference) in &settings.default_references {
            out.push_str(&format!("default_references.{property} = {reference}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_settings() {
        let mut settings = Settings::with_defaults();
        assert_eq!(
            format_settings(&settings),
            "default_language = en\ndefault_encoding = utf16\ndefault_references = (none)\n"
        );

        settings
            .default_references
            .insert("xray_transition_energy".to_string(), "bearden1967".to_string());
        assert!(
            format_settings(&settings)
                .contains("default_references.xray_transition_energy = bearden1967")
        );
    }

    #[test]
    fn test_parse_property_accepts_unit_aliases() {
        assert_eq!(
            parse_property("atomic_subshell_binding_energy_ev").unwrap(),
            PropertyKind::AtomicSubshellBindingEnergy
        );
        assert!(matches!(
            parse_property("colour"),
            Err(CliError::Arguments(_))
        ));
    }
}
