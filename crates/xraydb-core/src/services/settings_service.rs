//! Settings service.
//!
//! Persisted settings and the default references held by the running
//! database are kept in step: every successful `update` or `save` pushes
//! the changed defaults into the `XrayDatabase` after writing them.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::ports::{CoreError, SettingsRepository, XrayDatabase};
use crate::settings::{Settings, SettingsUpdate, validate_settings};

/// Settings access for the application.
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
    db: Arc<dyn XrayDatabase>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>, db: Arc<dyn XrayDatabase>) -> Self {
        Self { repo, db }
    }

    /// Persisted settings (defaults when none were saved).
    pub async fn get(&self) -> Result<Settings, CoreError> {
        self.repo.load().await.map_err(CoreError::from)
    }

    /// Merge a partial update, validate, persist and apply it.
    pub async fn update(&self, update: SettingsUpdate) -> Result<Settings, CoreError> {
        let previous = self.get().await?;
        let mut current = previous.clone();
        current.merge(&update);
        validate_settings(&current)?;

        self.repo.save(&current).await.map_err(CoreError::from)?;
        self.sync_references(&previous.default_references, &current.default_references)?;
        info!(
            references = current.default_references.len(),
            language = %current.effective_language(),
            "Settings updated"
        );
        Ok(current)
    }

    /// Replace the settings wholesale.
    pub async fn save(&self, settings: &Settings) -> Result<(), CoreError> {
        validate_settings(settings)?;
        let previous = self.get().await?;

        self.repo.save(settings).await.map_err(CoreError::from)?;
        self.sync_references(&previous.default_references, &settings.default_references)
    }

    /// Load the persisted settings and push every default reference into
    /// the database. Run once at startup.
    pub async fn apply(&self) -> Result<Settings, CoreError> {
        let settings = self.get().await?;
        self.sync_references(&BTreeMap::new(), &settings.default_references)?;
        Ok(settings)
    }

    fn sync_references(
        &self,
        previous: &BTreeMap<String, String>,
        current: &BTreeMap<String, String>,
    ) -> Result<(), CoreError> {
        for property in previous.keys().filter(|p| !current.contains_key(*p)) {
            self.db.set_default_reference(property, None)?;
        }
        for (property, reference) in current {
            self.db
                .set_default_reference(property, Some(reference.as_str()))?;
        }
        debug!(count = current.len(), "Applied default references");
        Ok(())
    }
}
