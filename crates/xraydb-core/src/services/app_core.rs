//! `AppCore` - the primary application facade.
//!
//! Adapters (the CLI) receive an `AppCore` instance and use it to access
//! all functionality.

use crate::ports::{CoreError, Repos};
use crate::settings::Settings;

use super::{SettingsService, XrayService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = XrayDbFactory::build_repos(pool);
/// let core = AppCore::new(repos);
/// core.apply_settings().await?;
///
/// let line = core.xray().xray_line(&"Fe".into(), &"Ka1".into(), None).await?;
/// ```
pub struct AppCore {
    xray: XrayService,
    settings: SettingsService,
}

impl AppCore {
    /// Create a new `AppCore` from the repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            settings: SettingsService::new(repos.settings, repos.xray.clone()),
            xray: XrayService::new(repos.xray),
        }
    }

    /// Load persisted settings and apply them to the database.
    pub async fn apply_settings(&self) -> Result<Settings, CoreError> {
        self.settings.apply().await
    }

    /// Access the X-ray service.
    pub const fn xray(&self) -> &XrayService {
        &self.xray
    }

    /// Access the settings service.
    pub const fn settings(&self) -> &SettingsService {
        &self.settings
    }
}
