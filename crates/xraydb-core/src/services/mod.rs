//! Core services.

mod app_core;
mod settings_service;
mod xray_service;

pub use app_core::AppCore;
pub use settings_service::SettingsService;
pub use xray_service::{ElementSummary, TransitionSummary, XrayService};
