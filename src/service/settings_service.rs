use serde::Serialize;
use tokio::sync::RwLock;

use crate::{
    config::SettingsMode,
    dtos::settingsdtos::{AgencySettingsDto, UserSettingsDto},
    models::settingsmodel::{AgencySettings, UserSettings},
};

pub const SAVED_MESSAGE: &str = "Settings saved successfully";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SettingsView {
    pub agency: AgencySettings,
    pub user: UserSettings,
}

/// Holds the settings page values. Nothing here is ever written to disk;
/// in `Retain` mode submissions replace the in-memory values.
#[derive(Debug)]
pub struct SettingsService {
    mode: SettingsMode,
    agency: RwLock<AgencySettings>,
    user: RwLock<UserSettings>,
}

impl SettingsService {
    pub fn new(mode: SettingsMode) -> Self {
        Self {
            mode,
            agency: RwLock::new(AgencySettings::default()),
            user: RwLock::new(UserSettings::default()),
        }
    }

    pub async fn current(&self) -> SettingsView {
        SettingsView {
            agency: self.agency.read().await.clone(),
            user: self.user.read().await.clone(),
        }
    }

    /// Expects a validated body. Always succeeds.
    pub async fn save_agency(&self, body: AgencySettingsDto) -> &'static str {
        if self.mode == SettingsMode::Retain {
            *self.agency.write().await = body.into();
        }
        tracing::info!("Settings saved (agency, mode={:?})", self.mode);
        SAVED_MESSAGE
    }

    /// The password is accepted and dropped.
    pub async fn save_user(&self, body: UserSettingsDto) -> &'static str {
        let password_changed = body.password.is_some();
        if self.mode == SettingsMode::Retain {
            *self.user.write().await = body.into();
        }
        tracing::info!(
            "Settings saved (user, mode={:?}, password_changed={})",
            self.mode,
            password_changed
        );
        SAVED_MESSAGE
    }
}
