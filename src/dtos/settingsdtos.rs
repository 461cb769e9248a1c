use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::settingsmodel::{AgencySettings, UserSettings};

/// Agency contact details. Only the email address has a format rule;
/// every other field is free text.
#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct AgencySettingsDto {
    pub name: String,
    pub phone: String,

    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    pub address: String,
    pub hours: String,
}

impl From<AgencySettingsDto> for AgencySettings {
    fn from(dto: AgencySettingsDto) -> Self {
        AgencySettings {
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
            address: dto.address,
            hours: dto.hours,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct UserSettingsDto {
    pub username: String,
    pub password: Option<String>,
}

impl From<UserSettingsDto> for UserSettings {
    fn from(dto: UserSettingsDto) -> Self {
        UserSettings {
            username: dto.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agency_dto() -> AgencySettingsDto {
        let defaults = AgencySettings::default();
        AgencySettingsDto {
            name: defaults.name,
            phone: defaults.phone,
            email: defaults.email,
            address: defaults.address,
            hours: defaults.hours,
        }
    }

    #[test]
    fn default_agency_values_are_valid() {
        assert!(agency_dto().validate().is_ok());
    }

    #[test]
    fn only_email_format_is_checked() {
        let dto = AgencySettingsDto {
            email: "not-an-email".to_string(),
            ..agency_dto()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
        assert!(errors.field_errors().contains_key("email"));

        let dto = AgencySettingsDto {
            name: String::new(),
            phone: "54-311-907 ext 2".to_string(),
            address: String::new(),
            hours: String::new(),
            ..agency_dto()
        };
        assert!(dto.validate().is_ok());
    }
}
