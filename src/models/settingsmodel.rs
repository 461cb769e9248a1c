use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AgencySettings {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub hours: String,
}

impl Default for AgencySettings {
    fn default() -> Self {
        Self {
            name: "Say Allo Immo".to_string(),
            phone: "+216 54 311 907".to_string(),
            email: "info@sayalloimmo.com".to_string(),
            address: "Sahloul 4, Sousse".to_string(),
            hours: "Mon - Fri: 9am - 6pm".to_string(),
        }
    }
}

/// The password is write-only and never kept here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserSettings {
    pub username: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            username: "Admin".to_string(),
        }
    }
}
