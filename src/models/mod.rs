pub mod propertymodel;
pub mod settingsmodel;
