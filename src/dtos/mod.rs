pub mod propertydtos;
pub mod settingsdtos;
