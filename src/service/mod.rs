pub mod dashboard_service;
pub mod error;
pub mod property_form;
pub mod settings_service;
pub mod shell;
