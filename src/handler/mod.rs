pub mod dashboard;
pub mod form;
pub mod properties;
pub mod settings;
pub mod shell;
