pub mod db;
pub mod propertydb;
