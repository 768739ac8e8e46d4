pub mod config_tests;
pub mod person_tests;
