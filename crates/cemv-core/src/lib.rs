pub mod config;
pub mod logging;

pub mod manifest;
pub mod report;
pub mod verify;
