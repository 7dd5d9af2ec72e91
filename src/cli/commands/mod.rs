pub mod config;
pub mod list;
pub mod report;
pub mod track;
