pub mod calculator;
pub mod config;
pub mod report;
pub mod store;
pub mod track;
