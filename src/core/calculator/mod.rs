pub mod hours;
pub mod minutes;
