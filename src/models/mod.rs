pub mod daily_recording;
pub mod monthly_recording;
pub mod period;
pub mod report;
pub mod time_record;

pub use daily_recording::DailyRecording;
pub use monthly_recording::MonthlyRecording;
pub use period::{MonthDay, YearMonth};
pub use report::IntermediateReport;
pub use time_record::TimeRecord;
