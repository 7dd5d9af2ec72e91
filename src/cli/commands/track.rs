use log::info;

use crate::cli::context::AppContext;
use crate::core::calculator::hours::minutes_to_hours;
use crate::core::track::TrackLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::{format_time, truncate_to_minute};

/// Handle the `track` command: punch the current time.
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let daily = TrackLogic::apply(&ctx.store(), ctx.now)?;
    let time = truncate_to_minute(ctx.now.time());
    info!("Punched {} on {}", format_time(time), ctx.now.date());

    let state = if daily.is_active() { "active" } else { "off" };
    success(format!(
        "Time {} was recorded (time tracking is {}, {} daily periods recognized)",
        format_time(time),
        state,
        daily.records.len()
    ));
    println!(
        "The today's working time is {} hours.",
        minutes_to_hours(daily.daily_duration())
    );

    Ok(())
}
