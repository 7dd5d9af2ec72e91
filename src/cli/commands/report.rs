use crate::cli::context::AppContext;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::models::{DailyRecording, IntermediateReport, MonthDay, MonthlyRecording, YearMonth};
use crate::ui::messages::{info, section, warning};
use crate::utils::colors::colorize_overtime;

/// Show the intermediate report for the current month (no subcommand).
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let cfg = ctx.config()?;
    let month = YearMonth::from_date(&ctx.now);

    let monthly = match ctx.store().load_if_exists(month)? {
        Some(m) => m,
        None => {
            warning(format!("Nothing recorded for {} yet.", month));
            MonthlyRecording::new(month)
        }
    };

    let active = monthly
        .day(MonthDay::from_date(&ctx.now))
        .is_some_and(DailyRecording::is_active);
    let report = ReportLogic::generate(&cfg, &monthly, ctx.now);

    print_report(&report, active);
    Ok(())
}

fn print_report(report: &IntermediateReport, active: bool) {
    if active {
        info("Time tracking is active and records your working time.");
        println!("  (use \"momo track\" to stop the tracking)");
    } else {
        info("Time tracking is not active.");
        println!("  (use \"momo track\" to start the tracking)");
    }
    println!();

    section("Your current daily working time:");
    println!("    {} hours", report.daily_actual_hours);
    println!();

    section("Recorded working time for this week:");
    println!(
        "    {} hours ({} hours to planned)",
        report.weekly_actual_hours,
        colorize_overtime(report.weekly_overtime)
    );
    println!();

    section("Overview of monthly working time:");
    println!(
        "    {} of {} hours ({} hours to planned)",
        report.monthly_actual_hours,
        report.monthly_planned_hours,
        colorize_overtime(report.monthly_overtime)
    );
}
