//! ANSI color helper utilities for terminal output.

use rust_decimal::Decimal;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Overtime color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_overtime(value: Decimal) -> &'static str {
    if value > Decimal::ZERO {
        GREEN
    } else if value < Decimal::ZERO {
        RED
    } else {
        RESET
    }
}

pub fn colorize_overtime(value: Decimal) -> String {
    format!("{}{}{}", color_for_overtime(value), value, RESET)
}

/// Greys out placeholders such as a missing stop time.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overtime_sign_picks_color() {
        assert_eq!(color_for_overtime(Decimal::new(150, 2)), GREEN);
        assert_eq!(color_for_overtime(Decimal::new(-2530, 2)), RED);
        assert_eq!(color_for_overtime(Decimal::ZERO), RESET);
        assert!(colorize_overtime(Decimal::new(-2530, 2)).contains("-25.30"));
    }
}
