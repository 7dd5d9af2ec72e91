use rust_decimal::Decimal;

/// Actual vs. planned hours as of a reference instant.
/// Every figure carries exactly two fraction digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntermediateReport {
    pub daily_actual_hours: Decimal,
    pub weekly_actual_hours: Decimal,
    pub weekly_overtime: Decimal,
    pub monthly_planned_hours: Decimal,
    pub monthly_actual_hours: Decimal,
    pub monthly_overtime: Decimal,
}
