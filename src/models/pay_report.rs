//! Itemized pay breakdown model.
//!
//! Pay reports are always returned as a full breakdown so callers can
//! render an itemized statement, never as a bare total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The itemized result of a pay calculation for one assignment.
///
/// # Example
///
/// ```
/// use camp_staffing::models::PayBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let breakdown = PayBreakdown {
///     monitor_id: Uuid::new_v4(),
///     season_id: Uuid::new_v4(),
///     daily_rate: Decimal::from_str("210.00").unwrap(),
///     days: Decimal::from_str("3.5").unwrap(),
///     base: Decimal::from_str("735.00").unwrap(),
///     allowance: Decimal::from_str("90.00").unwrap(),
///     boarding: Decimal::ZERO,
///     deboarding: Decimal::ZERO,
///     total: Decimal::from_str("825.00").unwrap(),
/// };
/// assert_eq!(breakdown.total, breakdown.base + breakdown.allowance);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The monitor the pay is for.
    pub monitor_id: Uuid,
    /// The season the pay is for.
    pub season_id: Uuid,
    /// The daily rate applied (day-use rate for day-use seasons).
    pub daily_rate: Decimal,
    /// The season's paid-day count.
    pub days: Decimal,
    /// daily_rate × days.
    pub base: Decimal,
    /// Supplemental allowance component.
    pub allowance: Decimal,
    /// Special boarding component.
    pub boarding: Decimal,
    /// Special deboarding component.
    pub deboarding: Decimal,
    /// Sum of all components.
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_breakdown_serialization_uses_string_decimals() {
        let breakdown = PayBreakdown {
            monitor_id: Uuid::nil(),
            season_id: Uuid::nil(),
            daily_rate: dec("210.00"),
            days: dec("3.5"),
            base: dec("735.00"),
            allowance: dec("90.00"),
            boarding: Decimal::ZERO,
            deboarding: Decimal::ZERO,
            total: dec("825.00"),
        };

        let json = serde_json::to_string(&breakdown).unwrap();
        assert!(json.contains("\"daily_rate\":\"210.00\""));
        assert!(json.contains("\"days\":\"3.5\""));
        assert!(json.contains("\"total\":\"825.00\""));
    }

    #[test]
    fn test_breakdown_deserialization() {
        let json = r#"{
            "monitor_id": "00000000-0000-0000-0000-000000000000",
            "season_id": "00000000-0000-0000-0000-000000000000",
            "daily_rate": "180.00",
            "days": "1",
            "base": "180.00",
            "allowance": "0",
            "boarding": "50.00",
            "deboarding": "0",
            "total": "230.00"
        }"#;

        let breakdown: PayBreakdown = serde_json::from_str(json).unwrap();
        assert_eq!(breakdown.daily_rate, dec("180.00"));
        assert_eq!(breakdown.boarding, dec("50.00"));
        assert_eq!(breakdown.total, dec("230.00"));
    }
}
