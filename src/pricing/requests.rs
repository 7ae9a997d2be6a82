//! Request DTOs for the pricing form.
//!
//! The form only offers closed sets for everything except the guest slider,
//! so deserialization is the validation: an out-of-set value is rejected
//! before any handler code runs.

use serde::Deserialize;

/// Day classification chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

/// Demand level chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

/// Yes/No superhost selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Superhost {
    No,
    Yes,
}

impl Superhost {
    pub fn as_flag(self) -> bool {
        matches!(self, Superhost::Yes)
    }
}

/// The pricing form as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub accommodates: u8,
    pub room_type: String,
    pub neighbourhood: String,
    pub superhost: Superhost,
    pub day_type: DayType,
    pub demand_level: DemandLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superhost_flag() {
        assert!(Superhost::Yes.as_flag());
        assert!(!Superhost::No.as_flag());
    }

    #[test]
    fn test_request_deserialization() {
        let request: QuoteRequest = serde_json::from_value(serde_json::json!({
            "accommodates": 4,
            "room_type": "Private room",
            "neighbourhood": "Koramangala",
            "superhost": "Yes",
            "day_type": "Weekend",
            "demand_level": "High",
        }))
        .unwrap();
        assert_eq!(request.accommodates, 4);
        assert_eq!(request.room_type, "Private room");
        assert_eq!(request.day_type, DayType::Weekend);
        assert_eq!(request.demand_level, DemandLevel::High);
        assert_eq!(request.superhost, Superhost::Yes);
    }

    #[test]
    fn test_request_rejects_unknown_variant() {
        let result = serde_json::from_value::<QuoteRequest>(serde_json::json!({
            "accommodates": 4,
            "room_type": "x",
            "neighbourhood": "y",
            "superhost": "Maybe",
            "day_type": "Weekend",
            "demand_level": "High",
        }));
        assert!(result.is_err());
    }
}
