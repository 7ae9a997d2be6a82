//! Business-rule price adjustments.
//!
//! Pure functions layered on top of the model's base prediction - no I/O.
//! The chain is fixed: weekend premium, superhost premium, demand
//! multiplier, minimum-price floor, then rounding to two decimal places.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::requests::{DayType, DemandLevel};

/// Premium applied to weekend nights.
pub const WEEKEND_MULTIPLIER: Decimal = dec!(1.10);

/// Premium applied to superhost listings.
pub const SUPERHOST_MULTIPLIER: Decimal = dec!(1.05);

/// Multiplier for high-demand periods.
pub const HIGH_DEMAND_MULTIPLIER: Decimal = dec!(1.15);

/// Discount for low-demand periods.
pub const LOW_DEMAND_MULTIPLIER: Decimal = dec!(0.95);

/// No nightly price is ever recommended below this (₹).
pub const MIN_NIGHTLY_PRICE: Decimal = dec!(1000);

/// Round to specified decimal places using banker's rounding
/// (ROUND_HALF_EVEN), matching the rounding the model's training pipeline
/// used for its price targets.
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// One multiplicative rule that fired for a quote.
#[derive(Debug, Clone)]
pub struct AppliedRule {
    pub label: &'static str,
    pub multiplier: Decimal,
}

/// Result of running the adjustment chain.
#[derive(Debug, Clone)]
pub struct AdjustedPrice {
    /// Final price, rounded to two decimal places.
    pub price: Decimal,
    /// The multiplicative rules that fired, in application order.
    pub applied: Vec<AppliedRule>,
    /// Whether the minimum-price floor clamped the result.
    pub floor_applied: bool,
}

/// Apply the fixed adjustment chain to a base nightly price.
///
/// Every rule except the floor is multiplicative, and the order never
/// changes: weekend, superhost, demand, floor. The floor is a max-clamp, so
/// the output is always at least [`MIN_NIGHTLY_PRICE`] even for a zero or
/// negative base price.
pub fn apply_adjustments(
    base_price: Decimal,
    day_type: DayType,
    superhost: bool,
    demand: DemandLevel,
) -> AdjustedPrice {
    let mut price = base_price;
    let mut applied = Vec::new();

    if day_type == DayType::Weekend {
        price *= WEEKEND_MULTIPLIER;
        applied.push(AppliedRule {
            label: "Weekend premium",
            multiplier: WEEKEND_MULTIPLIER,
        });
    }

    if superhost {
        price *= SUPERHOST_MULTIPLIER;
        applied.push(AppliedRule {
            label: "Superhost premium",
            multiplier: SUPERHOST_MULTIPLIER,
        });
    }

    match demand {
        DemandLevel::High => {
            price *= HIGH_DEMAND_MULTIPLIER;
            applied.push(AppliedRule {
                label: "High demand",
                multiplier: HIGH_DEMAND_MULTIPLIER,
            });
        }
        DemandLevel::Low => {
            price *= LOW_DEMAND_MULTIPLIER;
            applied.push(AppliedRule {
                label: "Low demand",
                multiplier: LOW_DEMAND_MULTIPLIER,
            });
        }
        DemandLevel::Medium => {}
    }

    let floor_applied = price < MIN_NIGHTLY_PRICE;
    if floor_applied {
        price = MIN_NIGHTLY_PRICE;
    }

    AdjustedPrice {
        price: round_money(price, 2),
        applied,
        floor_applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjust(base: Decimal, day: DayType, superhost: bool, demand: DemandLevel) -> Decimal {
        apply_adjustments(base, day, superhost, demand).price
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(4.5), 0), dec!(4));
    }

    #[test]
    fn test_round_money_decimal_places() {
        assert_eq!(round_money(dec!(2310.005), 2), dec!(2310.00));
        assert_eq!(round_money(dec!(2310.015), 2), dec!(2310.02));
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
    }

    // ==================== worked examples ====================

    #[test]
    fn test_weekend_superhost_medium_demand() {
        // 2000 * 1.10 * 1.05 = 2310.00
        assert_eq!(
            adjust(dec!(2000), DayType::Weekend, true, DemandLevel::Medium),
            dec!(2310.00)
        );
    }

    #[test]
    fn test_low_demand_floored() {
        // 500 * 0.95 = 475, below the floor
        assert_eq!(
            adjust(dec!(500), DayType::Weekday, false, DemandLevel::Low),
            dec!(1000.00)
        );
    }

    #[test]
    fn test_high_demand_still_floored() {
        // 800 * 1.15 = 920, below the floor
        assert_eq!(
            adjust(dec!(800), DayType::Weekday, false, DemandLevel::High),
            dec!(1000.00)
        );
    }

    #[test]
    fn test_all_premiums_compound() {
        // 2000 * 1.10 * 1.05 * 1.15 = 2656.50
        assert_eq!(
            adjust(dec!(2000), DayType::Weekend, true, DemandLevel::High),
            dec!(2656.50)
        );
    }

    #[test]
    fn test_low_demand_above_floor() {
        assert_eq!(
            adjust(dec!(2000), DayType::Weekday, false, DemandLevel::Low),
            dec!(1900.00)
        );
    }

    #[test]
    fn test_no_rules_fire_on_baseline_inputs() {
        let result = apply_adjustments(dec!(1500), DayType::Weekday, false, DemandLevel::Medium);
        assert_eq!(result.price, dec!(1500.00));
        assert!(result.applied.is_empty());
        assert!(!result.floor_applied);
    }

    // ==================== invariants ====================

    #[test]
    fn test_floor_holds_for_zero_and_negative_base() {
        assert_eq!(
            adjust(dec!(0), DayType::Weekday, false, DemandLevel::Medium),
            dec!(1000)
        );
        assert_eq!(
            adjust(dec!(-250), DayType::Weekend, true, DemandLevel::High),
            dec!(1000)
        );
    }

    #[test]
    fn test_floor_holds_across_all_input_combinations() {
        for base in [dec!(-100), dec!(0), dec!(1), dec!(999.99), dec!(5000)] {
            for day in [DayType::Weekday, DayType::Weekend] {
                for superhost in [false, true] {
                    for demand in [DemandLevel::Low, DemandLevel::Medium, DemandLevel::High] {
                        assert!(adjust(base, day, superhost, demand) >= MIN_NIGHTLY_PRICE);
                    }
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_day_type() {
        for base in [dec!(500), dec!(1200), dec!(3000)] {
            let weekday = adjust(base, DayType::Weekday, false, DemandLevel::Medium);
            let weekend = adjust(base, DayType::Weekend, false, DemandLevel::Medium);
            assert!(weekend >= weekday);
        }
    }

    #[test]
    fn test_monotonic_in_superhost() {
        for base in [dec!(500), dec!(1200), dec!(3000)] {
            let regular = adjust(base, DayType::Weekday, false, DemandLevel::Medium);
            let superhost = adjust(base, DayType::Weekday, true, DemandLevel::Medium);
            assert!(superhost >= regular);
        }
    }

    #[test]
    fn test_monotonic_in_demand() {
        for base in [dec!(500), dec!(1200), dec!(3000)] {
            let low = adjust(base, DayType::Weekday, false, DemandLevel::Low);
            let medium = adjust(base, DayType::Weekday, false, DemandLevel::Medium);
            let high = adjust(base, DayType::Weekday, false, DemandLevel::High);
            assert!(low <= medium);
            assert!(medium <= high);
        }
    }

    #[test]
    fn test_deterministic() {
        let first = adjust(dec!(1837.42), DayType::Weekend, true, DemandLevel::Low);
        let second = adjust(dec!(1837.42), DayType::Weekend, true, DemandLevel::Low);
        assert_eq!(first, second);
    }

    #[test]
    fn test_applied_rules_in_chain_order() {
        let result = apply_adjustments(dec!(2000), DayType::Weekend, true, DemandLevel::Low);
        let labels: Vec<&str> = result.applied.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Weekend premium", "Superhost premium", "Low demand"]);
    }
}
