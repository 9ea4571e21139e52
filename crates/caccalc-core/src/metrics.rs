//! Metric functions.
//!
//! All functions are total: raw arguments go through [`sanitize`] first and
//! every denominator is checked before dividing. A metric that cannot be
//! computed is `None`.

use crate::constants::PERCENT;
use crate::inputs::sanitize;

/// Sum of the acquisition spend components.
#[must_use]
pub fn total_spend(paid: f64, other: f64, salary: f64, overhead: f64) -> f64 {
    sanitize(paid) + sanitize(other) + sanitize(salary) + sanitize(overhead)
}

/// Total spend divided by new customers.
#[must_use]
pub fn blended_cac(total_spend: f64, new_customers: f64) -> Option<f64> {
    per_customer(total_spend, new_customers)
}

/// Paid-channel spend divided by the customers it is attributed to.
#[must_use]
pub fn paid_cac(paid_spend: f64, denominator_customers: f64) -> Option<f64> {
    per_customer(paid_spend, denominator_customers)
}

fn per_customer(spend: f64, customers: f64) -> Option<f64> {
    let customers = sanitize(customers);
    if customers > 0.0 {
        finite(sanitize(spend) / customers)
    } else {
        None
    }
}

/// Quotients of huge spend over tiny denominators can overflow.
fn finite(value: f64) -> Option<f64> {
    Some(value).filter(|v| v.is_finite())
}

/// LTV divided by blended CAC; both must be positive.
#[must_use]
pub fn ltv_to_cac_ratio(ltv: f64, blended_cac: f64) -> Option<f64> {
    let ltv = sanitize(ltv);
    let cac = sanitize(blended_cac);
    if ltv > 0.0 && cac > 0.0 {
        finite(ltv / cac)
    } else {
        None
    }
}

/// Gross profit earned on one order.
#[must_use]
pub fn gross_profit_per_order(average_order_value: f64, gross_margin_percent: f64) -> f64 {
    sanitize(average_order_value) * (sanitize(gross_margin_percent) / PERCENT)
}

/// Orders needed for gross profit to recover one customer's CAC.
#[must_use]
pub fn orders_to_break_even(
    blended_cac: f64,
    average_order_value: f64,
    gross_margin_percent: f64,
) -> Option<f64> {
    let profit = gross_profit_per_order(average_order_value, gross_margin_percent);
    let cac = sanitize(blended_cac);
    if profit > 0.0 && cac > 0.0 {
        finite(cac / profit)
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn total_spend_sums_components() {
        assert_eq!(total_spend(12_000.0, 8_000.0, 0.0, 0.0), 20_000.0);
        assert_eq!(total_spend(100.0, 200.0, 300.0, 400.0), 1_000.0);
    }

    #[test]
    fn total_spend_ignores_invalid_components() {
        assert_eq!(total_spend(f64::NAN, 8_000.0, -5.0, f64::INFINITY), 8_000.0);
    }

    #[test]
    fn blended_cac_reference_case() {
        assert_eq!(blended_cac(20_000.0, 250.0), Some(80.0));
    }

    #[test]
    fn blended_cac_zero_customers() {
        assert_eq!(blended_cac(20_000.0, 0.0), None);
        assert_eq!(blended_cac(20_000.0, -10.0), None);
        assert_eq!(blended_cac(20_000.0, f64::NAN), None);
    }

    #[test]
    fn blended_cac_zero_spend() {
        assert_eq!(blended_cac(0.0, 250.0), Some(0.0));
    }

    #[test]
    fn paid_cac_reference_case() {
        assert_eq!(paid_cac(12_000.0, 250.0), Some(48.0));
        assert_eq!(paid_cac(12_000.0, 0.0), None);
    }

    #[test]
    fn ltv_ratio_healthy_case() {
        assert_eq!(ltv_to_cac_ratio(420.0, 80.0), Some(5.25));
    }

    #[test]
    fn ltv_ratio_danger_case() {
        assert_eq!(ltv_to_cac_ratio(150.0, 80.0), Some(1.875));
    }

    #[test]
    fn ltv_ratio_requires_positive_operands() {
        assert_eq!(ltv_to_cac_ratio(0.0, 80.0), None);
        assert_eq!(ltv_to_cac_ratio(420.0, 0.0), None);
        assert_eq!(ltv_to_cac_ratio(-420.0, 80.0), None);
    }

    #[test]
    fn break_even_reference_case() {
        assert!(approx(gross_profit_per_order(100.0, 40.0), 40.0));
        let orders = orders_to_break_even(80.0, 100.0, 40.0).unwrap();
        assert!(approx(orders, 2.0));
    }

    #[test]
    fn break_even_requires_margin_and_cac() {
        assert_eq!(orders_to_break_even(80.0, 100.0, 0.0), None);
        assert_eq!(orders_to_break_even(80.0, 0.0, 40.0), None);
        assert_eq!(orders_to_break_even(0.0, 100.0, 40.0), None);
    }

    #[test]
    fn overflowing_quotient_has_no_value() {
        assert_eq!(blended_cac(f64::MAX, 1e-300), None);
    }

    #[test]
    fn fractional_break_even() {
        let orders = orders_to_break_even(50.0, 60.0, 25.0).unwrap();
        assert!(approx(orders, 50.0 / 15.0));
    }
}
