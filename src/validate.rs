//! Business rules for assembled orders.
//!
//! `validate` is pure: it inspects an order and returns every rule it
//! breaks. Rules never short-circuit one another, except that address
//! sub-checks need an address and line item checks need at least one item.

use crate::error::RuleViolation;
use crate::model::{Address, LineItem, Order};
use rust_decimal::Decimal;

/// Absolute tolerance for money comparisons (0.01).
pub const TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// True when `a` and `b` differ by no more than [`TOLERANCE`].
pub fn within_tolerance(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= TOLERANCE
}

/// Check an order against every business rule.
pub fn validate(order: &Order) -> Vec<RuleViolation> {
    let mut violations = Vec::new();

    check_order_number(&order.order_number, &mut violations);

    // Absent totals already carry a decode error; no range check on them.
    if let Some(total_items) = order.total_items
        && total_items < 1
    {
        violations.push(RuleViolation::TotalItemsTooLow(total_items));
    }
    if let Some(total_cost) = order.total_cost
        && total_cost < Decimal::ZERO
    {
        violations.push(RuleViolation::NegativeTotalCost(total_cost));
    }

    if order.customer_name.is_empty() {
        violations.push(RuleViolation::MissingCustomerName);
    }

    match &order.address {
        Some(address) => check_address(address, &mut violations),
        None => violations.push(RuleViolation::MissingAddress),
    }

    if order.line_items.is_empty() {
        violations.push(RuleViolation::NoLineItems);
        return violations;
    }

    for item in &order.line_items {
        check_line_item(item, &mut violations);
    }

    if let Some(declared) = order.total_items {
        let actual = order.quantity_sum();
        if actual != declared {
            violations.push(RuleViolation::TotalItemsMismatch { actual, declared });
        }
    }
    if let Some(declared) = order.total_cost {
        let actual = order.cost_sum();
        if !within_tolerance(actual, declared) {
            violations.push(RuleViolation::TotalCostMismatch { actual, declared });
        }
    }

    violations
}

/// Run validation and append the violations to the order's errors. The
/// order is returned whether or not it is valid.
pub fn finalize(mut order: Order) -> Order {
    let violations = validate(&order);
    order.errors.extend(violations.into_iter().map(Into::into));
    order
}

fn check_order_number(order_number: &str, violations: &mut Vec<RuleViolation>) {
    if order_number.is_empty() {
        violations.push(RuleViolation::MissingOrderNumber);
    } else if !order_number.bytes().all(|b| b.is_ascii_digit()) {
        violations.push(RuleViolation::NonNumericOrderNumber(
            order_number.to_string(),
        ));
    }
}

fn check_address(address: &Address, violations: &mut Vec<RuleViolation>) {
    if address.line1.is_empty() {
        violations.push(RuleViolation::MissingAddressLine1);
    }
    if address.city.is_empty() {
        violations.push(RuleViolation::MissingCity);
    }
    let state_ok = address.state.chars().count() == 2
        && !address.state.chars().any(char::is_whitespace);
    if !state_ok {
        violations.push(RuleViolation::InvalidState(address.state.clone()));
    }
    if address.zip.is_empty() {
        violations.push(RuleViolation::MissingZip);
    }
}

fn check_line_item(item: &LineItem, violations: &mut Vec<RuleViolation>) {
    let line = item.line_number;
    if line <= 0 {
        violations.push(RuleViolation::InvalidLineNumber { line });
    }
    if item.quantity <= 0 {
        violations.push(RuleViolation::NonPositiveQuantity {
            line,
            quantity: item.quantity,
        });
    }
    if item.cost_each < Decimal::ZERO {
        violations.push(RuleViolation::NegativeCostEach {
            line,
            cost_each: item.cost_each,
        });
    }
    if item.total_cost < Decimal::ZERO {
        violations.push(RuleViolation::NegativeItemTotal {
            line,
            total_cost: item.total_cost,
        });
    }
    if item.description.is_empty() {
        violations.push(RuleViolation::MissingDescription { line });
    }
    let expected = item.expected_total();
    if !within_tolerance(item.total_cost, expected) {
        violations.push(RuleViolation::ItemTotalMismatch {
            line,
            total_cost: item.total_cost,
            expected,
        });
    }
}
