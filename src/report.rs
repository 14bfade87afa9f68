//! Human-readable batch report.

use crate::batch::{Batch, BatchSummary};
use crate::decode::DATE_FORMAT;
use crate::model::Order;
use std::fmt::Write;

/// What to include in a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Only the final counts.
    pub summary_only: bool,
    /// Skip detail for valid orders.
    pub invalid_only: bool,
}

/// Render the batch as text, ending with the success/failure counts.
pub fn render_report(batch: &Batch, options: ReportOptions) -> String {
    let mut out = String::new();

    if !options.summary_only {
        for warning in &batch.warnings {
            let _ = writeln!(out, "Warning: {warning}");
        }
        if !batch.warnings.is_empty() {
            out.push('\n');
        }
        for order in &batch.orders {
            if options.invalid_only && order.is_valid() {
                continue;
            }
            render_order(&mut out, order);
            out.push('\n');
        }
    }

    out.push_str(&render_summary(batch.summary()));
    out.push('\n');
    out
}

pub fn render_summary(summary: BatchSummary) -> String {
    format!(
        "Orders: {} total, {} succeeded, {} failed",
        summary.total, summary.valid, summary.invalid
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn render_order(out: &mut String, order: &Order) {
    let status = if order.is_valid() { "VALID" } else { "INVALID" };
    let _ = writeln!(out, "Order {} [{status}]", order.order_number);
    let _ = writeln!(
        out,
        "  Date:      {}",
        or_dash(order.order_date.map(|d| d.format(DATE_FORMAT)))
    );
    let _ = writeln!(out, "  Customer:  {}", order.customer_name);
    let _ = writeln!(out, "  Phone:     {}", order.customer_phone);
    let _ = writeln!(out, "  Email:     {}", order.customer_email);
    let _ = writeln!(
        out,
        "  Paid: {}  Shipped: {}  Completed: {}",
        yes_no(order.is_paid),
        yes_no(order.is_shipped),
        yes_no(order.is_completed)
    );
    let _ = writeln!(
        out,
        "  Total items: {}  Total cost: {}",
        or_dash(order.total_items),
        or_dash(order.total_cost.map(|c| c.round_dp(2)))
    );

    match &order.address {
        Some(address) => {
            let _ = writeln!(out, "  Address:   {}", address.line1);
            if !address.line2.is_empty() {
                let _ = writeln!(out, "             {}", address.line2);
            }
            let _ = writeln!(
                out,
                "             {}, {} {}",
                address.city, address.state, address.zip
            );
        }
        None => {
            let _ = writeln!(out, "  Address:   (none)");
        }
    }

    if !order.line_items.is_empty() {
        let _ = writeln!(out, "  Line items:");
        for item in &order.line_items {
            let _ = writeln!(
                out,
                "    {:>2}  {:>5} x {:>10} = {:>10}  {}",
                item.line_number,
                item.quantity,
                item.cost_each.round_dp(2),
                item.total_cost.round_dp(2),
                item.description
            );
        }
    }

    if !order.errors.is_empty() {
        let _ = writeln!(out, "  Errors:");
        for error in &order.errors {
            let _ = writeln!(out, "  - {error}");
        }
    }
}
