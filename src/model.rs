//! Order, address and line item types.

use crate::error::OrderError;
use crate::layout::{ADDRESS_CODE, HEADER_CODE, LINE_ITEM_CODE};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// The kind of record a line holds, from its 3-character type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    Header,
    Address,
    LineItem,
}

impl LineType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            HEADER_CODE => Some(Self::Header),
            ADDRESS_CODE => Some(Self::Address),
            LINE_ITEM_CODE => Some(Self::LineItem),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Header => HEADER_CODE,
            Self::Address => ADDRESS_CODE,
            Self::LineItem => LINE_ITEM_CODE,
        }
    }
}

/// Shipping address. An address line too short to decode yields the
/// default (all empty) address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// One decoded "300" line. `line_number` is echoed into messages as-is and
/// need not be unique or sequential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub line_number: i64,
    pub quantity: i64,
    pub cost_each: Decimal,
    pub total_cost: Decimal,
    pub description: String,
}

impl LineItem {
    /// `quantity * cost_each`, the value `total_cost` is checked against.
    pub fn expected_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.cost_each
    }
}

/// A purchase order: one header line plus the address and line item lines
/// that follow it.
///
/// Numeric and date header fields are `None` when the header slice could not
/// be decoded; the matching decode error is in `errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    pub order_number: String,
    pub total_items: Option<i64>,
    pub total_cost: Option<Decimal>,
    pub order_date: Option<NaiveDateTime>,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub is_paid: bool,
    pub is_shipped: bool,
    pub is_completed: bool,
    /// Last address line seen for this order wins.
    pub address: Option<Address>,
    /// In file order.
    pub line_items: Vec<LineItem>,
    /// Decode errors first, then rule violations once validated.
    pub errors: Vec<OrderError>,
}

impl Order {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Sum of line item quantities.
    pub fn quantity_sum(&self) -> i64 {
        self.line_items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of line item totals.
    pub fn cost_sum(&self) -> Decimal {
        self.line_items.iter().map(|item| item.total_cost).sum()
    }

    /// Error messages in the order they were recorded.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}
