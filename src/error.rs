//! Error types for order decoding, validation and batch loading.

use rust_decimal::Decimal;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A field that could not be decoded from its fixed-width slice.
///
/// Decode errors are attached to the order being built; the offending
/// field is left unset and decoding carries on with the next field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Header line too short ({len} characters, need {min})")]
    HeaderTooShort { len: usize, min: usize },

    #[error("Invalid total items: '{raw}'")]
    InvalidTotalItems { raw: String },

    #[error("Invalid total cost: '{raw}'")]
    InvalidTotalCost { raw: String },

    #[error("Invalid order date: '{raw}' (expected MM/dd/yyyy HH:mm:ss)")]
    InvalidOrderDate { raw: String },

    #[error("Invalid {flag} flag: '{raw}' (expected 0 or 1)")]
    InvalidFlag { flag: &'static str, raw: String },

    #[error("Line item line too short ({len} characters, need {min})")]
    LineItemTooShort { len: usize, min: usize },

    #[error("Invalid line number: '{raw}'")]
    InvalidLineNumber { raw: String },

    #[error("Invalid quantity on line item: '{raw}'")]
    InvalidQuantity { raw: String },

    #[error("Invalid cost each on line item: '{raw}'")]
    InvalidCostEach { raw: String },

    #[error("Invalid total cost on line item: '{raw}'")]
    InvalidItemTotal { raw: String },
}

/// A business rule broken by an assembled order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("Order number is missing")]
    MissingOrderNumber,

    #[error("Order number '{0}' must contain only digits")]
    NonNumericOrderNumber(String),

    #[error("Total items must be at least 1 (got {0})")]
    TotalItemsTooLow(i64),

    #[error("Total cost cannot be negative (got {0})")]
    NegativeTotalCost(Decimal),

    #[error("Customer name is missing")]
    MissingCustomerName,

    #[error("Address is missing")]
    MissingAddress,

    #[error("Address line 1 is missing")]
    MissingAddressLine1,

    #[error("City is missing")]
    MissingCity,

    #[error("State '{0}' must be exactly 2 characters")]
    InvalidState(String),

    #[error("Zip code is missing")]
    MissingZip,

    #[error("Order has no line items")]
    NoLineItems,

    #[error("Line {line}: line number must be greater than 0")]
    InvalidLineNumber { line: i64 },

    #[error("Line {line}: quantity must be greater than 0 (got {quantity})")]
    NonPositiveQuantity { line: i64, quantity: i64 },

    #[error("Line {line}: cost each cannot be negative (got {cost_each})")]
    NegativeCostEach { line: i64, cost_each: Decimal },

    #[error("Line {line}: total cost cannot be negative (got {total_cost})")]
    NegativeItemTotal { line: i64, total_cost: Decimal },

    #[error("Line {line}: description is missing")]
    MissingDescription { line: i64 },

    #[error(
        "Line {line}: total cost {total_cost} does not match quantity x cost each ({expected})"
    )]
    ItemTotalMismatch {
        line: i64,
        total_cost: Decimal,
        expected: Decimal,
    },

    #[error("Total quantity ({actual}) does not match header total items ({declared})")]
    TotalItemsMismatch { actual: i64, declared: i64 },

    #[error("Sum of line item totals ({actual}) does not match header total cost ({declared})")]
    TotalCostMismatch { actual: Decimal, declared: Decimal },
}

/// Any problem recorded against an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Rule(#[from] RuleViolation),
}

/// Failures that stop a whole batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Error reading order file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading file path from input: {0}")]
    Prompt(#[source] io::Error),
}
