//! Groups decoded lines into orders.
//!
//! The assembler is fed one record at a time. A header line closes the
//! order in progress (validating it) and opens a new one; address and line
//! item lines attach to the order in progress. `flush` closes the last order.

use crate::decode::{decode_address, decode_header, decode_line_item};
use crate::model::{LineType, Order};
use crate::record::Record;
use crate::validate::finalize;
use tracing::{debug, warn};

/// A line that was skipped because its type code is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWarning {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub type_code: String,
}

impl std::fmt::Display for LineWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Line {}: unknown record type '{}', skipped",
            self.line_number, self.type_code
        )
    }
}

/// Stateful order assembly over a sequence of records.
#[derive(Debug, Default)]
pub struct OrderAssembler {
    current: Option<Order>,
    finished: Vec<Order>,
    warnings: Vec<LineWarning>,
    line_number: usize,
}

impl OrderAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process the next input line.
    pub fn process(&mut self, record: &Record) {
        self.line_number += 1;
        let line_number = self.line_number;

        if record.is_blank() {
            debug!(line_number, "skipping blank line");
            return;
        }
        let Some(code) = record.type_code() else {
            return;
        };

        match LineType::from_code(code) {
            Some(LineType::Header) => {
                self.finish_current();
                self.current = Some(decode_header(record));
            }
            Some(LineType::Address) => match self.current.as_mut() {
                // A repeated address line replaces the earlier one.
                Some(order) => order.address = Some(decode_address(record)),
                None => debug!(line_number, "address line before any header, skipped"),
            },
            Some(LineType::LineItem) => match self.current.as_mut() {
                Some(order) => match decode_line_item(record) {
                    Ok(item) => order.line_items.push(item),
                    Err(e) => {
                        debug!(line_number, error = %e, "line item rejected");
                        order.errors.push(e.into());
                    }
                },
                None => debug!(line_number, "line item before any header, skipped"),
            },
            None => {
                warn!(line_number, type_code = code, "unknown record type, skipped");
                self.warnings.push(LineWarning {
                    line_number,
                    type_code: code.to_string(),
                });
            }
        }
    }

    /// Close the order in progress, if any, and return everything assembled.
    pub fn flush(&mut self) -> (Vec<Order>, Vec<LineWarning>) {
        self.finish_current();
        (
            std::mem::take(&mut self.finished),
            std::mem::take(&mut self.warnings),
        )
    }

    fn finish_current(&mut self) {
        if let Some(order) = self.current.take() {
            let order = finalize(order);
            debug!(
                order_number = %order.order_number,
                valid = order.is_valid(),
                errors = order.errors.len(),
                "order finalized"
            );
            self.finished.push(order);
        }
    }
}
