//! Whole-file processing: text in, validated orders out.

use crate::assembler::{LineWarning, OrderAssembler};
use crate::error::BatchError;
use crate::model::Order;
use crate::record::Record;
use std::fs;
use std::path::Path;
use tracing::info;

/// Result of processing one order file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    /// One per header line, in file order; invalid orders included.
    pub orders: Vec<Order>,
    /// Lines skipped for having an unknown type code.
    pub warnings: Vec<LineWarning>,
}

/// Order counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl Batch {
    pub fn summary(&self) -> BatchSummary {
        let valid = self.orders.iter().filter(|o| o.is_valid()).count();
        BatchSummary {
            total: self.orders.len(),
            valid,
            invalid: self.orders.len() - valid,
        }
    }
}

/// Parse and validate every order in `text`.
pub fn parse_orders(text: &str) -> Batch {
    let mut assembler = OrderAssembler::new();
    for line in text.split('\n') {
        assembler.process(&Record::from_line(line));
    }
    let (orders, warnings) = assembler.flush();
    let batch = Batch { orders, warnings };

    let summary = batch.summary();
    info!(
        orders = summary.total,
        valid = summary.valid,
        invalid = summary.invalid,
        skipped = batch.warnings.len(),
        "batch processed"
    );
    batch
}

/// Read an order file and process it.
pub fn load_batch(path: impl AsRef<Path>) -> Result<Batch, BatchError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_orders(&text))
}
