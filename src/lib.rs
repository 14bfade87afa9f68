//! # purchase-orders-rs
//!
//! Parses fixed-width purchase order files and validates each order.
//!
//! ## Overview
//!
//! An order file holds three kinds of fixed-width lines, identified by a
//! 3-character type code:
//! - **`100` header**: order number, declared totals, date, customer, flags
//! - **`200` address**: shipping address for the current order
//! - **`300` line item**: one line of the current order
//!
//! Each header starts a new order; the address and line item lines that
//! follow belong to it. When the next header (or end of input) arrives, the
//! order is validated and added to the batch. Malformed fields and broken
//! business rules are recorded on the order rather than aborting the run.
//!
//! ## Example
//!
//! ```
//! use purchase_orders_rs::parse_orders;
//!
//! let batch = parse_orders("100 too short\n\n");
//!
//! assert_eq!(batch.orders.len(), 1);
//! assert!(!batch.orders[0].is_valid());
//! ```

pub mod assembler;
pub mod batch;
pub mod decode;
pub mod error;
pub mod layout;
pub mod model;
pub mod record;
pub mod report;
pub mod validate;

pub use assembler::{LineWarning, OrderAssembler};
pub use batch::{Batch, BatchSummary, load_batch, parse_orders};
pub use decode::{decode_address, decode_header, decode_line_item};
pub use error::{BatchError, DecodeError, OrderError, RuleViolation};
pub use model::{Address, LineItem, LineType, Order};
pub use record::Record;
pub use report::{ReportOptions, render_report, render_summary};
pub use validate::{finalize, validate};
