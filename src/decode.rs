//! Line decoders for the three record types.
//!
//! Decoding is best effort. A header keeps going after a bad field and
//! records one error per failure; an address line that is too short decodes
//! to an empty address; a line item is either decoded whole or rejected with
//! a single error.

use crate::error::DecodeError;
use crate::layout::{address, header, line_item};
use crate::model::{Address, LineItem, Order};
use crate::record::Record;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::str::FromStr;

/// `MM/dd/yyyy HH:mm:ss`
pub const DATE_FORMAT: &str = "%m/%d/%Y %H:%M:%S";
const DATE_LEN: usize = 19;

/// Decode a "100" line into a new order carrying any decode errors.
///
/// A line shorter than the header layout yields a default order with a
/// single `HeaderTooShort` error.
pub fn decode_header(record: &Record) -> Order {
    let mut order = Order::default();

    let len = record.len();
    if len < header::MIN_LEN {
        order.errors.push(
            DecodeError::HeaderTooShort {
                len,
                min: header::MIN_LEN,
            }
            .into(),
        );
        return order;
    }

    let field = move |(pos, len): (usize, usize)| record.field(pos, len);

    order.order_number = field(header::ORDER_NUMBER).to_string();

    let raw = field(header::TOTAL_ITEMS);
    order.total_items = parse_int(raw);
    if order.total_items.is_none() {
        order.errors.push(
            DecodeError::InvalidTotalItems {
                raw: raw.to_string(),
            }
            .into(),
        );
    }

    let raw = field(header::TOTAL_COST);
    order.total_cost = parse_decimal(raw);
    if order.total_cost.is_none() {
        order.errors.push(
            DecodeError::InvalidTotalCost {
                raw: raw.to_string(),
            }
            .into(),
        );
    }

    let raw = field(header::ORDER_DATE);
    order.order_date = parse_date(raw);
    if order.order_date.is_none() {
        order.errors.push(
            DecodeError::InvalidOrderDate {
                raw: raw.to_string(),
            }
            .into(),
        );
    }

    order.customer_name = field(header::CUSTOMER_NAME).to_string();
    order.customer_phone = field(header::CUSTOMER_PHONE).to_string();
    order.customer_email = field(header::CUSTOMER_EMAIL).to_string();

    let flags = [
        ("paid", header::PAID, &mut order.is_paid),
        ("shipped", header::SHIPPED, &mut order.is_shipped),
        ("completed", header::COMPLETED, &mut order.is_completed),
    ];
    for (flag, position, slot) in flags {
        let raw = field(position);
        match parse_flag(raw) {
            Some(value) => *slot = value,
            None => order.errors.push(
                DecodeError::InvalidFlag {
                    flag,
                    raw: raw.to_string(),
                }
                .into(),
            ),
        }
    }

    order
}

/// Decode a "200" line. Lines shorter than the address layout decode to an
/// empty address without error.
pub fn decode_address(record: &Record) -> Address {
    if record.len() < address::MIN_LEN {
        return Address::default();
    }

    let field = move |(pos, len): (usize, usize)| record.field(pos, len).to_string();
    Address {
        line1: field(address::LINE1),
        line2: field(address::LINE2),
        city: field(address::CITY),
        state: field(address::STATE),
        zip: field(address::ZIP),
    }
}

/// Decode a "300" line. Any malformed numeric field rejects the whole line.
pub fn decode_line_item(record: &Record) -> Result<LineItem, DecodeError> {
    let len = record.len();
    if len < line_item::MIN_LEN {
        return Err(DecodeError::LineItemTooShort {
            len,
            min: line_item::MIN_LEN,
        });
    }

    let field = move |(pos, len): (usize, usize)| record.field(pos, len);

    let raw = field(line_item::LINE_NUMBER);
    let line_number = parse_int(raw).ok_or_else(|| DecodeError::InvalidLineNumber {
        raw: raw.to_string(),
    })?;

    let raw = field(line_item::QUANTITY);
    let quantity = parse_int(raw).ok_or_else(|| DecodeError::InvalidQuantity {
        raw: raw.to_string(),
    })?;

    let raw = field(line_item::COST_EACH);
    let cost_each = parse_decimal(raw).ok_or_else(|| DecodeError::InvalidCostEach {
        raw: raw.to_string(),
    })?;

    let raw = field(line_item::TOTAL_COST);
    let total_cost = parse_decimal(raw).ok_or_else(|| DecodeError::InvalidItemTotal {
        raw: raw.to_string(),
    })?;

    Ok(LineItem {
        line_number,
        quantity,
        cost_each,
        total_cost,
        description: field(line_item::DESCRIPTION).to_string(),
    })
}

/// Split an optional leading sign off a numeric field.
fn split_sign(raw: &str) -> (bool, &str) {
    match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse `[+-]?digits`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let (negative, digits) = split_sign(raw);
    if !all_digits(digits) {
        return None;
    }
    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Parse `[+-]?digits[.digits]` with a period as the decimal separator.
/// Thousands separators, exponents and underscores are rejected.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let (negative, unsigned) = split_sign(raw);
    let valid = match unsigned.split_once('.') {
        Some((whole, frac)) => all_digits(whole) && all_digits(frac),
        None => all_digits(unsigned),
    };
    if !valid {
        return None;
    }
    let value = Decimal::from_str(unsigned).ok()?;
    Some(if negative { -value } else { value })
}

/// Parse an `MM/dd/yyyy HH:mm:ss` timestamp. Every component must be zero
/// padded to its full width.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    if raw.len() != DATE_LEN {
        return None;
    }
    let shape_ok = raw.bytes().enumerate().all(|(i, b)| match i {
        2 | 5 => b == b'/',
        10 => b == b' ',
        13 | 16 => b == b':',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Parse a single-character flag: exactly "0" or "1".
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::OrderError;
    use chrono::{NaiveDate, NaiveDateTime};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    /// Left-justify `value` in a field of `width` characters.
    pub(crate) fn pad(value: &str, width: usize) -> String {
        format!("{value:<width$}")
    }

    pub(crate) struct HeaderLine<'a> {
        pub order_number: &'a str,
        pub total_items: &'a str,
        pub total_cost: &'a str,
        pub date: &'a str,
        pub name: &'a str,
        pub flags: &'a str,
    }

    impl Default for HeaderLine<'_> {
        fn default() -> Self {
            Self {
                order_number: "0000000001",
                total_items: "00002",
                total_cost: "0000030.00",
                date: "01/01/2024 10:00:00",
                name: "Jane Doe",
                flags: "100",
            }
        }
    }

    impl HeaderLine<'_> {
        pub(crate) fn build(&self) -> String {
            format!(
                "100{}{}{}{}{}{}{}{}",
                pad(self.order_number, 10),
                pad(self.total_items, 5),
                pad(self.total_cost, 10),
                pad(self.date, 19),
                pad(self.name, 50),
                pad("555-0100", 30),
                pad("jane@example.com", 50),
                pad(self.flags, 3),
            )
        }
    }

    pub(crate) fn address_line(line1: &str, city: &str, state: &str, zip: &str) -> String {
        format!(
            "200{}{}{}{}{}",
            pad(line1, 50),
            pad("Suite 4", 50),
            pad(city, 50),
            pad(state, 2),
            pad(zip, 10),
        )
    }

    pub(crate) fn item_line(
        line: &str,
        quantity: &str,
        cost_each: &str,
        total: &str,
        description: &str,
    ) -> String {
        format!(
            "300{}{}{}{}{}",
            pad(line, 2),
            pad(quantity, 5),
            pad(cost_each, 10),
            pad(total, 10),
            pad(description, 50),
        )
    }

    fn decode_errors(order: &Order) -> Vec<DecodeError> {
        order
            .errors
            .iter()
            .filter_map(|e| match e {
                OrderError::Decode(d) => Some(d.clone()),
                OrderError::Rule(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_header_builder_is_full_length() {
        assert_eq!(HeaderLine::default().build().len(), header::MIN_LEN);
        assert_eq!(
            address_line("1 Main St", "Springfield", "IL", "62701").len(),
            address::MIN_LEN
        );
        assert_eq!(
            item_line("1", "1", "10.00", "10.00", "Widget").len(),
            line_item::MIN_LEN
        );
    }

    #[test]
    fn test_decode_header_all_fields() {
        let order = decode_header(&Record::from_line(&HeaderLine::default().build()));
        assert!(order.errors.is_empty(), "{:?}", order.errors);
        assert_eq!(order.order_number, "0000000001");
        assert_eq!(order.total_items, Some(2));
        assert_eq!(order.total_cost, Some(dec!(30.00)));
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap();
        assert_eq!(order.order_date, Some(expected));
        assert_eq!(order.customer_name, "Jane Doe");
        assert_eq!(order.customer_phone, "555-0100");
        assert_eq!(order.customer_email, "jane@example.com");
        assert!(order.is_paid);
        assert!(!order.is_shipped);
        assert!(!order.is_completed);
    }

    #[test]
    fn test_decode_header_too_short() {
        let order = decode_header(&Record::from_line("1000000000001"));
        assert_eq!(
            decode_errors(&order),
            vec![DecodeError::HeaderTooShort { len: 13, min: 180 }]
        );
        assert_eq!(order.order_number, "");
        assert_eq!(order.total_items, None);
    }

    #[test]
    fn test_decode_header_continues_after_bad_fields() {
        let line = HeaderLine {
            total_items: "two",
            date: "2024-01-01 10:00:00",
            flags: "1X0",
            ..HeaderLine::default()
        }
        .build();
        let order = decode_header(&Record::from_line(&line));
        assert_eq!(
            decode_errors(&order),
            vec![
                DecodeError::InvalidTotalItems {
                    raw: "two".to_string()
                },
                DecodeError::InvalidOrderDate {
                    raw: "2024-01-01 10:00:00".to_string()
                },
                DecodeError::InvalidFlag {
                    flag: "shipped",
                    raw: "X".to_string()
                },
            ]
        );
        // Fields after the failures still decode.
        assert_eq!(order.total_cost, Some(dec!(30.00)));
        assert_eq!(order.customer_name, "Jane Doe");
        assert!(order.is_paid);
        assert!(!order.is_shipped);
    }

    #[test]
    fn test_decode_address() {
        let line = address_line("1 Main St", "Springfield", "IL", "62701");
        let addr = decode_address(&Record::from_line(&line));
        assert_eq!(addr.line1, "1 Main St");
        assert_eq!(addr.line2, "Suite 4");
        assert_eq!(addr.city, "Springfield");
        assert_eq!(addr.state, "IL");
        assert_eq!(addr.zip, "62701");
    }

    #[test]
    fn test_decode_address_short_is_empty() {
        let addr = decode_address(&Record::from_line("200 1 Main St"));
        assert_eq!(addr, Address::default());
    }

    #[test]
    fn test_decode_line_item() {
        let line = item_line("1", "2", "15.00", "30.00", "Blue widget");
        let item = decode_line_item(&Record::from_line(&line)).unwrap();
        assert_eq!(item.line_number, 1);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.cost_each, dec!(15.00));
        assert_eq!(item.total_cost, dec!(30.00));
        assert_eq!(item.description, "Blue widget");
    }

    #[test]
    fn test_decode_line_item_too_short() {
        let err = decode_line_item(&Record::from_line("300 1    2")).unwrap_err();
        assert_eq!(err, DecodeError::LineItemTooShort { len: 10, min: 80 });
    }

    #[test]
    fn test_decode_line_item_rejects_bad_quantity() {
        let line = item_line("1", "2x", "15.00", "30.00", "Blue widget");
        let err = decode_line_item(&Record::from_line(&line)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidQuantity {
                raw: "2x".to_string()
            }
        );
    }

    #[test]
    fn test_decode_line_item_cost_error_includes_raw() {
        let line = item_line("1", "2", "1,500.00", "30.00", "Blue widget");
        let err = decode_line_item(&Record::from_line(&line)).unwrap_err();
        assert!(err.to_string().contains("1,500.00"));
    }

    #[test]
    fn test_decode_line_item_empty_description_is_not_rejected() {
        let line = item_line("1", "2", "15.00", "30.00", "");
        let item = decode_line_item(&Record::from_line(&line)).unwrap();
        assert_eq!(item.description, "");
    }

    #[rstest]
    #[case("42", Some(42))]
    #[case("00007", Some(7))]
    #[case("-3", Some(-3))]
    #[case("+3", Some(3))]
    #[case("", None)]
    #[case("1.0", None)]
    #[case("1 2", None)]
    #[case("-", None)]
    fn test_parse_int(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_int(raw), expected);
    }

    #[rstest]
    #[case("30.00", Some(dec!(30.00)))]
    #[case("0000030.00", Some(dec!(30.00)))]
    #[case("-5.25", Some(dec!(-5.25)))]
    #[case("12", Some(dec!(12)))]
    #[case("1,000.00", None)]
    #[case("1e3", None)]
    #[case("1_000", None)]
    #[case(".5", None)]
    #[case("5.", None)]
    #[case("", None)]
    fn test_parse_decimal(#[case] raw: &str, #[case] expected: Option<Decimal>) {
        assert_eq!(parse_decimal(raw), expected);
    }

    #[rstest]
    #[case("12/31/2023 23:59:59", true)]
    #[case("1/31/2023 23:59:59", false)]
    #[case("13/01/2023 00:00:00", false)]
    #[case("02/30/2023 00:00:00", false)]
    #[case("2023-12-31 23:59:59", false)]
    #[case("", false)]
    fn test_parse_date(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(parse_date(raw).is_some(), ok);
    }

    #[test]
    fn test_parse_date_value() {
        let parsed: NaiveDateTime = parse_date("03/15/2024 08:30:05").unwrap();
        assert_eq!(parsed.format(DATE_FORMAT).to_string(), "03/15/2024 08:30:05");
    }

    #[rstest]
    #[case("0", Some(false))]
    #[case("1", Some(true))]
    #[case("", None)]
    #[case("Y", None)]
    #[case("2", None)]
    fn test_parse_flag(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_flag(raw), expected);
    }
}
