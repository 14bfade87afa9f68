//! Fixed-width record layouts.
//!
//! Every line starts with a 3-character type code followed by the fields
//! below, each given as `(pos, len)` in characters from the start of the line.
//!
//! ```text
//! Header     100 | order no(10) | items(5) | cost(10) | date(19) | name(50) | phone(30) | email(50) | P | S | C
//! Address    200 | line1(50) | line2(50) | city(50) | state(2) | zip(10)
//! Line item  300 | line no(2) | qty(5) | cost each(10) | total(10) | description(50)
//! ```

/// A field position within a record: `(pos, len)`.
pub type Field = (usize, usize);

pub const TYPE_CODE: Field = (0, 3);

pub const HEADER_CODE: &str = "100";
pub const ADDRESS_CODE: &str = "200";
pub const LINE_ITEM_CODE: &str = "300";

/// Header line ("100") fields.
pub mod header {
    use super::Field;

    pub const ORDER_NUMBER: Field = (3, 10);
    pub const TOTAL_ITEMS: Field = (13, 5);
    pub const TOTAL_COST: Field = (18, 10);
    pub const ORDER_DATE: Field = (28, 19);
    pub const CUSTOMER_NAME: Field = (47, 50);
    pub const CUSTOMER_PHONE: Field = (97, 30);
    pub const CUSTOMER_EMAIL: Field = (127, 50);
    pub const PAID: Field = (177, 1);
    pub const SHIPPED: Field = (178, 1);
    pub const COMPLETED: Field = (179, 1);

    pub const MIN_LEN: usize = 180;
}

/// Address line ("200") fields.
pub mod address {
    use super::Field;

    pub const LINE1: Field = (3, 50);
    pub const LINE2: Field = (53, 50);
    pub const CITY: Field = (103, 50);
    pub const STATE: Field = (153, 2);
    pub const ZIP: Field = (155, 10);

    pub const MIN_LEN: usize = 165;
}

/// Line item line ("300") fields.
pub mod line_item {
    use super::Field;

    pub const LINE_NUMBER: Field = (3, 2);
    pub const QUANTITY: Field = (5, 5);
    pub const COST_EACH: Field = (10, 10);
    pub const TOTAL_COST: Field = (20, 10);
    pub const DESCRIPTION: Field = (30, 50);

    pub const MIN_LEN: usize = 80;
}
