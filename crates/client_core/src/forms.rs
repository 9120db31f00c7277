//! Editable item/quantity rows of the bon and prescription forms.
//!
//! Rows keep exactly what the user typed. Parsing happens only when the form
//! is collected for submission, and rows that do not yield a non-zero item id
//! and a non-zero quantity are silently dropped.

use shared::domain::LineItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRow {
    pub id: RowId,
    pub item_id: String,
    pub qty: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    ItemId,
    Qty,
}

#[derive(Debug, Clone, Default)]
pub struct LineRows {
    rows: Vec<LineRow>,
    next_id: u32,
}

impl LineRows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_empty_row(&mut self) -> RowId {
        self.add_row("", "")
    }

    pub fn add_row(&mut self, item_id: impl Into<String>, qty: impl Into<String>) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(LineRow {
            id,
            item_id: item_id.into(),
            qty: qty.into(),
        });
        id
    }

    /// Returns `false` when the row no longer exists.
    pub fn set(&mut self, row: RowId, field: RowField, value: impl Into<String>) -> bool {
        let Some(target) = self.rows.iter_mut().find(|r| r.id == row) else {
            return false;
        };
        match field {
            RowField::ItemId => target.item_id = value.into(),
            RowField::Qty => target.qty = value.into(),
        }
        true
    }

    /// Removes exactly `row`; other rows keep their ids and order.
    pub fn remove(&mut self, row: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != row);
        self.rows.len() != before
    }

    pub fn rows(&self) -> &[LineRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose values overflow an `i64` are dropped like unparseable ones.
    pub fn collect(&self) -> Vec<LineItem> {
        self.rows.iter().filter_map(LineRow::parse).collect()
    }
}

impl LineRow {
    fn parse(&self) -> Option<LineItem> {
        let item_id = parse_int_prefix(&self.item_id).filter(|v| *v != 0)?;
        let qty = parse_int_prefix(&self.qty).filter(|v| *v != 0)?;
        Some(LineItem::new(item_id, qty))
    }
}

/// Reads a leading integer the way browser form code does with `parseInt`:
/// leading whitespace is skipped, an optional sign and `0x` prefix are
/// honoured, and parsing stops at the first non-digit. `None` when no digit
/// was read or the value does not fit in an `i64`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let mut rest = raw.trim_start();
    let negative = match rest.as_bytes().first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let radix = match rest.get(..2) {
        Some("0x") | Some("0X") => {
            rest = &rest[2..];
            16
        }
        _ => 10,
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_digit(radix))
            .map_or(rest.len(), |(idx, _)| idx);
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
#[path = "tests/forms_tests.rs"]
mod tests;
