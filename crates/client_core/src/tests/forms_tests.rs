use super::*;

#[test]
fn rows_with_missing_item_id_are_dropped() {
    let mut rows = LineRows::new();
    rows.add_row("5", "3");
    rows.add_row("", "2");

    assert_eq!(rows.collect(), vec![LineItem::new(5, 3)]);
}

#[test]
fn zero_and_unparseable_values_are_dropped() {
    let mut rows = LineRows::new();
    rows.add_row("0", "4");
    rows.add_row("7", "0");
    rows.add_row("abc", "1");
    rows.add_row("8", "lots");
    rows.add_row("9", "2");

    assert_eq!(rows.collect(), vec![LineItem::new(9, 2)]);
}

#[test]
fn removing_a_row_removes_only_that_row() {
    let mut rows = LineRows::new();
    let first = rows.add_row("1", "1");
    let second = rows.add_row("2", "2");
    let third = rows.add_row("3", "3");

    assert!(rows.remove(second));

    let ids: Vec<RowId> = rows.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first, third]);
    assert_eq!(
        rows.collect(),
        vec![LineItem::new(1, 1), LineItem::new(3, 3)]
    );
    assert!(!rows.remove(second), "row is already gone");
}

#[test]
fn row_ids_are_not_reused_after_removal() {
    let mut rows = LineRows::new();
    let first = rows.add_empty_row();
    rows.remove(first);
    let next = rows.add_empty_row();
    assert_ne!(first, next);
}

#[test]
fn editing_fields_updates_the_collected_line() {
    let mut rows = LineRows::new();
    let row = rows.add_empty_row();
    assert!(rows.collect().is_empty());

    assert!(rows.set(row, RowField::ItemId, "12"));
    assert!(rows.set(row, RowField::Qty, "5"));
    assert_eq!(rows.collect(), vec![LineItem::new(12, 5)]);

    rows.remove(row);
    assert!(!rows.set(row, RowField::Qty, "6"));
}

#[test]
fn parses_leading_integer_like_a_browser_form() {
    assert_eq!(parse_int_prefix("42"), Some(42));
    assert_eq!(parse_int_prefix("  7 "), Some(7));
    assert_eq!(parse_int_prefix("3.9"), Some(3));
    assert_eq!(parse_int_prefix("12abc"), Some(12));
    assert_eq!(parse_int_prefix("-4"), Some(-4));
    assert_eq!(parse_int_prefix("+4"), Some(4));
    assert_eq!(parse_int_prefix("0x1A"), Some(26));
    assert_eq!(parse_int_prefix(""), None);
    assert_eq!(parse_int_prefix("-"), None);
    assert_eq!(parse_int_prefix("x5"), None);
    assert_eq!(parse_int_prefix("99999999999999999999"), None);
}

#[test]
fn negative_quantities_are_kept() {
    let mut rows = LineRows::new();
    rows.add_row("5", "-2");
    assert_eq!(rows.collect(), vec![LineItem::new(5, -2)]);
}

#[test]
fn overflowing_values_are_dropped_on_collect() {
    let mut rows = LineRows::new();
    rows.add_row("99999999999999999999", "1");
    rows.add_row("3", "99999999999999999999");
    rows.add_row("4", "1");
    assert_eq!(rows.collect(), vec![LineItem::new(4, 1)]);
}
