//! Terminal rendering of the page view models.

use client_core::{
    controller::{dashboard::DashboardView, stock::StockLine},
    LineRows,
};

pub fn dashboard(view: &DashboardView) -> String {
    let mut out = format!(
        "Central inventory: {}\nPending bons: {}\nLow stock:\n",
        view.central_items, view.pending_bons
    );
    for line in &view.low_stock {
        out.push_str("  - ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

pub fn stock_table(lines: &[StockLine]) -> String {
    let width = lines
        .iter()
        .map(|line| line.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());
    let mut out = format!("{:<width$}  Qty\n", "Name");
    for line in lines {
        out.push_str(&format!("{:<width$}  {}\n", line.name, line.qty));
    }
    out
}

pub fn print_rows(rows: &LineRows) {
    if rows.is_empty() {
        println!("(no rows)");
        return;
    }
    for row in rows.rows() {
        println!("#{:<3} item_id={:<8} qty={}", row.id.0, row.item_id, row.qty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_lists_low_stock_lines() {
        let view = DashboardView {
            central_items: "12".to_string(),
            pending_bons: "3".to_string(),
            low_stock: vec!["Paracetamol — 0  (seuil 0)".to_string()],
        };
        assert_eq!(
            dashboard(&view),
            "Central inventory: 12\nPending bons: 3\nLow stock:\n  - Paracetamol — 0  (seuil 0)\n"
        );
    }

    #[test]
    fn stock_table_aligns_names() {
        let lines = vec![
            StockLine {
                name: "Gaze".to_string(),
                qty: "2".to_string(),
            },
            StockLine {
                name: "Paracetamol".to_string(),
                qty: "0".to_string(),
            },
        ];
        assert_eq!(
            stock_table(&lines),
            "Name         Qty\nGaze         2\nParacetamol  0\n"
        );
    }
}
