//! Terminal output.

use std::io::{self, Write};

use storefront::{
    checkout::FieldErrors,
    totals::{OrderSummary, SummaryLine},
};
use storefront_app::notices::{Notice, NoticeLevel};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};

/// Write the cart lines and item count badge.
pub(crate) fn write_cart(out: &mut impl Write, summary: &OrderSummary) -> io::Result<()> {
    if summary.lines.is_empty() {
        return writeln!(out, "Your cart is empty");
    }

    write_lines_table(out, &summary.lines)?;

    writeln!(out, "{}", summary.totals.item_count_label())
}

/// Write the order summary: lines, subtotal, shipping and total.
pub(crate) fn write_summary(out: &mut impl Write, summary: &OrderSummary) -> io::Result<()> {
    if summary.lines.is_empty() {
        return writeln!(out, "Your cart is empty");
    }

    write_lines_table(out, &summary.lines)?;

    let rows = [
        ("Items", summary.totals.item_count_label()),
        ("Subtotal", summary.subtotal.clone()),
        ("Shipping", summary.shipping.clone()),
        ("Total", summary.total.clone()),
    ];

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or(0);

    for (label, value) in &rows {
        writeln!(out, "{label:>label_width$}:  {value:>value_width$}")?;
    }

    if let Some(notice) = summary.notice {
        writeln!(out, "\n{notice}")?;
    }

    Ok(())
}

fn write_lines_table(out: &mut impl Write, lines: &[SummaryLine]) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Qty", "Price", "Total"]);

    for line in lines {
        builder.push_record([
            line.name.clone(),
            line.quantity.to_string(),
            line.unit_price.clone(),
            line.line_total.clone(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..), Alignment::right());
    table.modify(Rows::first(), Alignment::center());

    writeln!(out, "{table}")
}

/// Write inline checkout field errors.
pub(crate) fn write_field_errors(out: &mut impl Write, errors: &FieldErrors) -> io::Result<()> {
    writeln!(out, "Please fix the following:")?;

    for (field, message) in errors {
        writeln!(out, "  {}: {message}", field.as_str())?;
    }

    Ok(())
}

/// Write customer notices, one per line.
pub(crate) fn write_notices(out: &mut impl Write, notices: &[Notice]) -> io::Result<()> {
    for notice in notices {
        let marker = match notice.level {
            NoticeLevel::Success => "✓",
            NoticeLevel::Warning => "!",
            NoticeLevel::Error => "✗",
        };

        writeln!(out, "{marker} {}", notice.message)?;
    }

    Ok(())
}
