// src/handlers/report.rs
use std::io::{self, Write};

use crate::models::StoredRow;

/// Two decimals with comma thousands separators, e.g. `-1,234,567.89`.
pub fn format_amount(num: f64) -> String {
    if !num.is_finite() {
        return num.to_string();
    }

    let s = format!("{:.2}", num.abs());
    let (int_part, dec_part) = s.split_once('.').unwrap_or((&s, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // Negative values keep their sign even when they round to zero.
    let sign = if num.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, dec_part)
}

pub fn free_cash_flow<W: Write>(out: &mut W, fcf: f64) -> io::Result<()> {
    writeln!(out, "Calculated Free Cash Flow: ${} million", format_amount(fcf))
}

pub fn present_value<W: Write>(out: &mut W, pv: f64) -> io::Result<()> {
    writeln!(
        out,
        "Total Present Value of Projected Cash Flows: ${} million",
        format_amount(pv)
    )
}

pub fn terminal_value<W: Write>(out: &mut W, pv_tv: f64) -> io::Result<()> {
    writeln!(out, "Present Value of Terminal Value: ${} million", format_amount(pv_tv))
}

pub fn final_valuation<W: Write>(out: &mut W, intrinsic_value: f64) -> io::Result<()> {
    writeln!(out, "\n--- Final Valuation ---")?;
    writeln!(
        out,
        "Calculated Intrinsic Value per Share: ${}",
        format_amount(intrinsic_value)
    )?;
    writeln!(out, "-----------------------")
}

fn text_cell(value: &Option<String>) -> String {
    match value {
        Some(text) => format!("'{}'", text),
        None => "None".to_string(),
    }
}

// `{:?}` keeps the decimal point on whole numbers: 1000.0, not 1000.
fn real_cell(value: Option<f64>) -> String {
    match value {
        Some(num) => format!("{:?}", num),
        None => "None".to_string(),
    }
}

/// One line of the stored-results dump, e.g.
/// `('ACME', '2026-10-19', 1000.0, 200.0, 0.05, 0.1, 0.03, 100.0, 128.15)`.
pub fn stored_row(row: &StoredRow) -> String {
    let cells = [
        text_cell(&row.ticker),
        text_cell(&row.run_date),
        real_cell(row.ocf),
        real_cell(row.capex),
        real_cell(row.growth_rate),
        real_cell(row.discount_rate),
        real_cell(row.perp_growth_rate),
        real_cell(row.shares_outstanding),
        real_cell(row.intrinsic_value),
    ];
    format!("({})", cells.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(800.0), "800.00");
        assert_eq!(format_amount(3486.4966), "3,486.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(100000.0), "100,000.00");
        assert_eq!(format_amount(-9328.509), "-9,328.51");
        assert_eq!(format_amount(-0.001), "-0.00");
    }

    #[test]
    fn test_format_amount_non_finite() {
        assert_eq!(format_amount(f64::INFINITY), "inf");
        assert_eq!(format_amount(f64::NAN), "NaN");
    }

    #[test]
    fn test_final_valuation_block() {
        let mut out = Vec::new();
        final_valuation(&mut out, 128.150058).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n--- Final Valuation ---\nCalculated Intrinsic Value per Share: $128.15\n-----------------------\n"
        );
    }

    #[test]
    fn test_negative_million_line() {
        let mut out = Vec::new();
        free_cash_flow(&mut out, -1500.0).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Calculated Free Cash Flow: $-1,500.00 million\n"
        );
    }

    fn sample_row() -> StoredRow {
        StoredRow {
            ticker: Some("ACME".to_string()),
            run_date: Some("2026-10-19".to_string()),
            ocf: Some(1000.0),
            capex: Some(200.0),
            growth_rate: Some(0.05),
            discount_rate: Some(0.1),
            perp_growth_rate: Some(0.03),
            shares_outstanding: Some(100.0),
            intrinsic_value: Some(128.15005805614368),
        }
    }

    #[test]
    fn test_stored_row_line() {
        assert_eq!(
            stored_row(&sample_row()),
            "('ACME', '2026-10-19', 1000.0, 200.0, 0.05, 0.1, 0.03, 100.0, 128.15005805614368)"
        );
    }

    #[test]
    fn test_stored_row_shows_nulls() {
        let row = StoredRow {
            run_date: None,
            intrinsic_value: None,
            ..sample_row()
        };
        assert_eq!(
            stored_row(&row),
            "('ACME', None, 1000.0, 200.0, 0.05, 0.1, 0.03, 100.0, None)"
        );
    }
}
