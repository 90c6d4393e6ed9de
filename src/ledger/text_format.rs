//! Line-oriented persisted format.
//!
//! ```text
//! <balance>
//! <CATEGORY_SYMBOL>;<name>;<price>
//! ```
//!
//! Names are written verbatim; a `;` inside a name changes the field count
//! of its line, which is then skipped on reload.

use std::fmt::Write;

use crate::errors::ParseError;

use super::{category::Category, ledger::Ledger, purchase::Purchase};

const FIELD_SEPARATOR: char = ';';
const FIELD_COUNT: usize = 3;

/// Result of decoding a persisted document before it is applied to a ledger.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Decoded {
    /// `None` when the document has no lines at all.
    pub balance: Option<f64>,
    pub purchases: Vec<Purchase>,
}

pub fn encode(ledger: &Ledger) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", format_amount(ledger.balance()));
    for purchase in ledger.purchases() {
        let _ = writeln!(
            out,
            "{}{sep}{}{sep}{}",
            purchase.category().symbol(),
            purchase.name(),
            format_amount(purchase.price()),
            sep = FIELD_SEPARATOR
        );
    }
    out
}

pub fn decode(text: &str) -> Result<Decoded, ParseError> {
    let mut lines = text.lines().enumerate();
    let mut decoded = Decoded::default();

    if let Some((_, first)) = lines.next() {
        let balance = parse_amount(first).ok_or_else(|| ParseError::InvalidBalance {
            line: 1,
            value: first.to_string(),
        })?;
        decoded.balance = Some(balance);
    }

    for (index, line) in lines {
        let line_no = index + 1;
        let fields = split_fields(line);
        if fields.len() != FIELD_COUNT {
            tracing::debug!(line = line_no, "Skipping malformed purchase record");
            continue;
        }

        let category =
            Category::from_symbol(fields[0]).ok_or_else(|| ParseError::UnknownCategory {
                line: line_no,
                symbol: fields[0].to_string(),
            })?;
        let price = parse_amount(fields[2]).ok_or_else(|| ParseError::InvalidPrice {
            line: line_no,
            value: fields[2].to_string(),
        })?;
        decoded
            .purchases
            .push(Purchase::new(category, fields[1], price));
    }

    Ok(decoded)
}

/// Shortest round-trip rendering that always carries a fractional part (`100.0`).
pub fn format_amount(value: f64) -> String {
    format!("{value:?}")
}

/// Parses a decimal amount, tolerating surrounding whitespace and exponents (`1.0E7`).
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Splits on `;` and drops trailing empty fields before they are counted.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_balance_then_purchases() {
        let mut ledger = Ledger::new();
        ledger.add_income(100.0);
        ledger.add_purchase(Category::Clothes, "Shirt", 20.0);
        ledger.add_purchase(Category::Food, "Bread", 5.25);

        assert_eq!(
            encode(&ledger),
            "74.75\nCLOTHES;Shirt;20.0\nFOOD;Bread;5.25\n"
        );
    }

    #[test]
    fn decodes_records_in_order() {
        let decoded = decode("12.5\nFOOD;Milk;1.5\nOTHER;Pen;0.99\n").unwrap();
        assert_eq!(decoded.balance, Some(12.5));
        assert_eq!(
            decoded.purchases,
            vec![
                Purchase::new(Category::Food, "Milk", 1.5),
                Purchase::new(Category::Other, "Pen", 0.99),
            ]
        );
    }

    #[test]
    fn wrong_field_count_is_skipped() {
        let decoded = decode("0.0\nFOOD;Milk\nFOOD;a;b;c\n\nFOOD;Tea;2.0\n").unwrap();
        assert_eq!(
            decoded.purchases,
            vec![Purchase::new(Category::Food, "Tea", 2.0)]
        );
    }

    #[test]
    fn trailing_empty_fields_are_not_counted() {
        let decoded = decode("0.0\nFOOD;Milk;\nFOOD;Tea;2.0;\n").unwrap();
        assert_eq!(
            decoded.purchases,
            vec![Purchase::new(Category::Food, "Tea", 2.0)]
        );
    }

    #[test]
    fn empty_name_is_kept() {
        let decoded = decode("0.0\nOTHER;;4.0\n").unwrap();
        assert_eq!(decoded.purchases[0].name(), "");
    }

    #[test]
    fn unknown_category_fails_with_line_number() {
        let err = decode("0.0\nFOOD;Milk;1.0\nfood;Tea;2.0\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownCategory {
                line: 3,
                symbol: "food".into()
            }
        );
    }

    #[test]
    fn malformed_price_and_balance_fail() {
        assert!(matches!(
            decode("0.0\nFOOD;Milk;cheap\n"),
            Err(ParseError::InvalidPrice { line: 2, .. })
        ));
        assert!(matches!(
            decode("lots\n"),
            Err(ParseError::InvalidBalance { line: 1, .. })
        ));
    }

    #[test]
    fn empty_document_has_no_balance() {
        assert_eq!(decode("").unwrap(), Decoded::default());
    }

    #[test]
    fn amounts_accept_exponent_and_whitespace() {
        assert_eq!(parse_amount("1.0E7"), Some(10_000_000.0));
        assert_eq!(parse_amount(" 3.5 "), Some(3.5));
        assert_eq!(parse_amount("-2"), Some(-2.0));
        assert_eq!(parse_amount("3,5"), None);
    }

    #[test]
    fn amounts_render_with_fraction() {
        assert_eq!(format_amount(100.0), "100.0");
        assert_eq!(format_amount(-0.5), "-0.5");
        assert_eq!(format_amount(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn decoded_amounts_match_encoded_bits() {
        let value = 0.1 + 0.2;
        assert_eq!(
            parse_amount(&format_amount(value)).map(f64::to_bits),
            Some(value.to_bits())
        );
    }
}
