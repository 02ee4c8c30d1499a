//! CSV export and the matching quoted-field reader.
//!
//! Export writes a header row of column names followed by one row per record.
//! Every value is wrapped in double quotes with inner quotes doubled; rows are
//! separated by `\n`.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CsvError {
    #[error("No data to export")]
    Empty,
    #[error("Unterminated quoted field")]
    UnterminatedQuote,
}

/// A record with a fixed, ordered set of columns
pub trait CsvRow {
    fn headers() -> &'static [&'static str];
    fn values(&self) -> Vec<String>;
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render rows as CSV text
pub fn export<R: CsvRow>(rows: &[R]) -> Result<String, CsvError> {
    if rows.is_empty() {
        return Err(CsvError::Empty);
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(R::headers().join(","));
    for row in rows {
        let values: Vec<String> = row.values().iter().map(|v| quote(v)).collect();
        lines.push(values.join(","));
    }
    Ok(lines.join("\n"))
}

/// `<base>_<YYYY-MM-DD>.csv`
pub fn export_file_name(base: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", base, date.format("%Y-%m-%d"))
}

/// Split CSV text into records, honouring quoted fields (which may contain
/// commas, doubled quotes and newlines). Blank lines are skipped and
/// unquoted fields are trimmed.
pub fn parse(text: &str) -> Result<Vec<Vec<String>>, CsvError> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut was_quoted = false;
    let mut chars = text.chars().peekable();

    let finish_field = |field: &mut String, was_quoted: &mut bool, record: &mut Vec<String>| {
        let value = if *was_quoted {
            std::mem::take(field)
        } else {
            let trimmed = field.trim().to_string();
            field.clear();
            trimmed
        };
        record.push(value);
        *was_quoted = false;
    };

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
                was_quoted = true;
            }
            ',' => finish_field(&mut field, &mut was_quoted, &mut record),
            '\r' => {}
            '\n' => {
                finish_field(&mut field, &mut was_quoted, &mut record);
                if !is_blank(&record) {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(CsvError::UnterminatedQuote);
    }
    if !field.is_empty() || was_quoted || !record.is_empty() {
        finish_field(&mut field, &mut was_quoted, &mut record);
    }
    if !is_blank(&record) {
        records.push(record);
    }

    Ok(records)
}

fn is_blank(record: &[String]) -> bool {
    record.iter().all(|f| f.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        tag: &'static str,
        note: &'static str,
    }

    impl CsvRow for Item {
        fn headers() -> &'static [&'static str] {
            &["Asset Tag", "Notes"]
        }

        fn values(&self) -> Vec<String> {
            vec![self.tag.to_string(), self.note.to_string()]
        }
    }

    #[test]
    fn test_export_quotes_every_value() {
        let csv = export(&[Item { tag: "AST-000001", note: "fine" }]).unwrap();
        assert_eq!(csv, "Asset Tag,Notes\n\"AST-000001\",\"fine\"");
    }

    #[test]
    fn test_export_doubles_inner_quotes() {
        let csv = export(&[Item { tag: "A", note: "the \"good\" one" }]).unwrap();
        assert!(csv.ends_with("\"the \"\"good\"\" one\""));
    }

    #[test]
    fn test_export_rejects_empty_input() {
        assert_eq!(export::<Item>(&[]), Err(CsvError::Empty));
    }

    #[test]
    fn test_export_then_parse_recovers_values() {
        let items = [
            Item { tag: "AST-1", note: "screen cracked, keyboard ok" },
            Item { tag: "AST-2", note: "label says \"spare\"" },
            Item { tag: "AST-3", note: "" },
            Item { tag: "AST-4", note: "two\nlines" },
        ];
        let csv = export(&items).unwrap();
        let records = parse(&csv).unwrap();

        assert_eq!(records[0], vec!["Asset Tag", "Notes"]);
        for (record, item) in records[1..].iter().zip(items.iter()) {
            assert_eq!(record, &vec![item.tag.to_string(), item.note.to_string()]);
        }
        assert_eq!(records.len(), items.len() + 1);
    }

    #[test]
    fn test_parse_plain_lines_and_blank_rows() {
        let text = "name, category ,serial\r\nMacBook, laptop, C02X\n\n  \nDell,monitor,\n";
        let records = parse(text).unwrap();
        assert_eq!(
            records,
            vec![
                vec!["name", "category", "serial"],
                vec!["MacBook", "laptop", "C02X"],
                vec!["Dell", "monitor", ""],
            ]
        );
    }

    #[test]
    fn test_parse_unterminated_quote() {
        assert_eq!(parse("\"open,field"), Err(CsvError::UnterminatedQuote));
    }

    #[test]
    fn test_file_name_has_date_suffix() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert_eq!(export_file_name("inventory_report", date), "inventory_report_2026-10-15.csv");
    }
}
