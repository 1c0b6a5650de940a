use strum::IntoEnumIterator;
use unicode_width::UnicodeWidthStr;

use crate::types::contract::{ContractRecord, PartyField, Side};

const COLUMN_GAP: usize = 4;

// The print pass renders the contract alone: the screen chrome (title bar,
// key hints) never reaches the spooler.
pub fn render(record: &ContractRecord) -> String {
    let supplier = party_lines(record, Side::Supplier);
    let customer = party_lines(record, Side::Customer);
    let columns = two_columns(&supplier, &customer);
    let width = columns
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    lines.push(centered("CONTRACT", width));
    lines.push(centered(
        &format!(
            "No. {} of {}",
            record.contract_number, record.contract_date
        ),
        width,
    ));
    lines.push(String::new());
    lines.push(centered("PARTY REQUISITES", width));
    lines.push(String::new());
    lines.extend(columns);

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

fn party_lines(record: &ContractRecord, side: Side) -> Vec<String> {
    let party = record.party(side);
    let title = side.to_string();
    let mut lines = vec![title.clone(), "-".repeat(UnicodeWidthStr::width(title.as_str()))];
    for field in PartyField::iter() {
        lines.push(format!("{}: {}", field, party.get(field)));
    }
    lines.push(String::new());
    lines.push("_________________".to_string());
    lines.push("(signature)".to_string());
    lines
}

fn two_columns(left: &[String], right: &[String]) -> Vec<String> {
    let left_width = left
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).map(String::as_str).unwrap_or("");
        let r = right.get(i).map(String::as_str).unwrap_or("");
        let padding = left_width - UnicodeWidthStr::width(l) + COLUMN_GAP;
        let mut line = String::from(l);
        if !r.is_empty() {
            line.push_str(&" ".repeat(padding));
            line.push_str(r);
        }
        lines.push(line);
    }
    lines
}

fn centered(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - text_width) / 2), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::contract::HeaderField;

    #[test]
    fn document_carries_every_record_value() {
        let record = ContractRecord::placeholder();
        let document = render(&record);
        assert!(document.contains(&record.contract_number));
        assert!(document.contains(&record.contract_date));
        for side in Side::iter() {
            for field in PartyField::iter() {
                assert!(
                    document.contains(record.party(side).get(field)),
                    "document misses {side} {field}"
                );
            }
        }
    }

    #[test]
    fn document_has_no_screen_chrome() {
        let document = render(&ContractRecord::placeholder());
        assert!(!document.contains("Quit"));
        assert!(!document.contains("Print"));
        assert!(!document.contains("KONTRAKT"));
    }

    #[test]
    fn heading_sits_above_the_requisites() {
        let document = render(&ContractRecord::placeholder());
        let mut lines = document.lines();
        assert_eq!(lines.next().map(str::trim), Some("CONTRACT"));
        assert!(document.contains("PARTY REQUISITES"));
        assert!(document.contains("Supplier"));
        assert!(document.contains("Customer"));
        assert!(document.contains("(signature)"));
    }

    #[test]
    fn render_is_a_pure_function_of_the_record() {
        let record = ContractRecord::placeholder();
        assert_eq!(render(&record), render(&record));

        let updated = record.set_header(HeaderField::Number, "777/2027");
        assert!(render(&updated).contains("777/2027"));
        assert!(render(&record).contains("001/2025"));
    }

    #[test]
    fn supplier_and_customer_share_each_row() {
        let record = ContractRecord::placeholder();
        let document = render(&record);
        let inn_row = document
            .lines()
            .find(|line| line.contains("INN:"))
            .expect("no INN row");
        assert!(inn_row.contains(&record.supplier.inn));
        assert!(inn_row.contains(&record.customer.inn));
    }
}
