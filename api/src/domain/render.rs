// HTML rendering for the asset-summary email and the printable handover form

use super::handover::{HandoverDocument, HandoverKind};
use crate::entity::{assets, employees};

const TABLE_STYLE: &str = "body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
      table { width: 100%; border-collapse: collapse; margin-top: 20px; }
      th { background-color: #f4f4f4; text-align: left; padding: 10px; border: 1px solid #ddd; }
      td { padding: 10px; border: 1px solid #ddd; }
      .header { margin-bottom: 20px; }
      .footer { margin-top: 30px; font-size: 0.9em; color: #666; }
      .signatures td { height: 60px; vertical-align: bottom; }";

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        escape_html(value)
    }
}

fn table(headers: &[&str], rows: &[Vec<String>], empty_message: &str) -> String {
    let head: String = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();
    let body: String = if rows.is_empty() {
        format!(
            "<tr><td colspan=\"{}\" style=\"text-align:center;\">{}</td></tr>",
            headers.len(),
            escape_html(empty_message)
        )
    } else {
        rows.iter()
            .map(|cells| {
                let tds: String = cells.iter().map(|c| format!("<td>{}</td>", c)).collect();
                format!("<tr>{}</tr>", tds)
            })
            .collect()
    };
    format!("<table><thead><tr>{}</tr></thead><tbody>{}</tbody></table>", head, body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n      {}\n</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        TABLE_STYLE,
        body
    )
}

/// Email body listing the assets currently assigned to an employee
pub fn asset_summary_email(
    employee: &employees::Model,
    assets: &[assets::Model],
    org_name: &str,
) -> String {
    let rows: Vec<Vec<String>> = assets
        .iter()
        .enumerate()
        .map(|(i, a)| {
            vec![
                (i + 1).to_string(),
                if a.category.trim().is_empty() {
                    "N/A".to_string()
                } else {
                    escape_html(&a.category)
                },
                escape_html(&a.name),
                escape_html(&a.asset_tag),
                or_dash(&a.serial_number),
                a.updated_at.date_naive().to_string(),
                a.condition.as_str().to_string(),
            ]
        })
        .collect();

    let body = format!(
        "<div class=\"header\">\n<p>Dear {},</p>\n<p>Below is the list of company assets currently assigned to you.</p>\n</div>\n{}\n<div class=\"footer\">\n<p>If you notice any discrepancy, please contact the IT team immediately.</p>\n<p>Regards,<br>IT Department<br>{}</p>\n</div>",
        escape_html(&employee.name),
        table(
            &[
                "Sr No.",
                "Asset Type",
                "Asset Name",
                "Asset ID",
                "Serial Number",
                "Assigned Date",
                "Condition",
            ],
            &rows,
            "No assets currently assigned.",
        ),
        escape_html(org_name),
    );
    page("Your Assigned Company Assets", &body)
}

/// Printable handover form
pub fn handover_form(doc: &HandoverDocument, org_name: &str) -> String {
    let (recipient_label, contact_label) = match doc.kind {
        HandoverKind::Employee => ("Employee Name", "Email"),
        HandoverKind::Location => ("Location Name", "Address"),
    };
    let rows: Vec<Vec<String>> = doc
        .assets
        .iter()
        .map(|line| {
            vec![
                line.sr_no.to_string(),
                escape_html(&line.asset_tag),
                escape_html(&line.name),
                escape_html(&line.category),
                escape_html(&format!("{} {}", line.brand, line.model)),
                or_dash(&line.serial_number),
                escape_html(&line.condition),
            ]
        })
        .collect();

    let body = format!(
        "<div class=\"header\">\n<h1>{} - Asset Handover Form</h1>\n<p>INTERNAL USE ONLY</p>\n</div>\n<h2>Hand Over Particulars</h2>\n<p><strong>{}:</strong> {}</p>\n<p><strong>{}:</strong> {}</p>\n<p><strong>Location:</strong> {}</p>\n<p><strong>Date:</strong> {}</p>\n{}\n<table class=\"signatures\"><tr><td>Handed over by</td><td>Received by</td></tr></table>",
        escape_html(org_name),
        recipient_label,
        escape_html(&doc.name),
        contact_label,
        or_dash(&doc.contact),
        escape_html(&doc.location),
        doc.date.format("%Y-%m-%d"),
        table(
            &["Sr No.", "Asset Tag", "Asset Name", "Category", "Make / Model", "Serial Number", "Condition"],
            &rows,
            "No assets to hand over.",
        ),
    );
    page("Asset Handover Form", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::handover;
    use crate::domain::test_support::{asset_at, date, employee_at};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_email_lists_assets_escaped() {
        let employee = employee_at("Office", None);
        let mut asset = asset_at("Office", None);
        asset.name = "Dell <XPS>".to_string();
        let html = asset_summary_email(&employee, &[asset], "Asset Compass");

        assert!(html.contains("Dell &lt;XPS&gt;"));
        assert!(html.contains("<td>1</td>"));
        assert!(!html.contains("No assets currently assigned."));
    }

    #[test]
    fn test_email_without_assets_has_placeholder_row() {
        let employee = employee_at("Office", None);
        let html = asset_summary_email(&employee, &[], "Asset Compass");
        assert!(html.contains("colspan=\"7\""));
        assert!(html.contains("No assets currently assigned."));
    }

    #[test]
    fn test_handover_form_labels_follow_kind() {
        let employee = employee_at("Office", None);
        let doc = handover::for_employee(&employee, &[], date(2026, 10, 15));
        let html = handover_form(&doc, "Asset Compass");
        assert!(html.contains("Employee Name:"));
        assert!(html.contains("2026-10-15"));
        assert!(html.contains("No assets to hand over."));
    }
}
