// dashboard/export.rs
// CSV and SpreadsheetML encoders for the filtered view

use chrono::NaiveDate;
use quick_xml::escape::escape;

use csa_core::ServiceRequest;

/// Fixed column labels, in export order
pub const EXPORT_COLUMNS: [&str; 13] = [
    "Request ID",
    "Account Name",
    "Vertical",
    "Site Count",
    "Issue Category",
    "Request Date",
    "Status",
    "Urgency",
    "Priority",
    "Time to Respond (hrs)",
    "Time to Resolution (hrs)",
    "Resolution Date",
    "Account Health",
];

pub struct Exporter;

impl Exporter {
    /// Delimited text: quoted header row + one quoted row per record
    pub fn to_csv(records: &[&ServiceRequest]) -> String {
        let mut out = String::new();

        let header: Vec<String> = EXPORT_COLUMNS.iter().map(|c| Self::csv_field(c)).collect();
        out.push_str(&header.join(","));
        out.push('\n');

        for record in records {
            let row: Vec<String> = Self::field_values(record)
                .iter()
                .map(|v| Self::csv_field(v))
                .collect();
            out.push_str(&row.join(","));
            out.push('\n');
        }

        out
    }

    /// Excel 2003 SpreadsheetML: same 13 columns, numeric cells typed
    /// `Number`, one bold header row.
    pub fn to_spreadsheet_xml(records: &[&ServiceRequest]) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0"?>
<?mso-application progid="Excel.Sheet"?>
<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
 <Styles>
  <Style ss:ID="Header"><Font ss:Bold="1"/></Style>
 </Styles>
 <Worksheet ss:Name="Service Requests">
  <Table>
"#,
        );

        xml.push_str("   <Row>\n");
        for column in EXPORT_COLUMNS {
            xml.push_str(&format!(
                "    <Cell ss:StyleID=\"Header\"><Data ss:Type=\"String\">{}</Data></Cell>\n",
                escape(column)
            ));
        }
        xml.push_str("   </Row>\n");

        for record in records {
            xml.push_str("   <Row>\n");
            for (index, value) in Self::field_values(record).iter().enumerate() {
                let cell_type = if Self::is_numeric_column(index) {
                    "Number"
                } else {
                    "String"
                };
                xml.push_str(&format!(
                    "    <Cell><Data ss:Type=\"{}\">{}</Data></Cell>\n",
                    cell_type,
                    escape(value.as_str())
                ));
            }
            xml.push_str("   </Row>\n");
        }

        xml.push_str(
            r#"  </Table>
 </Worksheet>
</Workbook>
"#,
        );
        xml
    }

    /// Suggested download name for the CSV encoding
    pub fn csv_filename(today: NaiveDate) -> String {
        format!("service-requests-{}.csv", today.format("%Y-%m-%d"))
    }

    /// Suggested download name for the SpreadsheetML encoding
    pub fn spreadsheet_filename(today: NaiveDate) -> String {
        format!("service-requests-{}.xls", today.format("%Y-%m-%d"))
    }

    fn field_values(record: &ServiceRequest) -> [String; 13] {
        [
            record.request_id.clone(),
            record.account_name.clone(),
            record.vertical.as_str().to_string(),
            record.site_count.to_string(),
            record.issue_category.as_str().to_string(),
            record.request_date.to_string(),
            record.status.as_str().to_string(),
            record.urgency.as_str().to_string(),
            record.priority.as_str().to_string(),
            record.time_to_respond.to_string(),
            record.time_to_resolution.to_string(),
            record.resolution_date.to_string(),
            record.account_health.as_str().to_string(),
        ]
    }

    // site_count and the two hour durations
    fn is_numeric_column(index: usize) -> bool {
        matches!(index, 3 | 9 | 10)
    }

    fn csv_field(value: &str) -> String {
        format!("\"{}\"", value.replace('"', "\"\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use csa_core::{
        AccountHealth, IssueCategory, RequestStatus, ServiceRequest, UrgencyLevel, Vertical,
    };

    fn request() -> ServiceRequest {
        ServiceRequest {
            request_id: "SR-2001".to_string(),
            account_name: "The \"Corner\" Cafe".to_string(),
            vertical: Vertical::Restaurant,
            site_count: 3,
            issue_category: IssueCategory::PosMalfunction,
            request_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            status: RequestStatus::InProgress,
            urgency: UrgencyLevel::High,
            priority: UrgencyLevel::Medium,
            time_to_respond: 6.5,
            time_to_resolution: 48.0,
            resolution_date: NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
            account_health: AccountHealth::Fair,
        }
    }

    #[test]
    fn test_csv_header_and_quoting() {
        let record = request();
        let csv = Exporter::to_csv(&[&record]);
        let mut lines = csv.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("\"Request ID\",\"Account Name\""));
        assert_eq!(header.matches(',').count(), 12);

        let row = lines.next().unwrap();
        // Embedded quotes doubled
        assert!(row.contains("\"The \"\"Corner\"\" Cafe\""));
        assert!(row.contains("\"In Progress\""));
        assert!(row.contains("\"2024-02-01\""));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_csv_empty_collection_is_header_only() {
        let csv = Exporter::to_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_spreadsheet_types_and_escaping() {
        let record = request();
        let xml = Exporter::to_spreadsheet_xml(&[&record]);

        assert!(xml.contains("<?mso-application progid=\"Excel.Sheet\"?>"));
        assert!(xml.contains("ss:StyleID=\"Header\""));
        assert!(xml.contains("<Data ss:Type=\"Number\">3</Data>"));
        assert!(xml.contains("<Data ss:Type=\"Number\">6.5</Data>"));
        assert!(xml.contains("<Data ss:Type=\"String\">POS Malfunction</Data>"));
        // XML-escaped account name
        assert!(xml.contains("The &quot;Corner&quot; Cafe"));
    }

    #[test]
    fn test_filenames_carry_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(Exporter::csv_filename(today), "service-requests-2024-03-10.csv");
        assert_eq!(
            Exporter::spreadsheet_filename(today),
            "service-requests-2024-03-10.xls"
        );
    }
}
