//! Spreadsheet export of the filtered job set.

use chrono::NaiveDate;

use crate::job_listing::JobPosting;

pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

pub const CSV_HEADERS: [&str; 9] = [
    "Title",
    "Category",
    "Company",
    "Country",
    "City",
    "Salary Min",
    "Salary Max",
    "Date Posted",
    "Description",
];

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn salary_cell(value: Option<f64>) -> String {
    value.filter(|v| v.is_finite() && *v > 0.0).map(|v| v.to_string()).unwrap_or_default()
}

fn row(job: &JobPosting) -> [String; 9] {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    [
        text(&job.title),
        text(&job.category),
        text(&job.company),
        job.country.clone(),
        text(&job.city),
        salary_cell(job.salary_min),
        salary_cell(job.salary_max),
        text(&job.posted),
        text(&job.description),
    ]
}

/// Header line plus one line per job, every field quoted, prefixed with a BOM.
pub fn jobs_to_csv(jobs: &[JobPosting]) -> String {
    let mut lines = Vec::with_capacity(jobs.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for job in jobs {
        lines.push(row(job).iter().map(|cell| quote(cell)).collect::<Vec<_>>().join(","));
    }
    let mut csv = String::new();
    csv.push(BYTE_ORDER_MARK);
    csv.push_str(&lines.join("\n"));
    csv
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("jobs_export_{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> JobPosting {
        JobPosting {
            title: Some("Data Engineer, Platform".to_string()),
            company: Some("Acme \"Labs\"".to_string()),
            country: "gb".to_string(),
            city: None,
            salary_min: Some(65000.0),
            description: Some("Build \"reliable\" pipelines,\nship daily".to_string()),
            posted: Some("2024-05-01".to_string()),
            ..JobPosting::default()
        }
    }

    #[test]
    fn output_starts_with_bom_and_headers() {
        let csv = jobs_to_csv(&[]);
        assert!(csv.starts_with(BYTE_ORDER_MARK));
        assert_eq!(
            csv.trim_start_matches(BYTE_ORDER_MARK),
            "Title,Category,Company,Country,City,Salary Min,Salary Max,Date Posted,Description"
        );
    }

    #[test]
    fn quotes_are_doubled() {
        let csv = jobs_to_csv(&[sample_job()]);
        assert!(csv.contains("\"Acme \"\"Labs\"\"\""));
        assert!(csv.contains(",\"65000\",\"\","));
    }

    /// Splits one CSV document into records, honouring quoted fields.
    fn parse_records(body: &str) -> Vec<Vec<String>> {
        let mut records = vec![];
        let mut record = vec![];
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = body.chars().peekable();
        while let Some(c) = chars.next() {
            match (c, in_quotes) {
                ('"', true) if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                ('"', _) => in_quotes = !in_quotes,
                (',', false) => record.push(std::mem::take(&mut field)),
                ('\n', false) => {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                (c, _) => field.push(c),
            }
        }
        record.push(field);
        records.push(record);
        records
    }

    #[test]
    fn description_with_quotes_round_trips() {
        let job = sample_job();
        let csv = jobs_to_csv(std::slice::from_ref(&job));
        let records = parse_records(csv.trim_start_matches(BYTE_ORDER_MARK));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], CSV_HEADERS.to_vec());
        let record = &records[1];
        assert_eq!(record.len(), CSV_HEADERS.len());
        assert_eq!(Some(record[0].as_str()), job.title.as_deref());
        assert_eq!(Some(record[2].as_str()), job.company.as_deref());
        assert_eq!(record[3], "gb");
        assert_eq!(record[4], "");
        assert_eq!(Some(record[8].as_str()), job.description.as_deref());
    }

    #[test]
    fn file_name_carries_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 9).unwrap();
        assert_eq!(export_file_name(date), "jobs_export_2024-07-09.csv");
    }
}
