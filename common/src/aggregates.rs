//! Aggregate snapshots served by the statistics endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Kpi {
    pub total_jobs: u64,
    pub total_countries: u64,
    pub total_companies: u64,
    pub jobs_with_salary: u64,
    pub salary_percentage: f64,
}

/// Envelope used by every aggregate endpoint: `{ "data": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCount {
    pub region: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillShare {
    pub skill: String,
    pub count: u64,
    #[serde(default)]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSalary {
    pub role: String,
    #[serde(default)]
    pub avg_salary_min: Option<f64>,
    #[serde(default)]
    pub avg_salary_max: Option<f64>,
    pub count: u64,
}

/// A row of any aggregate keyed by one dimension.
pub trait DimensionCount {
    fn key(&self) -> &str;
    fn count(&self) -> u64;
}

impl DimensionCount for CountryCount {
    fn key(&self) -> &str {
        &self.country
    }
    fn count(&self) -> u64 {
        self.count
    }
}

impl DimensionCount for RegionCount {
    fn key(&self) -> &str {
        &self.region
    }
    fn count(&self) -> u64 {
        self.count
    }
}

impl DimensionCount for SkillShare {
    fn key(&self) -> &str {
        &self.skill
    }
    fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_envelopes_parse() {
        let countries: AggregateResponse<CountryCount> =
            serde_json::from_str(r#"{"data":[{"country":"us","count":120},{"country":"sg","count":30}]}"#).unwrap();
        assert_eq!(countries.data.len(), 2);
        assert_eq!(countries.data[0].key(), "us");

        let skills: AggregateResponse<SkillShare> =
            serde_json::from_str(r#"{"data":[{"skill":"Python","count":40,"percentage":26.7},{"skill":"SQL","count":10}]}"#).unwrap();
        assert_eq!(skills.data[0].percentage, Some(26.7));
        assert_eq!(skills.data[1].percentage, None);

        let empty: AggregateResponse<RegionCount> = serde_json::from_str("{}").unwrap();
        assert!(empty.data.is_empty());
    }

    #[test]
    fn kpi_parses_without_optional_counts() {
        let kpi: Kpi = serde_json::from_str(
            r#"{"total_jobs":1500,"total_countries":8,"total_companies":640,"salary_percentage":34.2}"#,
        )
        .unwrap();
        assert_eq!(kpi.total_jobs, 1500);
        assert_eq!(kpi.jobs_with_salary, 0);
    }
}
