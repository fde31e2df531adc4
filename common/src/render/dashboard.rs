//! Dashboard and home page: KPI cards, summary insight, charts and salary by role.

use crate::{
    aggregates::{CountryCount, Kpi, RegionCount, RoleSalary},
    format::{format_count, format_percentage, format_usd},
    job_const::DASHBOARD_TOP_COUNTRIES,
    render::{
        chart::{ChartDataset, count_chart},
        ranking::top_n,
        shares::percentage,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiCard {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

pub fn kpi_cards(kpi: &Kpi) -> Vec<KpiCard> {
    vec![
        KpiCard { id: "kpi-total-jobs", icon: "💼", label: "Total jobs", value: format_count(kpi.total_jobs) },
        KpiCard { id: "kpi-countries", icon: "🌍", label: "Countries", value: format_count(kpi.total_countries) },
        KpiCard { id: "kpi-companies", icon: "🏢", label: "Companies", value: format_count(kpi.total_companies) },
        KpiCard {
            id: "kpi-salary",
            icon: "💰",
            label: "Jobs with salary",
            value: format_percentage(Some(kpi.salary_percentage), 1),
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    pub name: String,
    pub count: u64,
}

impl Leader {
    pub fn count_label(&self) -> String {
        format_count(self.count)
    }
}

/// Headline facts, built once KPIs, regions and countries have all arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryInsight {
    pub total_jobs: String,
    pub total_countries: String,
    pub total_companies: String,
    pub top_region: Option<Leader>,
    /// Whole-number share of all jobs held by the top region.
    pub top_region_share: u64,
    pub top_country: Option<Leader>,
    pub salary_percentage: String,
}

pub fn summary_insight(kpi: &Kpi, regions: &[RegionCount], countries: &[CountryCount]) -> SummaryInsight {
    let top_region = top_n(regions.to_vec(), 1, |r| r.count)
        .into_iter()
        .next()
        .map(|r| Leader { name: r.region, count: r.count });
    let top_country = top_n(countries.to_vec(), 1, |c| c.count)
        .into_iter()
        .next()
        .map(|c| Leader { name: c.country.to_uppercase(), count: c.count });
    let top_region_share = top_region
        .as_ref()
        .map_or(0, |r| percentage(r.count, kpi.total_jobs).round() as u64);

    SummaryInsight {
        total_jobs: format_count(kpi.total_jobs),
        total_countries: format_count(kpi.total_countries),
        total_companies: format_count(kpi.total_companies),
        top_region,
        top_region_share,
        top_country,
        salary_percentage: format_percentage(Some(kpi.salary_percentage), 1),
    }
}

pub fn region_chart(regions: &[RegionCount]) -> ChartDataset {
    count_chart("Jobs by region", regions, regions.len(), |region| region.to_string())
}

/// The leading countries by raw code, as the dashboard shows them.
pub fn dashboard_country_chart(countries: &[CountryCount]) -> ChartDataset {
    count_chart("Top countries", countries, DASHBOARD_TOP_COUNTRIES, |code| code.to_uppercase())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSalaryRow {
    pub role: String,
    pub average_min: String,
    pub average_max: String,
    pub count: String,
}

pub fn salary_by_role_rows(roles: &[RoleSalary]) -> Vec<RoleSalaryRow> {
    roles
        .iter()
        .map(|r| RoleSalaryRow {
            role: r.role.clone(),
            average_min: format_usd(r.avg_salary_min),
            average_max: format_usd(r.avg_salary_max),
            count: format_count(r.count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kpi(total_jobs: u64) -> Kpi {
        Kpi {
            total_jobs,
            total_countries: 8,
            total_companies: 1234,
            jobs_with_salary: total_jobs / 2,
            salary_percentage: 48.26,
        }
    }

    #[test]
    fn kpi_cards_format_values() {
        let cards = kpi_cards(&kpi(12500));
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "12,500");
        assert_eq!(cards[2].value, "1,234");
        assert_eq!(cards[3].value, "48.3%");
    }

    #[test]
    fn summary_picks_leaders() {
        let regions = vec![
            RegionCount { region: "Asia".into(), count: 300 },
            RegionCount { region: "Europe".into(), count: 500 },
            RegionCount { region: "Oceania".into(), count: 500 },
        ];
        let countries = vec![
            CountryCount { country: "gb".into(), count: 200 },
            CountryCount { country: "us".into(), count: 450 },
        ];
        let summary = summary_insight(&kpi(2000), &regions, &countries);
        assert_eq!(summary.top_region, Some(Leader { name: "Europe".into(), count: 500 }));
        assert_eq!(summary.top_region_share, 25);
        assert_eq!(summary.top_country, Some(Leader { name: "US".into(), count: 450 }));
        assert_eq!(summary.total_jobs, "2,000");
        assert_eq!(summary.top_country.map(|c| c.count_label()).as_deref(), Some("450"));
    }

    #[test]
    fn summary_guards_zero_total_and_empty_lists() {
        let summary = summary_insight(&kpi(0), &[RegionCount { region: "Asia".into(), count: 3 }], &[]);
        assert_eq!(summary.top_region_share, 0);
        assert_eq!(summary.top_country, None);
    }

    #[test]
    fn country_chart_keeps_top_seven() {
        let counts: Vec<CountryCount> =
            (1..=9).map(|i| CountryCount { country: format!("c{i}"), count: i * 10 }).collect();
        let chart = dashboard_country_chart(&counts);
        assert_eq!(chart.bars.len(), DASHBOARD_TOP_COUNTRIES);
        assert_eq!(chart.bars[0].label, "C9");
    }

    #[test]
    fn salary_rows_use_dollars() {
        let rows = salary_by_role_rows(&[RoleSalary {
            role: "Data Engineer".into(),
            avg_salary_min: Some(85000.4),
            avg_salary_max: None,
            count: 42,
        }]);
        assert_eq!(rows[0].average_min, "$85,000");
        assert_eq!(rows[0].average_max, "N/A");
    }
}
