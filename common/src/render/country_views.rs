//! Countries page: country cards, regional stats and top companies per country.

use crate::{
    aggregates::{CountryCount, RegionCount},
    countries::{FALLBACK_FLAG, FALLBACK_REGION, country_info},
    format::{PLACEHOLDER_UNKNOWN, truncate_text},
    job_const::{COMPANY_CARD_TRUNCATE, COUNTRY_COMPARISON_LIMIT, TOP_COMPANIES_PER_COUNTRY},
    job_listing::JobPosting,
    render::{
        chart::{ChartDataset, count_chart, country_label},
        ranking::{tally, top_n},
        shares::{ShareRow, shares_of_sum},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct CountryCard {
    /// Code as served, used for the jobs link.
    pub code: String,
    pub flag: &'static str,
    pub name: String,
    pub region: &'static str,
    pub count: u64,
    pub percentage: f64,
}

impl CountryCard {
    pub fn percentage_label(&self) -> String {
        format!("{:.1}% of total", self.percentage)
    }
}

/// One card per country in served order, with its share of the summed counts.
pub fn country_cards(countries: &[CountryCount]) -> Vec<CountryCard> {
    countries
        .iter()
        .zip(shares_of_sum(countries))
        .map(|(country, share)| {
            let info = country_info(&country.country);
            CountryCard {
                code: country.country.clone(),
                flag: info.map_or(FALLBACK_FLAG, |i| i.flag),
                name: info.map_or_else(|| country.country.clone(), |i| i.name.to_string()),
                region: info.map_or(FALLBACK_REGION, |i| i.region),
                count: country.count,
                percentage: share.percentage,
            }
        })
        .collect()
}

/// Region rows with their share of the summed region counts.
pub fn regional_stats(regions: &[RegionCount]) -> Vec<ShareRow> {
    shares_of_sum(regions)
}

pub fn country_comparison_chart(countries: &[CountryCount]) -> ChartDataset {
    count_chart("Jobs by country", countries, COUNTRY_COMPARISON_LIMIT, country_label)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRank {
    pub rank: usize,
    pub company: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryCompanies {
    pub code: String,
    pub heading: String,
    pub companies: Vec<CompanyRank>,
}

/// Top three employers per country, countries listed in the order their first posting appears.
pub fn top_companies_by_country(jobs: &[JobPosting]) -> Vec<CountryCompanies> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for job in jobs {
        let code = job.country_code();
        let company = job
            .company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(PLACEHOLDER_UNKNOWN)
            .to_string();
        match grouped.iter_mut().find(|(c, _)| *c == code) {
            Some((_, companies)) => companies.push(company),
            None => grouped.push((code, vec![company])),
        }
    }

    grouped
        .into_iter()
        .map(|(code, companies)| {
            let heading = match country_info(&code) {
                Some(info) => format!("{} {}", info.flag, info.name),
                None => code.clone(),
            };
            let companies = top_n(tally(companies), TOP_COMPANIES_PER_COUNTRY, |(_, count)| *count)
                .into_iter()
                .enumerate()
                .map(|(i, (company, count))| CompanyRank {
                    rank: i + 1,
                    company: truncate_text(&company, COMPANY_CARD_TRUNCATE),
                    count,
                })
                .collect();
            CountryCompanies { code, heading, companies }
        })
        .collect()
}
