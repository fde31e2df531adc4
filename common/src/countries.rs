//! Static lookup tables for the countries and regions covered by the dataset.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub region: &'static str,
}

pub static COUNTRIES: [CountryInfo; 8] = [
    CountryInfo { code: "SG", name: "Singapore", flag: "🇸🇬", region: "Asia" },
    CountryInfo { code: "US", name: "United States", flag: "🇺🇸", region: "North America" },
    CountryInfo { code: "GB", name: "United Kingdom", flag: "🇬🇧", region: "Europe" },
    CountryInfo { code: "DE", name: "Germany", flag: "🇩🇪", region: "Europe" },
    CountryInfo { code: "IN", name: "India", flag: "🇮🇳", region: "Asia" },
    CountryInfo { code: "IT", name: "Italy", flag: "🇮🇹", region: "Europe" },
    CountryInfo { code: "NL", name: "Netherlands", flag: "🇳🇱", region: "Europe" },
    CountryInfo { code: "NZ", name: "New Zealand", flag: "🇳🇿", region: "Oceania" },
];

pub const FALLBACK_FLAG: &str = "🌏";
pub const FALLBACK_REGION: &str = "Other";

/// Case-insensitive lookup by ISO code.
pub fn country_info(code: &str) -> Option<&'static CountryInfo> {
    let code = code.trim();
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// `🇸🇬 Singapore`, or the upper-cased raw code for countries outside the table.
pub fn country_display(code: &str) -> String {
    match country_info(code) {
        Some(info) => format!("{} {}", info.flag, info.name),
        None => code.trim().to_uppercase(),
    }
}

pub fn country_name(code: &str) -> String {
    country_info(code)
        .map(|info| info.name.to_string())
        .unwrap_or_else(|| code.trim().to_uppercase())
}

/// Job categories offered by the filter panel.
pub const FILTER_CATEGORIES: [&str; 3] = ["Data Analyst", "Data Engineer", "Software Engineer"];

/// Skills offered by the filter panel; the lower-cased name is the query value.
pub const FILTER_SKILLS: [&str; 5] = ["Python", "SQL", "AWS", "Excel", "English"];
