use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::countries_page::CountriesPage;
use crate::pages::dashboard_page::DashboardPage;
use crate::pages::home_page::HomePage;
use crate::pages::jobs_page::JobsPage;
use crate::pages::map_page::MapPage;
use crate::pages::skills_page::SkillsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/dashboard")]
    DashboardPage {},


    #[route("/jobs?:country&:countries&:keyword&:category")]
    JobsPage {
        country: String,
        countries: String,
        keyword: String,
        category: String,
    },


    #[route("/countries")]
    CountriesPage {},

    #[route("/skills")]
    SkillsPage {},

    #[route("/map")]
    MapPage {},

}

impl Route {
    pub fn jobs() -> Self {
        Self::jobs_with("", "", "", "")
    }

    /// Jobs listing pre-filtered to one or more comma separated country codes.
    pub fn jobs_for_countries(codes: &str) -> Self {
        if codes.contains(',') {
            Self::jobs_with("", codes, "", "")
        } else {
            Self::jobs_with(codes, "", "", "")
        }
    }

    pub fn jobs_for_keyword(keyword: &str) -> Self {
        Self::jobs_with("", "", keyword, "")
    }

    pub fn jobs_for_category(category: &str) -> Self {
        Self::jobs_with("", "", "", category)
    }

    fn jobs_with(country: &str, countries: &str, keyword: &str, category: &str) -> Self {
        Self::JobsPage {
            country: country.to_string(),
            countries: countries.to_string(),
            keyword: keyword.to_string(),
            category: category.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_link_carries_only_the_category() {
        let Route::JobsPage { country, countries, keyword, category } = Route::jobs_for_category("Data Engineer") else {
            panic!("not a jobs route");
        };
        assert_eq!(category, "Data Engineer");
        assert!(country.is_empty() && countries.is_empty() && keyword.is_empty());
    }

    #[test]
    fn several_countries_use_the_list_parameter() {
        let Route::JobsPage { country, countries, .. } = Route::jobs_for_countries("SG,US") else {
            panic!("not a jobs route");
        };
        assert_eq!(countries, "SG,US");
        assert!(country.is_empty());
    }
}
