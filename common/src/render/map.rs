//! Region markers for the world map page.

use crate::{
    aggregates::RegionCount,
    format::format_count,
    render::shares::{percentage, round1},
};

/// Width and height of the map's coordinate space.
pub const MAP_WIDTH: f64 = 1000.0;
pub const MAP_HEIGHT: f64 = 500.0;

pub const MIN_MARKER_RADIUS: f64 = 30.0;
pub const MAX_MARKER_RADIUS: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub name: &'static str,
    pub countries: &'static [&'static str],
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
}

pub static MAP_REGIONS: [MapRegion; 3] = [
    MapRegion { name: "North America", countries: &["US", "CA"], color: "#10b981", x: 150.0, y: 100.0 },
    MapRegion { name: "Europe", countries: &["GB", "DE", "NL"], color: "#06b6d4", x: 500.0, y: 120.0 },
    MapRegion { name: "Asia Pacific", countries: &["AU", "SG", "NZ"], color: "#8b5cf6", x: 750.0, y: 250.0 },
];

pub fn map_region(name: &str) -> Option<&'static MapRegion> {
    MAP_REGIONS.iter().find(|r| r.name == name)
}

/// Marker radius grows with job count, one unit per ten jobs, within fixed bounds.
pub fn marker_radius(jobs: u64) -> f64 {
    (jobs as f64 / 10.0).clamp(MIN_MARKER_RADIUS, MAX_MARKER_RADIUS)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionMarker {
    pub region: &'static MapRegion,
    pub jobs: u64,
    pub jobs_label: String,
    pub radius: f64,
}

impl RegionMarker {
    /// Horizontal center as a percentage of the map width.
    pub fn left_percent(&self) -> f64 {
        self.region.x / MAP_WIDTH * 100.0
    }

    pub fn top_percent(&self) -> f64 {
        self.region.y / MAP_HEIGHT * 100.0
    }

    /// Diameter as a percentage of the map width.
    pub fn diameter_percent(&self) -> f64 {
        self.radius * 2.0 / MAP_WIDTH * 100.0
    }
}

fn jobs_in(region: &str, counts: &[RegionCount]) -> u64 {
    counts.iter().filter(|c| c.region == region).map(|c| c.count).sum()
}

/// One marker per map region; regions missing from the aggregate count zero.
pub fn region_markers(counts: &[RegionCount]) -> Vec<RegionMarker> {
    MAP_REGIONS
        .iter()
        .map(|region| {
            let jobs = jobs_in(region.name, counts);
            RegionMarker { region, jobs, jobs_label: format_count(jobs), radius: marker_radius(jobs) }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionDetails {
    pub name: &'static str,
    pub jobs: String,
    pub country_count: usize,
    pub percentage: String,
    /// Country codes for the jobs listing, e.g. `GB,DE,NL`.
    pub jobs_countries: String,
}

pub fn region_details(name: &str, counts: &[RegionCount], total_jobs: u64) -> Option<RegionDetails> {
    let region = map_region(name)?;
    let jobs = jobs_in(region.name, counts);
    Some(RegionDetails {
        name: region.name,
        jobs: format_count(jobs),
        country_count: region.countries.len(),
        percentage: format!("{:.1}%", round1(percentage(jobs, total_jobs))),
        jobs_countries: region.countries.join(","),
    })
}
