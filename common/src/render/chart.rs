//! Bar chart descriptors; the frontend draws them as proportional bars.

use crate::{aggregates::DimensionCount, countries::country_name, render::ranking::top_n};

pub const PALETTE: [&str; 8] = ["#8b5cf6", "#06b6d4", "#f43f5e", "#10b981", "#f59e0b", "#3b82f6", "#ec4899", "#a855f7"];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    pub value_label: String,
    pub color: String,
    /// Navigation key for clickable bars, e.g. a country code.
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub title: String,
    pub bars: Vec<ChartBar>,
}

impl ChartDataset {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Largest value, floored at 1 so bar widths never divide by zero.
    pub fn scale_max(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(1.0, f64::max)
    }

    /// Bar length as a percentage of the scale.
    pub fn width_percent(&self, bar: &ChartBar) -> f64 {
        (bar.value / self.scale_max() * 100.0).clamp(0.0, 100.0)
    }
}

/// Count chart over an aggregate, largest first, keeping `limit` rows.
pub fn count_chart<T: DimensionCount + Clone>(title: &str, items: &[T], limit: usize, label: impl Fn(&str) -> String) -> ChartDataset {
    let rows = top_n(items.to_vec(), limit, |item| item.count());
    ChartDataset {
        title: title.to_string(),
        bars: rows
            .iter()
            .enumerate()
            .map(|(i, item)| ChartBar {
                label: label(item.key()),
                value: item.count() as f64,
                value_label: crate::format::format_count(item.count()),
                color: palette_color(i).to_string(),
                target: Some(item.key().to_string()),
            })
            .collect(),
    }
}

pub fn country_label(code: &str) -> String {
    country_name(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::CountryCount;

    #[test]
    fn count_chart_takes_largest_rows() {
        let data: Vec<CountryCount> = [("us", 50), ("sg", 80), ("gb", 10)]
            .into_iter()
            .map(|(c, n)| CountryCount { country: c.into(), count: n })
            .collect();
        let chart = count_chart("Jobs by country", &data, 2, country_label);
        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].label, "Singapore");
        assert_eq!(chart.bars[0].target.as_deref(), Some("sg"));
        assert_eq!(chart.width_percent(&chart.bars[0]), 100.0);
        assert_eq!(chart.width_percent(&chart.bars[1]), 62.5);
    }

    #[test]
    fn empty_chart_scale_is_safe() {
        let chart = ChartDataset { title: String::new(), bars: vec![] };
        assert!(chart.is_empty());
        assert_eq!(chart.scale_max(), 1.0);
    }
}
