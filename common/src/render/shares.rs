//! Percentage shares of an aggregate.

use crate::aggregates::DimensionCount;

/// `count / total * 100`; zero when there is nothing to divide by.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareRow {
    pub key: String,
    pub count: u64,
    /// Rounded to one decimal.
    pub percentage: f64,
}

impl ShareRow {
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Shares of each row relative to the sum of all rows, in input order.
pub fn shares_of_sum<T: DimensionCount>(items: &[T]) -> Vec<ShareRow> {
    let total: u64 = items.iter().map(DimensionCount::count).sum();
    shares_of_total(items, total)
}

/// Shares relative to an externally known total, e.g. the KPI job count.
pub fn shares_of_total<T: DimensionCount>(items: &[T], total: u64) -> Vec<ShareRow> {
    items
        .iter()
        .map(|item| ShareRow {
            key: item.key().to_string(),
            count: item.count(),
            percentage: round1(percentage(item.count(), total)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::{CountryCount, RegionCount};

    fn countries(counts: &[(&str, u64)]) -> Vec<CountryCount> {
        counts.iter().map(|(c, n)| CountryCount { country: c.to_string(), count: *n }).collect()
    }

    #[test]
    fn zero_total_does_not_divide() {
        assert_eq!(percentage(5, 0), 0.0);
        let rows = shares_of_sum(&countries(&[("us", 0), ("sg", 0)]));
        assert!(rows.iter().all(|r| r.percentage == 0.0));
        assert!(shares_of_sum::<CountryCount>(&[]).is_empty());
    }

    #[test]
    fn shares_sum_to_about_one_hundred() {
        let samples: Vec<Vec<(&str, u64)>> = vec![
            vec![("us", 1)],
            vec![("us", 1), ("gb", 1), ("sg", 1)],
            vec![("us", 523), ("gb", 211), ("de", 97), ("in", 64), ("sg", 13), ("nz", 7), ("nl", 3)],
            vec![("us", 2), ("gb", 3), ("de", 5), ("in", 7), ("sg", 11), ("nz", 13), ("nl", 17), ("it", 19)],
        ];
        for sample in samples {
            let rows = shares_of_sum(&countries(&sample));
            let sum: f64 = rows.iter().map(|r| r.percentage).sum();
            let tolerance = 0.05 * rows.len() as f64 + 1e-9;
            assert!((sum - 100.0).abs() <= tolerance, "sum {sum} for {sample:?}");
        }
    }

    #[test]
    fn rounding_to_one_decimal() {
        let rows = shares_of_sum(&[
            RegionCount { region: "Europe".into(), count: 1 },
            RegionCount { region: "Asia".into(), count: 2 },
        ]);
        assert_eq!(rows[0].percentage, 33.3);
        assert_eq!(rows[1].percentage, 66.7);
        assert_eq!(rows[1].percentage_label(), "66.7%");
    }

    #[test]
    fn external_total() {
        let rows = shares_of_total(&countries(&[("us", 25)]), 200);
        assert_eq!(rows[0].percentage, 12.5);
    }
}
