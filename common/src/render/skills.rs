//! Skill demand views: skill cards, skills per category and skill pairings.

use crate::{
    aggregates::SkillShare,
    countries::FILTER_CATEGORIES,
    job_const::{TOP_SKILL_PAIRS, TOP_SKILLS},
    job_listing::JobPosting,
    render::{
        ranking::{tally, top_n},
        shares::{percentage, round1},
    },
};

/// Keywords searched for in job descriptions, in display order.
pub const SKILL_VOCABULARY: [&str; 5] = ["python", "sql", "aws", "excel", "english"];

pub fn skill_icon(skill: &str) -> &'static str {
    match skill.to_lowercase().as_str() {
        "python" => "🐍",
        "sql" => "🗄️",
        "aws" => "☁️",
        "excel" => "📊",
        "english" => "🗣️",
        _ => "🎯",
    }
}

pub fn skill_color(skill: &str) -> &'static str {
    match skill.to_lowercase().as_str() {
        "python" => "#8b5cf6",
        "sql" => "#06b6d4",
        "aws" => "#f59e0b",
        "excel" => "#10b981",
        "english" => "#f43f5e",
        _ => "#8b5cf6",
    }
}

/// Vocabulary skills mentioned in a description, in vocabulary order.
pub fn skills_in(description: &str) -> Vec<&'static str> {
    let description = description.to_lowercase();
    SKILL_VOCABULARY.into_iter().filter(|skill| description.contains(skill)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCard {
    pub rank: usize,
    pub skill: String,
    pub icon: &'static str,
    pub color: &'static str,
    pub count: u64,
    pub percentage: f64,
}

impl SkillCard {
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }

    /// Keyword for the jobs listing link.
    pub fn jobs_keyword(&self) -> String {
        self.skill.to_lowercase()
    }
}

/// Top skills, using the backend percentage when present and `count / total_jobs` otherwise.
pub fn skill_cards(skills: &[SkillShare], total_jobs: u64) -> Vec<SkillCard> {
    top_n(skills.to_vec(), TOP_SKILLS, |s| s.count)
        .into_iter()
        .enumerate()
        .map(|(i, s)| SkillCard {
            rank: i + 1,
            icon: skill_icon(&s.skill),
            color: skill_color(&s.skill),
            count: s.count,
            percentage: round1(s.percentage.filter(|p| p.is_finite()).unwrap_or_else(|| percentage(s.count, total_jobs))),
            skill: s.skill,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillPair {
    pub rank: usize,
    pub first: &'static str,
    pub second: &'static str,
    pub count: u64,
}

impl SkillPair {
    pub fn label(&self) -> String {
        format!("{} + {}", self.first, self.second)
    }

    /// Keyword the jobs listing receives for this pairing, e.g. `python sql`.
    pub fn jobs_keyword(&self) -> String {
        format!("{} {}", self.first, self.second)
    }
}

/// Unordered skill pairs from descriptions mentioning two or more skills, most frequent first.
pub fn skill_pairs(jobs: &[JobPosting]) -> Vec<SkillPair> {
    let pairs = jobs.iter().flat_map(|job| {
        let found = skills_in(&job.description_lowercase());
        let mut pairs = Vec::new();
        for (i, a) in found.iter().enumerate() {
            for b in &found[i + 1..] {
                pairs.push(if a <= b { (*a, *b) } else { (*b, *a) });
            }
        }
        pairs
    });
    top_n(tally(pairs), TOP_SKILL_PAIRS, |(_, count)| *count)
        .into_iter()
        .enumerate()
        .map(|(i, ((first, second), count))| SkillPair { rank: i + 1, first, second, count })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySkillRow {
    pub skill: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySkillBreakdown {
    pub category: &'static str,
    pub job_count: u64,
    pub skills: Vec<CategorySkillRow>,
}

/// Share of each vocabulary skill among the jobs of each filterable category; empty categories are skipped.
pub fn skills_by_category(jobs: &[JobPosting]) -> Vec<CategorySkillBreakdown> {
    FILTER_CATEGORIES
        .into_iter()
        .filter_map(|category| {
            let in_category: Vec<Vec<&'static str>> = jobs
                .iter()
                .filter(|job| job.category.as_deref() == Some(category))
                .map(|job| skills_in(&job.description_lowercase()))
                .collect();
            let job_count = in_category.len() as u64;
            if job_count == 0 {
                return None;
            }
            let skills = SKILL_VOCABULARY
                .into_iter()
                .map(|skill| {
                    let count = in_category.iter().filter(|found| found.contains(&skill)).count() as u64;
                    CategorySkillRow {
                        skill,
                        icon: skill_icon(skill),
                        color: skill_color(skill),
                        percentage: round1(percentage(count, job_count)),
                    }
                })
                .collect();
            Some(CategorySkillBreakdown { category, job_count, skills })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(category: Option<&str>, description: &str) -> JobPosting {
        JobPosting {
            category: category.map(str::to_string),
            description: Some(description.to_string()),
            ..JobPosting::default()
        }
    }

    #[test]
    fn finds_vocabulary_case_insensitively() {
        assert_eq!(skills_in("Strong SQL and Python; AWS a plus"), vec!["python", "sql", "aws"]);
        assert!(skills_in("Java only").is_empty());
    }

    #[test]
    fn pairs_are_counted_and_ranked() {
        let jobs = vec![
            job(None, "python sql"),
            job(None, "SQL, Python and Excel"),
            job(None, "excel and english"),
            job(None, "only python"),
            job(None, "english, excel"),
        ];
        let pairs = skill_pairs(&jobs);
        let labels: Vec<(String, u64)> = pairs.iter().map(|p| (p.label(), p.count)).collect();
        assert_eq!(
            labels,
            vec![
                ("python + sql".to_string(), 2),
                ("english + excel".to_string(), 2),
                ("excel + python".to_string(), 1),
                ("excel + sql".to_string(), 1),
            ]
        );
        assert_eq!(pairs[0].rank, 1);
        assert_eq!(pairs[0].jobs_keyword(), "python sql");
    }

    #[test]
    fn pairs_capped_at_six() {
        let jobs = vec![job(None, "python sql aws excel english")];
        let pairs = skill_pairs(&jobs);
        assert_eq!(pairs.len(), TOP_SKILL_PAIRS);
        assert!(pairs.iter().all(|p| p.count == 1));
    }

    #[test]
    fn cards_prefer_backend_percentage() {
        let skills = vec![
            SkillShare { skill: "SQL".into(), count: 30, percentage: None },
            SkillShare { skill: "Python".into(), count: 45, percentage: Some(30.04) },
        ];
        let cards = skill_cards(&skills, 150);
        assert_eq!(cards[0].skill, "Python");
        assert_eq!(cards[0].percentage, 30.0);
        assert_eq!(cards[0].icon, "🐍");
        assert_eq!(cards[1].percentage, 20.0);
        assert_eq!(cards[1].jobs_keyword(), "sql");

        let no_total = skill_cards(&[SkillShare { skill: "AWS".into(), count: 3, percentage: None }], 0);
        assert_eq!(no_total[0].percentage, 0.0);
    }

    #[test]
    fn category_breakdown_skips_empty_categories() {
        let jobs = vec![
            job(Some("Data Analyst"), "excel sql"),
            job(Some("Data Analyst"), "excel"),
            job(Some("Marketing"), "excel"),
        ];
        let breakdown = skills_by_category(&jobs);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].category, "Data Analyst");
        assert_eq!(breakdown[0].job_count, 2);
        let excel = breakdown[0].skills.iter().find(|s| s.skill == "excel").unwrap();
        let sql = breakdown[0].skills.iter().find(|s| s.skill == "sql").unwrap();
        assert_eq!(excel.percentage, 100.0);
        assert_eq!(sql.percentage, 50.0);
    }
}
