use crate::models::{AppData, ChartResponse, Difficulty, ProgressPoint, StatsResponse};
use crate::problems::DATE_FORMAT;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub fn build_stats(data: &AppData) -> StatsResponse {
    let mut stats = StatsResponse {
        total: data.problems.len(),
        ..StatsResponse::default()
    };
    for problem in &data.problems {
        match problem.difficulty {
            Difficulty::Easy => stats.easy += 1,
            Difficulty::Medium => stats.medium += 1,
            Difficulty::Hard => stats.hard += 1,
        }
    }
    stats
}

/// Cumulative problems solved, one point per distinct date in ascending order.
pub fn build_chart(data: &AppData) -> ChartResponse {
    let mut per_day: BTreeMap<&str, u64> = BTreeMap::new();
    for problem in &data.problems {
        *per_day.entry(problem.date.as_str()).or_default() += 1;
    }

    let mut total = 0u64;
    let points = per_day
        .into_iter()
        .map(|(date, solved)| {
            total = total.saturating_add(solved);
            ProgressPoint {
                date: date.to_string(),
                label: format_date(date),
                solved,
                total,
            }
        })
        .collect();

    ChartResponse { points }
}

/// `2026-01-05` becomes `January 5, 2026`; unparsable input is returned as-is.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Problem;

    fn problem(id: &str, date: &str, difficulty: Difficulty) -> Problem {
        Problem {
            id: id.to_string(),
            title: format!("Problem {id}"),
            link: String::new(),
            date: date.to_string(),
            difficulty,
            solution: String::new(),
            time_complexity: String::new(),
            space_complexity: String::new(),
            tags: Vec::new(),
        }
    }

    fn sample() -> AppData {
        AppData {
            problems: vec![
                problem("4", "2026-01-07", Difficulty::Hard),
                problem("3", "2026-01-05", Difficulty::Medium),
                problem("2", "2025-12-31", Difficulty::Easy),
                problem("1", "2026-01-05", Difficulty::Easy),
            ],
        }
    }

    #[test]
    fn stats_count_each_difficulty() {
        let stats = build_stats(&sample());
        assert_eq!(
            stats,
            StatsResponse {
                total: 4,
                easy: 2,
                medium: 1,
                hard: 1,
            }
        );
        assert_eq!(stats.easy + stats.medium + stats.hard, stats.total);
    }

    #[test]
    fn stats_empty_collection_is_zero() {
        assert_eq!(build_stats(&AppData::default()), StatsResponse::default());
    }

    #[test]
    fn chart_groups_sorts_and_accumulates() {
        let chart = build_chart(&sample());
        let dates: Vec<_> = chart.points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-12-31", "2026-01-05", "2026-01-07"]);

        let solved: Vec<_> = chart.points.iter().map(|p| p.solved).collect();
        assert_eq!(solved, vec![1, 2, 1]);

        let totals: Vec<_> = chart.points.iter().map(|p| p.total).collect();
        assert_eq!(totals, vec![1, 3, 4]);
        assert_eq!(chart.points[1].label, "January 5, 2026");
    }

    #[test]
    fn chart_empty_collection_has_no_points() {
        assert!(build_chart(&AppData::default()).points.is_empty());
    }

    #[test]
    fn format_date_passes_through_garbage() {
        assert_eq!(format_date("2024-02-29"), "February 29, 2024");
        assert_eq!(format_date("someday"), "someday");
    }
}
