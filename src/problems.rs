use crate::models::{AppData, Difficulty, DifficultyFilter, NewProblem, Problem};
use chrono::NaiveDate;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("date must be YYYY-MM-DD, got '{0}'")]
    InvalidDate(String),

    #[error("problem '{0}' not found")]
    NotFound(String),
}

/// Split a comma-separated tag list, trimming each tag and dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    normalize_tags(raw.split(','))
}

fn normalize_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    tags.into_iter()
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Store a new problem at the front of the collection and return it.
///
/// The id is the millisecond timestamp `now_millis`, bumped until it does not
/// collide with an existing id.
pub fn add_problem(
    data: &mut AppData,
    new: NewProblem,
    now_millis: i64,
) -> Result<Problem, ProblemError> {
    let title = new.title.trim();
    if title.is_empty() {
        return Err(ProblemError::EmptyTitle);
    }
    let date = match NaiveDate::parse_from_str(new.date.trim(), DATE_FORMAT) {
        Ok(parsed) => parsed,
        Err(_) => return Err(ProblemError::InvalidDate(new.date)),
    };

    let problem = Problem {
        id: next_id(data, now_millis),
        title: title.to_string(),
        link: new.link,
        date: date.format(DATE_FORMAT).to_string(),
        difficulty: new.difficulty,
        solution: new.solution,
        time_complexity: new.time_complexity,
        space_complexity: new.space_complexity,
        tags: normalize_tags(new.tags.iter().map(String::as_str)),
    };

    data.problems.insert(0, problem.clone());
    Ok(problem)
}

fn next_id(data: &AppData, now_millis: i64) -> String {
    let mut candidate = now_millis;
    loop {
        let id = candidate.to_string();
        if !data.problems.iter().any(|problem| problem.id == id) {
            return id;
        }
        candidate = candidate.saturating_add(1);
    }
}

pub fn filter_problems(data: &AppData, filter: DifficultyFilter) -> Vec<Problem> {
    data.problems
        .iter()
        .filter(|problem| filter.matches(problem.difficulty))
        .cloned()
        .collect()
}

/// Remove the problem with `id`. Returns `false` if nothing matched.
pub fn delete_problem(data: &mut AppData, id: &str) -> bool {
    let before = data.problems.len();
    data.problems.retain(|problem| problem.id != id);
    data.problems.len() != before
}

pub fn sample_problem(today: NaiveDate) -> Problem {
    Problem {
        id: "1".to_string(),
        title: "Two Sum".to_string(),
        link: "https://leetcode.com/problems/two-sum/".to_string(),
        date: today.format(DATE_FORMAT).to_string(),
        difficulty: Difficulty::Easy,
        solution: "Used hash map to store numbers and their indices. For each number, check if complement exists in map.".to_string(),
        time_complexity: "O(n)".to_string(),
        space_complexity: "O(n)".to_string(),
        tags: vec!["Array".to_string(), "Hash Table".to_string()],
    }
}

/// Insert the sample problem into an empty collection. Returns whether it did.
pub fn seed_if_empty(data: &mut AppData, today: NaiveDate) -> bool {
    if !data.problems.is_empty() {
        return false;
    }
    data.problems.push(sample_problem(today));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_problem(title: &str, date: &str, difficulty: Difficulty) -> NewProblem {
        NewProblem {
            title: title.to_string(),
            link: String::new(),
            date: date.to_string(),
            difficulty,
            solution: String::new(),
            time_complexity: "O(n)".to_string(),
            space_complexity: "O(1)".to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn parse_tags_trims_and_drops_blanks() {
        assert_eq!(parse_tags("Array, Two Pointers ,, "), vec!["Array", "Two Pointers"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn add_inserts_newest_first() {
        let mut data = AppData::default();
        add_problem(&mut data, new_problem("First", "2026-01-01", Difficulty::Easy), 10).unwrap();
        add_problem(&mut data, new_problem("Second", "2026-01-02", Difficulty::Hard), 20).unwrap();

        let titles: Vec<_> = data.problems.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
        assert_eq!(data.problems[0].id, "20");
    }

    #[test]
    fn add_bumps_colliding_ids() {
        let mut data = AppData::default();
        let a = add_problem(&mut data, new_problem("A", "2026-01-01", Difficulty::Easy), 5).unwrap();
        let b = add_problem(&mut data, new_problem("B", "2026-01-01", Difficulty::Easy), 5).unwrap();
        let c = add_problem(&mut data, new_problem("C", "2026-01-01", Difficulty::Easy), 5).unwrap();
        assert_eq!(a.id, "5");
        assert_eq!(b.id, "6");
        assert_eq!(c.id, "7");
    }

    #[test]
    fn add_stores_zero_padded_date() {
        let mut data = AppData::default();
        let stored =
            add_problem(&mut data, new_problem("Unpadded", " 2026-1-5 ", Difficulty::Easy), 1)
                .unwrap();
        assert_eq!(stored.date, "2026-01-05");
        add_problem(&mut data, new_problem("February", "2026-02-01", Difficulty::Easy), 2).unwrap();
        add_problem(&mut data, new_problem("Padded", "2026-01-05", Difficulty::Easy), 3).unwrap();

        let chart = crate::stats::build_chart(&data);
        let dates: Vec<_> = chart.points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2026-01-05", "2026-02-01"]);
        assert_eq!(chart.points[0].solved, 2);
    }

    #[test]
    fn add_keeps_link_as_given() {
        let mut data = AppData::default();
        let mut new = new_problem("Linked", "2026-01-01", Difficulty::Easy);
        new.link = " https://leetcode.com/problems/two-sum/ ".into();
        let stored = add_problem(&mut data, new, 1).unwrap();
        assert_eq!(stored.link, " https://leetcode.com/problems/two-sum/ ");
    }

    #[test]
    fn add_normalizes_tags() {
        let mut data = AppData::default();
        let mut new = new_problem("Tagged", "2026-01-01", Difficulty::Medium);
        new.tags = vec![" Graph ".into(), "".into(), "BFS".into()];
        let stored = add_problem(&mut data, new, 1).unwrap();
        assert_eq!(stored.tags, vec!["Graph", "BFS"]);
    }

    #[test]
    fn add_rejects_blank_title_and_bad_date() {
        let mut data = AppData::default();
        let err = add_problem(&mut data, new_problem("   ", "2026-01-01", Difficulty::Easy), 1)
            .unwrap_err();
        assert_eq!(err, ProblemError::EmptyTitle);

        let err = add_problem(&mut data, new_problem("Ok", "01/05/2026", Difficulty::Easy), 1)
            .unwrap_err();
        assert!(matches!(err, ProblemError::InvalidDate(_)));
        assert!(data.problems.is_empty());
    }

    #[test]
    fn filter_keeps_order_and_difficulty() {
        let mut data = AppData::default();
        add_problem(&mut data, new_problem("E1", "2026-01-01", Difficulty::Easy), 1).unwrap();
        add_problem(&mut data, new_problem("H1", "2026-01-02", Difficulty::Hard), 2).unwrap();
        add_problem(&mut data, new_problem("E2", "2026-01-03", Difficulty::Easy), 3).unwrap();

        let easy: Vec<_> = filter_problems(&data, DifficultyFilter::Easy)
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(easy, vec!["E2", "E1"]);
        assert_eq!(filter_problems(&data, DifficultyFilter::All).len(), 3);
        assert!(filter_problems(&data, DifficultyFilter::Medium).is_empty());
    }

    #[test]
    fn delete_removes_only_matching_id() {
        let mut data = AppData::default();
        add_problem(&mut data, new_problem("Keep", "2026-01-01", Difficulty::Easy), 1).unwrap();
        add_problem(&mut data, new_problem("Drop", "2026-01-01", Difficulty::Easy), 2).unwrap();

        assert!(delete_problem(&mut data, "2"));
        assert!(!delete_problem(&mut data, "2"));
        assert_eq!(data.problems.len(), 1);
        assert_eq!(data.problems[0].title, "Keep");
    }

    #[test]
    fn seed_only_fills_empty_collection() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let mut data = AppData::default();
        assert!(seed_if_empty(&mut data, today));
        assert_eq!(data.problems[0].title, "Two Sum");
        assert_eq!(data.problems[0].date, "2026-03-14");
        assert!(!seed_if_empty(&mut data, today));
        assert_eq!(data.problems.len(), 1);
    }
}
