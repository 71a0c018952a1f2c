use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A solved problem as it is stored on disk and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub link: String,
    pub date: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub time_complexity: String,
    #[serde(default)]
    pub space_complexity: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The whole collection, newest first. Persisted as a bare JSON array.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct AppData {
    pub problems: Vec<Problem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProblem {
    pub title: String,
    #[serde(default)]
    pub link: String,
    pub date: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub time_complexity: String,
    #[serde(default)]
    pub space_complexity: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body of the HTML form; tags arrive as one comma-separated field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProblemForm {
    pub title: String,
    #[serde(default)]
    pub link: String,
    pub date: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub time_complexity: String,
    #[serde(default)]
    pub space_complexity: String,
    #[serde(default)]
    pub tags: String,
}

impl From<NewProblemForm> for NewProblem {
    fn from(form: NewProblemForm) -> Self {
        Self {
            tags: crate::problems::parse_tags(&form.tags),
            title: form.title,
            link: form.link,
            date: form.date,
            difficulty: form.difficulty,
            solution: form.solution,
            time_complexity: form.time_complexity,
            space_complexity: form.space_complexity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyFilter {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
}

impl DifficultyFilter {
    pub fn matches(self, difficulty: Difficulty) -> bool {
        match self {
            Self::All => true,
            Self::Easy => difficulty == Difficulty::Easy,
            Self::Medium => difficulty == Difficulty::Medium,
            Self::Hard => difficulty == Difficulty::Hard,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub difficulty: DifficultyFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatsResponse {
    pub total: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub date: String,
    pub label: String,
    pub solved: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChartResponse {
    pub points: Vec<ProgressPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_problem_uses_browser_field_names() {
        let raw = r#"[{
            "id": "1700000000000",
            "title": "Valid Parentheses",
            "link": "https://leetcode.com/problems/valid-parentheses/",
            "date": "2026-01-05",
            "difficulty": "easy",
            "solution": "Stack of open brackets.",
            "timeComplexity": "O(n)",
            "spaceComplexity": "O(n)",
            "tags": ["Stack", "String"]
        }]"#;

        let data: AppData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.problems.len(), 1);
        let problem = &data.problems[0];
        assert_eq!(problem.difficulty, Difficulty::Easy);
        assert_eq!(problem.time_complexity, "O(n)");
        assert_eq!(problem.tags, vec!["Stack", "String"]);

        let back = serde_json::to_value(&data).unwrap();
        assert!(back.is_array());
        assert_eq!(back[0]["spaceComplexity"], "O(n)");
    }

    #[test]
    fn filter_all_matches_every_difficulty() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(DifficultyFilter::All.matches(difficulty));
        }
        assert!(DifficultyFilter::Hard.matches(Difficulty::Hard));
        assert!(!DifficultyFilter::Hard.matches(Difficulty::Medium));
    }

    #[test]
    fn form_tags_are_split() {
        let form = NewProblemForm {
            title: "LRU Cache".into(),
            link: String::new(),
            date: "2026-02-01".into(),
            difficulty: Difficulty::Medium,
            solution: String::new(),
            time_complexity: String::new(),
            space_complexity: String::new(),
            tags: " Design, Hash Table ,,Linked List ".into(),
        };
        let new: NewProblem = form.into();
        assert_eq!(new.tags, vec!["Design", "Hash Table", "Linked List"]);
    }
}
