use std::ops::Range;

use regex::Regex;

use crate::model::task::Task;

/// Which field of a task matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Title,
    Description,
}

/// Case-insensitive substring test against title or description.
/// An empty query matches everything.
pub fn matches_search(task: &Task, query: &str) -> bool {
    match_field(task, query).is_some() || query.is_empty()
}

/// The first field containing `query` (title wins over description)
pub fn match_field(task: &Task, query: &str) -> Option<MatchField> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    if task.title.to_lowercase().contains(&needle) {
        Some(MatchField::Title)
    } else if task.description.to_lowercase().contains(&needle) {
        Some(MatchField::Description)
    } else {
        None
    }
}

/// Tasks matching `query`, in their original order
pub fn search<'a>(tasks: impl IntoIterator<Item = &'a Task>, query: &str) -> Vec<&'a Task> {
    tasks
        .into_iter()
        .filter(|t| matches_search(t, query))
        .collect()
}

/// Regex for highlighting occurrences of a literal query, ignoring case.
/// `None` for an empty query.
pub fn highlight_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
pub fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}
