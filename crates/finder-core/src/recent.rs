//! Recent search keywords.

use serde::{Deserialize, Serialize};

/// Prior keywords, most recent first, without duplicates.
///
/// Duplicates compare case-insensitively after trimming; the first (most
/// recent) spelling wins. Length bounds are left to whoever produces the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct RecentSearchList {
    keywords: Vec<String>,
}

impl RecentSearchList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keyword as the most recent one, keeping at most `limit`.
    pub fn record(&mut self, keyword: &str, limit: usize) {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return;
        }
        let key = keyword.to_lowercase();
        self.keywords.retain(|k| k.to_lowercase() != key);
        self.keywords.insert(0, keyword.to_string());
        self.keywords.truncate(limit);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.keywords.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl From<Vec<String>> for RecentSearchList {
    fn from(keywords: Vec<String>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let keywords = keywords
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty() && seen.insert(k.to_lowercase()))
            .collect();
        Self { keywords }
    }
}

impl From<RecentSearchList> for Vec<String> {
    fn from(list: RecentSearchList) -> Self {
        list.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_server_list_dedupes() {
        let list = RecentSearchList::from(vec![
            "mouse".to_string(),
            "Keyboard".to_string(),
            "Mouse".to_string(),
            " ".to_string(),
            "keyboard ".to_string(),
            "monitor".to_string(),
        ]);
        let keywords: Vec<&str> = list.iter().collect();
        assert_eq!(keywords, vec!["mouse", "Keyboard", "monitor"]);
    }

    #[test]
    fn test_record_moves_to_front() {
        let mut list = RecentSearchList::new();
        list.record("mouse", 10);
        list.record("keyboard", 10);
        list.record("MOUSE", 10);

        let keywords: Vec<&str> = list.iter().collect();
        assert_eq!(keywords, vec!["MOUSE", "keyboard"]);
    }

    #[test]
    fn test_record_truncates() {
        let mut list = RecentSearchList::new();
        for k in ["a", "b", "c", "d"] {
            list.record(k, 3);
        }
        let keywords: Vec<&str> = list.iter().collect();
        assert_eq!(keywords, vec!["d", "c", "b"]);
    }

    #[test]
    fn test_json_is_plain_array() {
        let list: RecentSearchList = serde_json::from_str(r#"["a", "b", "a"]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["a","b"]"#);
    }
}
