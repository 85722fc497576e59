//! Derives the display list from the collection plus the active filters.
//! Pure functions only; the repository owns the data.

use crate::models::{Category, Note};

/// The category chip in the filters sheet. "All" is a real choice there,
/// not a category, so it gets its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(cat) => cat.as_str(),
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "All" => Self::All,
            other => Self::Only(Category::parse(other)),
        }
    }

    fn allows(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

/// Apply the category filter and the search query, both conjunctively.
/// The query matches case-insensitively as a substring of title or content;
/// it is used exactly as given (trimming is the search box's business).
/// Surviving notes keep their relative order.
pub fn filter_notes(notes: &[Note], query: &str, category: CategoryFilter) -> Vec<Note> {
    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| category.allows(note.category))
        .filter(|note| {
            needle.is_empty()
                || note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteDraft;

    fn note(title: &str, content: &str, category: Category) -> Note {
        Note::new(NoteDraft::new(title, content).with_category(category))
    }

    fn sample() -> Vec<Note> {
        vec![
            note("Groceries", "milk, eggs", Category::Personal),
            note("Standup", "sync with team", Category::Work),
            note("App idea", "note-taking but for dogs", Category::Ideas),
            note("Renew passport", "before June", Category::Tasks),
        ]
    }

    #[test]
    fn test_no_filters_returns_all_in_order() {
        let notes = sample();
        let result = filter_notes(&notes, "", CategoryFilter::All);
        assert_eq!(result, notes);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let mut notes = sample();
        notes.push(note("Homework", "due friday", Category::Tasks));

        let result = filter_notes(&notes, "WORK", CategoryFilter::All);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Homework");

        let result = filter_notes(&notes, "SYNC", CategoryFilter::All);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Standup");
    }

    #[test]
    fn test_query_matches_title_or_content() {
        let notes = sample();
        let by_title = filter_notes(&notes, "groceries", CategoryFilter::All);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Groceries");

        let by_content = filter_notes(&notes, "milk", CategoryFilter::All);
        assert_eq!(by_content.len(), 1);
        assert_eq!(by_content[0].title, "Groceries");
    }

    #[test]
    fn test_category_filter_alone() {
        let notes = sample();
        let result = filter_notes(&notes, "", CategoryFilter::Only(Category::Work));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Standup");
    }

    #[test]
    fn test_filters_compose_conjunctively() {
        let mut notes = sample();
        notes.push(note("Standup notes", "retro follow-ups", Category::Personal));

        // "standup" matches two notes, but only one is Work.
        let result = filter_notes(&notes, "standup", CategoryFilter::Only(Category::Work));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, Category::Work);
    }

    #[test]
    fn test_filter_is_stable() {
        let notes = vec![
            note("a milk", "", Category::Personal),
            note("b", "no match", Category::Personal),
            note("c milk", "", Category::Personal),
        ];
        let result = filter_notes(&notes, "milk", CategoryFilter::All);
        let titles: Vec<&str> = result.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["a milk", "c milk"]);
    }

    #[test]
    fn test_empty_collection() {
        assert!(filter_notes(&[], "anything", CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let notes = vec![
            note("one two", "", Category::Personal),
            note("onetwo", "", Category::Personal),
        ];
        let result = filter_notes(&notes, " ", CategoryFilter::All);
        // A lone space only matches notes that actually contain one.
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "one two");
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Tasks"),
            CategoryFilter::Only(Category::Tasks)
        );
        for cat in Category::ALL {
            let filter = CategoryFilter::Only(cat);
            assert_eq!(CategoryFilter::parse(filter.as_str()), filter);
        }
    }

    #[test]
    fn test_groceries_standup_scenario() {
        let collection = vec![
            note("Groceries", "milk, eggs", Category::Personal),
            note("Standup", "sync with team", Category::Work),
        ];

        let milk = filter_notes(&collection, "milk", CategoryFilter::All);
        assert_eq!(milk.len(), 1);
        assert_eq!(milk[0].title, "Groceries");

        let work = filter_notes(&collection, "", CategoryFilter::Only(Category::Work));
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].title, "Standup");
    }
}
