//! Static site content and category filtering
//!
//! The programs listing and the public gallery both offer a row of category
//! buttons; `all` shows everything, any other value shows exactly the items
//! tagged with that category.

pub mod programs;

pub use programs::{Program, ADMISSION_PROGRAMS, PARTNERSHIP_TYPES, PROGRAMS, PROGRAM_CATEGORIES, STUDY_MODES};

/// Selection value that disables filtering
pub const ALL_CATEGORIES: &str = "all";

/// Category ids for the public gallery, `all` first
pub const GALLERY_CATEGORIES: &[(&str, &str)] = &[
    (ALL_CATEGORIES, "All Photos"),
    ("events", "Events"),
    ("academics", "Academics"),
    ("graduation", "Graduation"),
    ("campus", "Campus Life"),
    ("training", "Training"),
];

/// Categories offered when an admin uploads a gallery image
pub const UPLOAD_CATEGORIES: &[&str] = &[
    "events",
    "academics",
    "graduation",
    "campus",
    "training",
    "ceremonies",
    "workshops",
    "conferences",
];

/// Anything that can be listed under a category button
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Items matching `selection`, in their original order
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], selection: &str) -> Vec<&'a T> {
    if selection == ALL_CATEGORIES {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.category() == selection).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tagged(String);

    impl Categorized for Tagged {
        fn category(&self) -> &str {
            &self.0
        }
    }

    #[test]
    fn test_all_returns_full_program_list() {
        assert_eq!(filter_by_category(PROGRAMS, ALL_CATEGORIES).len(), PROGRAMS.len());
    }

    #[test]
    fn test_program_categories_partition_catalog() {
        let total: usize = PROGRAM_CATEGORIES
            .iter()
            .filter(|(id, _)| *id != ALL_CATEGORIES)
            .map(|(id, _)| filter_by_category(PROGRAMS, id).len())
            .sum();
        assert_eq!(total, PROGRAMS.len());
        assert_eq!(filter_by_category(PROGRAMS, "skill").len(), 2);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(filter_by_category(PROGRAMS, "bootcamp").is_empty());
    }

    proptest! {
        #[test]
        fn prop_filter_is_exact_subset(
            tags in proptest::collection::vec("(events|academics|campus|training)", 0..40),
            selection in "(all|events|academics|campus|training|graduation)",
        ) {
            let items: Vec<Tagged> = tags.into_iter().map(Tagged).collect();
            let filtered = filter_by_category(&items, &selection);

            let expected: Vec<&Tagged> = if selection == ALL_CATEGORIES {
                items.iter().collect()
            } else {
                items.iter().filter(|t| t.0 == selection).collect()
            };
            prop_assert_eq!(filtered, expected);
        }
    }
}
