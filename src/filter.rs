//! Category filter behind the project gallery. Pure derivation over the
//! static project catalog; the gallery component owns one `ProjectFilter`
//! and re-renders from `visible()`.

use crate::catalog::Project;

/// Sentinel category showing the whole catalog.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectFilter {
    active_category: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ProjectFilter {
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn select_category(&mut self, category: &str) {
        self.active_category = category.to_string();
    }

    /// Projects visible under the active category, in catalog order. The
    /// "All" sentinel returns everything; an unmatched category yields an
    /// empty set, which the grid renders as nothing.
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        if self.active_category == ALL_CATEGORIES {
            projects.iter().collect()
        } else {
            projects
                .iter()
                .filter(|project| project.category == self.active_category)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CATEGORIES, PROJECTS};

    #[test]
    fn defaults_to_all_and_shows_the_full_catalog() {
        let filter = ProjectFilter::default();
        assert_eq!(filter.active_category(), ALL_CATEGORIES);
        let visible = filter.visible(PROJECTS);
        assert_eq!(visible.len(), PROJECTS.len());
        let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>());
    }

    #[test]
    fn each_category_yields_exactly_its_projects_in_order() {
        for category in CATEGORIES.iter().filter(|c| **c != ALL_CATEGORIES) {
            let mut filter = ProjectFilter::default();
            filter.select_category(category);

            let visible = filter.visible(PROJECTS);
            let expected: Vec<u32> = PROJECTS
                .iter()
                .filter(|p| p.category == *category)
                .map(|p| p.id)
                .collect();
            assert_eq!(
                visible.iter().map(|p| p.id).collect::<Vec<_>>(),
                expected,
                "category {category}"
            );
            assert!(visible.iter().all(|p| p.category == *category));
        }
    }

    #[test]
    fn selecting_the_same_category_twice_changes_nothing() {
        let mut filter = ProjectFilter::default();
        filter.select_category("Carpentry");
        let first: Vec<u32> = filter.visible(PROJECTS).iter().map(|p| p.id).collect();
        filter.select_category("Carpentry");
        let second: Vec<u32> = filter.visible(PROJECTS).iter().map(|p| p.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn unmatched_category_yields_an_empty_set() {
        let mut filter = ProjectFilter::default();
        filter.select_category("Landscaping");
        assert!(filter.visible(PROJECTS).is_empty());
    }
}
