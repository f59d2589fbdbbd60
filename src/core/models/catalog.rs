//! Course catalog store

use super::Course;
use std::collections::HashMap;

/// In-memory course catalog keyed by course id
///
/// Holds at most one record per id. Inserting a course whose id is already
/// present replaces the earlier record (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: HashMap<String, Course>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            courses: HashMap::new(),
        }
    }

    /// Insert a course, replacing any record with the same id
    ///
    /// # Returns
    /// The record that was replaced, if any
    pub fn insert(&mut self, course: Course) -> Option<Course> {
        self.courses.insert(course.id.clone(), course)
    }

    /// Look up a course by exact, case-sensitive id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    /// Check if a course exists in the catalog
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains_key(id)
    }

    /// Number of courses in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// All courses sorted ascending by id (byte order, not locale-aware)
    #[must_use]
    pub fn sorted(&self) -> Vec<&Course> {
        let mut courses: Vec<&Course> = self.courses.values().collect();
        courses.sort_by(|a, b| a.id.cmp(&b.id));
        courses
    }

    /// Prerequisite references that have no record in the catalog
    ///
    /// # Returns
    /// `(course id, missing prerequisite id)` pairs, sorted by course id and
    /// then in listed order
    #[must_use]
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        self.sorted()
            .into_iter()
            .flat_map(move |course| {
                course
                    .prerequisites
                    .iter()
                    .filter(move |prereq| !self.contains(prereq))
                    .map(move |prereq| (course.id.as_str(), prereq.as_str()))
            })
            .collect()
    }
}

impl FromIterator<Course> for Catalog {
    fn from_iter<T: IntoIterator<Item = Course>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for course in iter {
            catalog.insert(course);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, name: &str, prereqs: &[&str]) -> Course {
        Course::new(id.to_string(), name.to_string()).with_prerequisites(prereqs.iter().copied())
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(course("CSCI100", "Intro", &[])).is_none());

        assert!(catalog.contains("CSCI100"));
        assert_eq!(catalog.get("CSCI100").unwrap().name, "Intro");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog: Catalog = [course("CSCI100", "Intro", &[])].into_iter().collect();

        assert!(catalog.get("csci100").is_none());
        assert!(catalog.get("CSCI100 ").is_none());
    }

    #[test]
    fn test_insert_duplicate_replaces() {
        let mut catalog = Catalog::new();
        catalog.insert(course("CSCI100", "First", &[]));
        let replaced = catalog.insert(course("CSCI100", "Second", &["MATH201"]));

        assert_eq!(replaced.unwrap().name, "First");
        assert_eq!(catalog.len(), 1);
        let stored = catalog.get("CSCI100").unwrap();
        assert_eq!(stored.name, "Second");
        assert_eq!(stored.prerequisites, vec!["MATH201"]);
    }

    #[test]
    fn test_sorted_by_id() {
        let catalog: Catalog = [
            course("MATH201", "Discrete Mathematics", &[]),
            course("CSCI300", "Algorithms", &[]),
            course("CSCI100", "Intro", &[]),
            course("CSCI101", "Intro II", &[]),
        ]
        .into_iter()
        .collect();

        let ids: Vec<&str> = catalog.sorted().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["CSCI100", "CSCI101", "CSCI300", "MATH201"]);
    }

    #[test]
    fn test_sorted_uses_byte_order() {
        let catalog: Catalog = [course("b100", "lower", &[]), course("Z100", "upper", &[])]
            .into_iter()
            .collect();

        let ids: Vec<&str> = catalog.sorted().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["Z100", "b100"]);
    }

    #[test]
    fn test_dangling_references() {
        let catalog: Catalog = [
            course("CSCI200", "Data Structures", &["CSCI101", "ENGL101"]),
            course("CSCI101", "Intro II", &["CSCI100"]),
            course("CSCI100", "Intro", &[]),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            catalog.dangling_references(),
            vec![("CSCI200", "ENGL101")]
        );
    }
}
