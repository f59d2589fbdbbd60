//! Course model

/// Represents a single course record in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Course identifier (e.g., "CSCI200"), case-sensitive
    pub id: String,

    /// Display name (e.g., "Data Structures")
    pub name: String,

    /// Prerequisite course ids, in the order they were listed.
    /// Entries are not required to exist in the catalog.
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Create a new course without prerequisites
    ///
    /// # Arguments
    /// * `id` - Course identifier
    /// * `name` - Display name
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            prerequisites: Vec::new(),
        }
    }

    /// Builder-style helper that replaces the prerequisite list
    #[must_use]
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the course lists any prerequisites
    #[must_use]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}
