//! Transitive prerequisite resolution

use crate::core::models::Catalog;
use std::collections::HashSet;

/// Resolve the full prerequisite chain of a course
///
/// Walks prerequisite edges depth-first in listed order. Each prerequisite is
/// emitted before its own prerequisites are explored. A course is expanded at
/// most once (the starting course counts as expanded), so cycles terminate and
/// a prerequisite reachable along several paths may be emitted more than once
/// without being expanded again. Prerequisites with no catalog record are
/// emitted but not expanded.
///
/// # Arguments
/// * `catalog` - Course catalog
/// * `start` - Course id to trace from; never included for its own sake
///
/// # Returns
/// The discovered prerequisite ids. Empty when `start` is unknown or has no
/// prerequisites.
#[must_use]
pub fn resolve_chain(catalog: &Catalog, start: &str) -> Vec<String> {
    let mut chain = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(start);

    let Some(course) = catalog.get(start) else {
        return chain;
    };

    // One iterator per course being expanded; the top is the deepest
    let mut stack = vec![course.prerequisites.iter()];

    while let Some(frame) = stack.last_mut() {
        let Some(prereq) = frame.next() else {
            stack.pop();
            continue;
        };

        chain.push(prereq.clone());

        if visited.insert(prereq.as_str()) {
            if let Some(next) = catalog.get(prereq) {
                stack.push(next.prerequisites.iter());
            }
        }
    }

    chain
}

/// Resolve the chain with duplicate emissions removed, keeping first occurrences
#[must_use]
pub fn resolve_unique_chain(catalog: &Catalog, start: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    resolve_chain(catalog, start)
        .into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
