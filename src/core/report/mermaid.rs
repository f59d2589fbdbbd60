//! Mermaid diagram generator for prerequisite graphs
//!
//! Generates Mermaid flowchart syntax that can be embedded in Markdown files
//! and rendered by GitHub, GitLab, and other Markdown viewers.

use crate::core::models::Catalog;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a left-to-right flowchart of the whole catalog
    ///
    /// Edges point from a prerequisite to the course that requires it.
    /// Prerequisites with no catalog record get a dashed `missing` node.
    #[must_use]
    pub fn generate_catalog(catalog: &Catalog) -> String {
        let mut output = String::from("```mermaid\nflowchart LR\n");
        let courses = catalog.sorted();

        let missing: BTreeSet<&str> = catalog
            .dangling_references()
            .into_iter()
            .map(|(_, prereq)| prereq)
            .collect();

        let node_ids = Self::assign_node_ids(
            courses
                .iter()
                .map(|course| course.id.as_str())
                .chain(missing.iter().copied()),
        );
        let node = |id: &str| node_ids.get(id).map_or("", String::as_str);

        for course in &courses {
            let label = Self::node_label(&course.id, &course.name);
            let _ = writeln!(output, "    {}[\"{label}\"]", node(&course.id));
        }

        for id in &missing {
            let _ = writeln!(
                output,
                "    {}[\"{}<br/>(not in catalog)\"]:::missing",
                node(id),
                id.replace('"', "'")
            );
        }

        output.push('\n');

        for course in &courses {
            for prereq in &course.prerequisites {
                let _ = writeln!(output, "    {} --> {}", node(prereq), node(&course.id));
            }
        }

        if !missing.is_empty() {
            output.push_str("\n    classDef missing stroke-dasharray: 5 5\n");
        }

        output.push_str("```\n");
        output
    }

    /// Map each course id to a distinct Mermaid node ID
    ///
    /// Ids that sanitize to the same string get a numeric suffix in the
    /// order they are given (`CS_101`, `CS_101_2`, ...).
    fn assign_node_ids<'a>(ids: impl Iterator<Item = &'a str>) -> HashMap<&'a str, String> {
        let mut assigned: HashMap<&str, String> = HashMap::new();
        let mut taken: HashSet<String> = HashSet::new();

        for id in ids {
            if assigned.contains_key(id) {
                continue;
            }
            let base = Self::sanitize_id(id);
            let mut candidate = base.clone();
            let mut suffix = 2;
            while !taken.insert(candidate.clone()) {
                candidate = format!("{base}_{suffix}");
                suffix += 1;
            }
            assigned.insert(id, candidate);
        }

        assigned
    }

    /// Display label for a course node
    fn node_label(id: &str, name: &str) -> String {
        let name = if name.chars().count() > 24 {
            let truncated: String = name.chars().take(21).collect();
            format!("{truncated}...")
        } else {
            name.to_string()
        };
        format!("{id}<br/>{}", name.replace('"', "'"))
    }

    /// Sanitize a course id for use as a Mermaid node ID
    fn sanitize_id(id: &str) -> String {
        id.chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    }
}
