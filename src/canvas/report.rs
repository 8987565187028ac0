//! Fetch-and-dump reporting.
//!
//! Fetched records are normalized and printed as the same ordered entry
//! list the resolver consumes, so a report can be edited and fed back in.

use anyhow::{Context, Result};

use crate::api::{AssignmentId, CourseId, GroupId};
use crate::canvas::client::CanvasClient;
use crate::models::{AssignmentGroup, Entry};

/// Fetch one assignment and dump it as a single-entry list.
pub fn report_assignment(
    client: &CanvasClient,
    course: CourseId,
    assignment: AssignmentId,
) -> Result<()> {
    let mut asst = client.fetch_assignment(course, assignment)?;
    asst.cleanup();
    print_entries(&[Entry::Assignment(asst)])
}

/// Fetch one assignment group (optionally with its assignments) and dump
/// it flattened.
pub fn report_assignment_group(
    client: &CanvasClient,
    course: CourseId,
    group: GroupId,
    include_assignments: bool,
) -> Result<()> {
    let group = client.fetch_assignment_group(course, group, include_assignments)?;
    print_entries(&flatten_groups(vec![group]))
}

/// Fetch every assignment group of a course and dump them flattened.
pub fn report_all_assignment_groups(
    client: &CanvasClient,
    course: CourseId,
    include_assignments: bool,
) -> Result<()> {
    let groups = client.fetch_assignment_groups(course, include_assignments)?;
    print_entries(&flatten_groups(groups))
}

/// Flatten fetched groups into the ordered entry shape: each group entry
/// (child list emptied) followed by its assignments as sibling entries.
pub fn flatten_groups(groups: Vec<AssignmentGroup>) -> Vec<Entry> {
    let mut entries = Vec::new();
    for mut group in groups {
        group.cleanup();
        let assignments = std::mem::take(&mut group.assignments);
        entries.push(Entry::Group(group));
        entries.extend(assignments.into_iter().map(Entry::Assignment));
    }
    entries
}

fn print_entries(entries: &[Entry]) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(entries).context("JSON error encoding entry list")?;
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;

    #[test]
    fn test_flatten_interleaves_groups_and_assignments() {
        let groups = vec![
            AssignmentGroup {
                id: 1,
                name: "HW".to_string(),
                assignments: vec![
                    Assignment {
                        name: "HW1".to_string(),
                        ..Default::default()
                    },
                    Assignment {
                        name: "HW2".to_string(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            AssignmentGroup {
                id: 2,
                name: "Exams".to_string(),
                ..Default::default()
            },
        ];

        let entries = flatten_groups(groups);
        let shape: Vec<&str> = entries
            .iter()
            .map(|entry| match entry {
                Entry::Group(g) => g.name.as_str(),
                Entry::Assignment(a) => a.name.as_str(),
            })
            .collect();
        assert_eq!(shape, vec!["HW", "HW1", "HW2", "Exams"]);

        // Child lists are emptied so assignments only appear as siblings.
        for entry in &entries {
            if let Entry::Group(group) = entry {
                assert!(group.assignments.is_empty());
            }
        }
    }

    #[test]
    fn test_flatten_cleans_children() {
        let groups = vec![AssignmentGroup {
            name: "HW".to_string(),
            assignments: vec![Assignment {
                name: "HW1".to_string(),
                html_url: "https://example.edu/a/1".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }];

        let entries = flatten_groups(groups);
        match &entries[1] {
            Entry::Assignment(asst) => assert!(asst.html_url.is_empty()),
            other => panic!("expected assignment entry, got {:?}", other),
        }
    }
}
