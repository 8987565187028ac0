//! Ordered upload walk.
//!
//! Consumes resolver output strictly in order: a group entry's
//! server-assigned ID becomes the implicit target group for the
//! assignment entries that follow it, so entry order is a hard contract
//! with the resolver, not an optimization. Dry-run mode performs no
//! network calls and assigns synthetic IDs so the full plan, including
//! group threading, can be inspected.

use tracing::{debug, info};

use crate::api::{AssignmentId, CourseId, GroupId};
use crate::canvas::client::{assignment_wire_body, CanvasClient};
use crate::canvas::error::UploadError;
use crate::models::{AssignmentGroup, Entry};

/// One step of a completed upload (or dry-run plan).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Uploaded {
    Group {
        id: GroupId,
        name: String,
        created: bool,
    },
    Assignment {
        id: AssignmentId,
        group_id: GroupId,
        name: String,
        created: bool,
    },
}

const DRY_RUN_GROUP_ID_BASE: i64 = 1000;
const DRY_RUN_ASSIGNMENT_ID_BASE: i64 = 2000;

pub struct Uploader<'a> {
    client: Option<&'a CanvasClient>,
    next_group_id: i64,
    next_assignment_id: i64,
}

impl<'a> Uploader<'a> {
    pub fn new(client: &'a CanvasClient) -> Self {
        Self {
            client: Some(client),
            next_group_id: DRY_RUN_GROUP_ID_BASE,
            next_assignment_id: DRY_RUN_ASSIGNMENT_ID_BASE,
        }
    }

    /// An uploader that plans without a client or any network traffic.
    pub fn dry_run() -> Self {
        Self {
            client: None,
            next_group_id: DRY_RUN_GROUP_ID_BASE,
            next_assignment_id: DRY_RUN_ASSIGNMENT_ID_BASE,
        }
    }

    /// Walk `entries` in order, creating or updating each against
    /// `course`. Returns the per-entry outcome in the same order.
    pub fn upload(
        &mut self,
        entries: &[Entry],
        course: CourseId,
    ) -> Result<Vec<Uploaded>, UploadError> {
        let mut group_id = GroupId::new(0);
        let mut outcome = Vec::with_capacity(entries.len());

        for entry in entries {
            match entry {
                Entry::Group(group) => {
                    info!(id = group.id, name = %group.name, "uploading assignment group");
                    let created = group.id == 0;
                    group_id = self.push_group(group, course)?;
                    if created {
                        info!(id = %group_id, "new assignment group");
                    }
                    outcome.push(Uploaded::Group {
                        id: group_id,
                        name: group.name.clone(),
                        created,
                    });
                }
                Entry::Assignment(asst) => {
                    if asst.is_default {
                        return Err(UploadError::TemplateInUpload);
                    }
                    let mut asst = asst.clone();
                    if asst.assignment_group_id == 0 {
                        if !group_id.is_set() {
                            return Err(UploadError::NoGroupId {
                                name: asst.name.clone(),
                            });
                        }
                        asst.assignment_group_id = group_id.value();
                    } else if group_id.is_set() && asst.assignment_group_id != group_id.value() {
                        return Err(UploadError::GroupIdMismatch {
                            name: asst.name.clone(),
                            expected: group_id,
                            found: GroupId::new(asst.assignment_group_id),
                        });
                    }
                    if asst.course_id != course.value() {
                        return Err(UploadError::CourseIdMismatch {
                            name: asst.name.clone(),
                            expected: course,
                            found: CourseId::new(asst.course_id),
                        });
                    }

                    info!(id = asst.id, name = %asst.name, "uploading assignment");
                    debug!(body = %assignment_wire_body(&asst)?, "assignment wire body");
                    let created = asst.id == 0;
                    let id = match self.client {
                        Some(client) => client.push_assignment(&asst, course)?,
                        None => AssignmentId::new(self.fake_assignment_id(asst.id)),
                    };
                    if created {
                        info!(id = %id, "new assignment");
                    }
                    outcome.push(Uploaded::Assignment {
                        id,
                        group_id: GroupId::new(asst.assignment_group_id),
                        name: asst.name.clone(),
                        created,
                    });
                }
            }
        }

        Ok(outcome)
    }

    fn push_group(
        &mut self,
        group: &AssignmentGroup,
        course: CourseId,
    ) -> Result<GroupId, UploadError> {
        match self.client {
            Some(client) => Ok(client.push_group(group, course)?),
            None => Ok(GroupId::new(self.fake_group_id(group.id))),
        }
    }

    fn fake_group_id(&mut self, existing_id: i64) -> i64 {
        if existing_id != 0 {
            return existing_id;
        }
        let id = self.next_group_id;
        self.next_group_id += 1;
        id
    }

    fn fake_assignment_id(&mut self, existing_id: i64) -> i64 {
        if existing_id != 0 {
            return existing_id;
        }
        let id = self.next_assignment_id;
        self.next_assignment_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_entries_json_str, Assignment};

    fn dry_upload(json: &str, course: i64) -> Result<Vec<Uploaded>, UploadError> {
        let entries = parse_entries_json_str(json).expect("test fixture must parse");
        Uploader::dry_run().upload(&entries, CourseId::new(course))
    }

    #[test]
    fn test_group_id_threads_into_following_assignments() {
        let outcome = dry_upload(
            r#"[
                {"assignment_group": {"name": "HW"}},
                {"assignment": {"name": "HW1", "course_id": 101}},
                {"assignment_group": {"id": 7, "name": "Exams"}},
                {"assignment": {"name": "Final", "course_id": 101}}
            ]"#,
            101,
        )
        .unwrap();

        assert_eq!(outcome.len(), 4);
        match (&outcome[0], &outcome[1]) {
            (
                Uploaded::Group { id, created, .. },
                Uploaded::Assignment { group_id, .. },
            ) => {
                assert_eq!(id.value(), 1000, "synthetic IDs start at 1000");
                assert!(created);
                assert_eq!(group_id, id, "assignment adopts the running group");
            }
            other => panic!("unexpected outcome shape: {:?}", other),
        }
        match (&outcome[2], &outcome[3]) {
            (
                Uploaded::Group { id, created, .. },
                Uploaded::Assignment { group_id, .. },
            ) => {
                assert_eq!(id.value(), 7, "existing groups keep their ID");
                assert!(!created);
                assert_eq!(group_id, id);
            }
            other => panic!("unexpected outcome shape: {:?}", other),
        }
    }

    #[test]
    fn test_synthetic_assignment_ids() {
        let outcome = dry_upload(
            r#"[
                {"assignment_group": {"name": "HW"}},
                {"assignment": {"name": "HW1", "course_id": 101}},
                {"assignment": {"id": 55, "name": "HW2", "course_id": 101}}
            ]"#,
            101,
        )
        .unwrap();

        let ids: Vec<i64> = outcome
            .iter()
            .filter_map(|step| match step {
                Uploaded::Assignment { id, .. } => Some(id.value()),
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec![2000, 55]);
    }

    #[test]
    fn test_template_in_upload_is_fatal() {
        let err = dry_upload(
            r#"[{"assignment": {"default": true, "course_id": 101}}]"#,
            101,
        )
        .unwrap_err();
        assert!(matches!(err, UploadError::TemplateInUpload));
    }

    #[test]
    fn test_assignment_before_any_group_is_fatal() {
        let err = dry_upload(
            r#"[{"assignment": {"name": "HW1", "course_id": 101}}]"#,
            101,
        )
        .unwrap_err();
        assert!(matches!(err, UploadError::NoGroupId { .. }));
    }

    #[test]
    fn test_explicit_group_id_without_running_group_is_allowed() {
        let outcome = dry_upload(
            r#"[{"assignment": {"name": "HW1", "course_id": 101, "assignment_group_id": 7}}]"#,
            101,
        )
        .unwrap();
        match &outcome[0] {
            Uploaded::Assignment { group_id, .. } => assert_eq!(group_id.value(), 7),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_group_id_mismatch_is_fatal() {
        let err = dry_upload(
            r#"[
                {"assignment_group": {"id": 7, "name": "HW"}},
                {"assignment": {"name": "HW1", "course_id": 101, "assignment_group_id": 8}}
            ]"#,
            101,
        )
        .unwrap_err();
        match err {
            UploadError::GroupIdMismatch {
                expected, found, ..
            } => {
                assert_eq!(expected.value(), 7);
                assert_eq!(found.value(), 8);
            }
            other => panic!("expected group mismatch, got {}", other),
        }
    }

    #[test]
    fn test_course_id_mismatch_is_fatal() {
        let err = dry_upload(
            r#"[
                {"assignment_group": {"name": "HW"}},
                {"assignment": {"name": "HW1", "course_id": 102}}
            ]"#,
            101,
        )
        .unwrap_err();
        assert!(matches!(err, UploadError::CourseIdMismatch { .. }));
    }

    #[test]
    fn test_input_entries_are_not_mutated() {
        let entries = vec![
            Entry::Group(Default::default()),
            Entry::Assignment(Assignment {
                name: "HW1".to_string(),
                course_id: 101,
                ..Default::default()
            }),
        ];
        let before = entries.clone();
        Uploader::dry_run()
            .upload(&entries, CourseId::new(101))
            .unwrap();
        assert_eq!(entries, before);
    }
}
