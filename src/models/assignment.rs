use serde::{Deserialize, Serialize};

use crate::merge_zero_fields;
use crate::models::duration::CanvasDuration;
use crate::models::merge::ZeroField;
use crate::models::time::CanvasTime;

/// A Canvas assignment record.
///
/// Scalar fields use their type's zero value to mean "absent" and are
/// skipped when serializing, mirroring the platform's omit-empty JSON
/// convention; nested objects and temporal values are `Option`s. The
/// same zero test drives the structural merge in the defaults resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Marks this record as an inheritable template rather than a real
    /// entity. Consumed by the defaults resolver, never uploaded.
    #[serde(rename = "default", default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub name: String,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub description: String,
    /// Anchor instant for relative schedule computation.
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub due_at: Option<CanvasTime>,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub lock_at: Option<CanvasTime>,
    /// Resolver-only offset: `lock_at = due_at + lock_after`.
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub lock_after: Option<CanvasDuration>,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub unlock_at: Option<CanvasTime>,
    /// Resolver-only offset: `unlock_at = due_at - unlock_before`.
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub unlock_before: Option<CanvasDuration>,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub course_id: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub html_url: String,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub assignment_group_id: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub allowed_extensions: Vec<String>,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub turnitin_enabled: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub turnitin_settings: Option<TurnitinSettings>,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub grade_group_students_individually: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub external_tool_tag_attributes: Option<ExternalToolTagAttributes>,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub peer_reviews: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub automatic_peer_reviews: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub peer_review_count: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub peer_reviews_assign_at: Option<CanvasTime>,
    /// Resolver-only offset: `peer_reviews_assign_at = due_at + peer_reviews_assign_after`.
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub peer_reviews_assign_after: Option<CanvasDuration>,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub group_category_id: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub needs_grading_count: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub position: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub post_to_sis: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub muted: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub points_possible: f64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub submission_types: Vec<String>,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub grading_type: String,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub grading_standard_id: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub published: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub unpublishable: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub only_visible_to_overrides: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub locked_for_user: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub lock_info: String,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub lock_explanation: String,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub quiz_id: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub anonymous_submissions: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub discussion_topic: String,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub freeze_on_copy: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub frozen: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub frozen_attributes: Vec<String>,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub submission: Option<Submission>,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub use_rubric_for_grading: bool,
    // Field name kept as the platform spells it.
    #[serde(rename = "rubricsettings", default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub rubric_settings: Option<RubricSettings>,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub rubric: Vec<RubricCriteria>,
}

impl Assignment {
    /// Normalize a record fetched from the platform before dumping it:
    /// drop dependent settings whose enabling flag is off and clear
    /// server-owned fields that must not be uploaded back.
    pub fn cleanup(&mut self) {
        if !self.turnitin_enabled {
            self.turnitin_settings = None;
        }
        if !self.peer_reviews {
            self.automatic_peer_reviews = false;
            self.peer_review_count = 0;
            self.peer_reviews_assign_at = None;
        }
        self.html_url.clear();
        self.unpublishable = false;
    }

    /// Strip identity-like fields before this record is used as a merge
    /// source. A template supplies schedule and attribute data only; it
    /// is never a real entity.
    pub fn sanitize_as_template(&mut self) {
        self.is_default = false;
        self.id = 0;
        self.name.clear();
        self.html_url.clear();
        self.position = 0;
    }

    /// Copy every zero/empty field of this record from `template`.
    /// Explicit values on the record always win. The four schedule
    /// instants are excluded here; the resolver merges them with
    /// date/time recombination semantics instead.
    pub fn merge_defaults(&mut self, template: &Assignment) {
        merge_zero_fields!(self, template;
            is_default,
            id,
            name,
            description,
            lock_after,
            unlock_before,
            course_id,
            html_url,
            assignment_group_id,
            allowed_extensions,
            turnitin_enabled,
            turnitin_settings,
            grade_group_students_individually,
            external_tool_tag_attributes,
            peer_reviews,
            automatic_peer_reviews,
            peer_review_count,
            peer_reviews_assign_after,
            group_category_id,
            needs_grading_count,
            position,
            post_to_sis,
            muted,
            points_possible,
            submission_types,
            grading_type,
            grading_standard_id,
            published,
            unpublishable,
            only_visible_to_overrides,
            locked_for_user,
            lock_info,
            lock_explanation,
            quiz_id,
            anonymous_submissions,
            discussion_topic,
            freeze_on_copy,
            frozen,
            frozen_attributes,
            submission,
            use_rubric_for_grading,
            rubric_settings,
            rubric,
        );
    }
}

/// Plagiarism review configuration, meaningful only when
/// `turnitin_enabled` is set on the owning assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnitinSettings {
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub originality_report_visibility: String,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub s_paper_check: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub internet_check: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub journal_check: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub exclude_biblio: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub exclude_quoted: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub exclude_small_matches_type: String,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub exclude_small_matches_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalToolTagAttributes {
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub url: String,
    // Always serialized; false is meaningful to the platform here.
    #[serde(default)]
    pub new_tab: bool,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub resource_link_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RubricSettings {
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub title: String,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub points_possible: f64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub free_form_criterion_comments: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RubricRating {
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub points: f64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub id: String,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RubricCriteria {
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub points: f64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub id: String,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub description: String,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub ratings: Vec<RubricRating>,
}

/// Placeholder for the platform's submission object; the tool never
/// inspects its contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {}
