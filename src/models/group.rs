use serde::{Deserialize, Serialize};

use crate::models::assignment::Assignment;
use crate::models::merge::ZeroField;

/// An ordered group of assignments with an optional grading policy.
///
/// The child assignment list is populated only when fetched from the
/// platform with `include=assignments`; resolver input always carries
/// assignments as sibling entries instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentGroup {
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub name: String,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub position: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub group_weight: f64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub assignments: Vec<Assignment>,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub rules: Option<GradingRules>,
}

impl AssignmentGroup {
    /// Normalize a fetched group: clean each child assignment and drop a
    /// grading-rules object that carries no actual policy.
    pub fn cleanup(&mut self) {
        for asst in &mut self.assignments {
            asst.cleanup();
        }
        if let Some(rules) = &self.rules {
            if rules.is_empty() {
                self.rules = None;
            }
        }
    }
}

/// Drop-lowest / drop-highest / never-drop grading policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradingRules {
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub drop_lowest: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub drop_highest: i64,
    #[serde(default, skip_serializing_if = "ZeroField::is_zero_field")]
    pub never_drop: Vec<i64>,
}

impl GradingRules {
    pub fn is_empty(&self) -> bool {
        self.drop_lowest == 0 && self.drop_highest == 0 && self.never_drop.is_empty()
    }
}
