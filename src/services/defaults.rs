//! Template defaults resolution.
//!
//! A single ordered pass over an entry list in which an assignment marked
//! `default` becomes an inheritable template for the assignments that
//! follow it, until the next group entry closes the scope. Concrete
//! assignments inherit every field they left at its zero value, have
//! their schedule instants merged with date/time recombination, and get
//! lock/unlock/peer-review instants computed from the due instant plus
//! signed offsets. Templates are consumed by the pass, never re-emitted.

use tracing::debug;

use crate::api::CourseId;
use crate::models::{Assignment, CanvasDuration, CanvasTime, Entry};

/// Result of a resolution pass: the emitted entries, in input order with
/// templates removed, plus the single course ID every assignment agreed on.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub entries: Vec<Entry>,
    pub course_id: CourseId,
}

/// Fatal validation failures; the whole run aborts on the first one.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    #[error("unable to determine course ID for assignment {name:?}")]
    NoCourseId { name: String },
    #[error("course ID mismatch: found {found} but expected {expected}")]
    CourseIdMismatch { found: CourseId, expected: CourseId },
    #[error("computed {field} is out of range for assignment {name:?}")]
    ScheduleOutOfRange { field: &'static str, name: String },
}

/// Resolve template defaults over `entries`, processed strictly in order.
///
/// `seed` optionally pre-establishes the running course ID (0 = unset),
/// so a caller-supplied course can stand in for records that carry none.
pub fn apply_defaults(entries: Vec<Entry>, seed: CourseId) -> Result<Resolution, ResolveError> {
    let mut course_id = seed;
    let mut current_default: Option<Assignment> = None;
    let mut out = Vec::with_capacity(entries.len());

    for entry in entries {
        match entry {
            // A group boundary closes the template scope.
            Entry::Group(group) => {
                if current_default.take().is_some() {
                    debug!(group = %group.name, "group entry cleared active template");
                }
                out.push(Entry::Group(group));
            }
            Entry::Assignment(mut asst) => {
                establish_course_id(&mut course_id, &mut asst)?;

                if asst.is_default {
                    asst.sanitize_as_template();
                    debug!("captured template assignment");
                    // Snapshot captured; the template itself is not emitted.
                    current_default = Some(asst);
                    continue;
                }

                if let Some(template) = &current_default {
                    asst.merge_defaults(template);
                    merge_schedule(&mut asst, template);
                    apply_relative_offsets(&mut asst)?;
                }
                out.push(Entry::Assignment(asst));
            }
        }
    }

    Ok(Resolution {
        entries: out,
        course_id,
    })
}

/// Establish or validate the running course ID against one assignment.
///
/// A record without an explicit course adopts the running value; the
/// first explicit course establishes it; a conflicting explicit course
/// is fatal. Only concrete records require a course to be determinable:
/// a template that arrives before any course is known carries none and
/// simply leaves the running value unset.
fn establish_course_id(running: &mut CourseId, asst: &mut Assignment) -> Result<(), ResolveError> {
    if asst.course_id == 0 {
        asst.course_id = running.value();
    }
    if asst.course_id == 0 {
        if asst.is_default {
            return Ok(());
        }
        return Err(ResolveError::NoCourseId {
            name: asst.name.clone(),
        });
    }
    if !running.is_set() {
        *running = CourseId::new(asst.course_id);
    }
    if running.value() != asst.course_id {
        return Err(ResolveError::CourseIdMismatch {
            found: CourseId::new(asst.course_id),
            expected: *running,
        });
    }
    Ok(())
}

/// Merge the four schedule instants from the template into the record.
///
/// Absent record values take the template's; a record value whose
/// time-of-day is midnight takes its own date combined with the
/// template's time-of-day (the template's date is discarded); anything
/// else is left alone.
fn merge_schedule(asst: &mut Assignment, template: &Assignment) {
    asst.due_at = merge_instant(asst.due_at, template.due_at);
    asst.lock_at = merge_instant(asst.lock_at, template.lock_at);
    asst.unlock_at = merge_instant(asst.unlock_at, template.unlock_at);
    asst.peer_reviews_assign_at =
        merge_instant(asst.peer_reviews_assign_at, template.peer_reviews_assign_at);
}

fn merge_instant(
    actual: Option<CanvasTime>,
    template: Option<CanvasTime>,
) -> Option<CanvasTime> {
    match (actual, template) {
        (None, template) => template,
        (Some(actual), Some(template)) if actual.is_midnight() => {
            Some(CanvasTime::from_parts(actual.date(), template.time()))
        }
        (actual, _) => actual,
    }
}

/// Compute still-absent schedule instants from the due instant plus the
/// helper offsets, then clear the helpers; they are resolver inputs and
/// must never appear on an emitted record.
fn apply_relative_offsets(asst: &mut Assignment) -> Result<(), ResolveError> {
    if asst.lock_at.is_none() {
        if let (Some(due), Some(after)) = (asst.due_at, asst.lock_after) {
            asst.lock_at = Some(offset(due, after, "lock_at", asst)?);
        }
    }
    if asst.unlock_at.is_none() {
        if let (Some(due), Some(before)) = (asst.due_at, asst.unlock_before) {
            asst.unlock_at = Some(offset(due, before.negated(), "unlock_at", asst)?);
        }
    }
    if asst.peer_reviews_assign_at.is_none() {
        if let (Some(due), Some(after)) = (asst.due_at, asst.peer_reviews_assign_after) {
            asst.peer_reviews_assign_at =
                Some(offset(due, after, "peer_reviews_assign_at", asst)?);
        }
    }

    asst.lock_after = None;
    asst.unlock_before = None;
    asst.peer_reviews_assign_after = None;
    Ok(())
}

fn offset(
    due: CanvasTime,
    by: CanvasDuration,
    field: &'static str,
    asst: &Assignment,
) -> Result<CanvasTime, ResolveError> {
    due.offset_by(by).ok_or_else(|| ResolveError::ScheduleOutOfRange {
        field,
        name: asst.name.clone(),
    })
}
