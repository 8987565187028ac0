//! # canvas-assign
//!
//! Fetch, template, and upload assignment groups and assignments for a
//! Canvas-style course-management platform.
//!
//! The heart of the crate is the template defaults resolver: a single
//! ordered pass over a mixed list of assignment and group entries in
//! which an assignment marked `default` donates its zero-valued fields
//! to the assignments that follow it within the same group scope, and
//! lock/unlock/peer-review instants are computed from the due instant
//! plus signed offsets. Everything around it is plumbing: a blocking API
//! client, flattened JSON reports, and an ordered upload walk.
//!
//! ## Architecture
//!
//! - [`api`]: identifier newtypes and the public type surface
//! - [`models`]: temporal types and the assignment/group/entry record model
//! - [`services`]: the defaults resolution pass
//! - [`canvas`]: API client, reporting, and the upload walk
//! - [`config`]: CLI arguments and environment handling

pub mod api;
pub mod canvas;
pub mod config;
pub mod models;
pub mod services;
