//! canvas-assign binary.
//!
//! Dispatches on the flag combination: report a single assignment, one
//! assignment group, or all groups of a course; or load an entry file,
//! resolve template defaults, and upload the result.
//!
//! # Usage
//!
//! ```bash
//! # Dump every assignment group of course 101 with its assignments
//! CANVAS_TOKEN=... canvas-assign --course 101 --include-assignments
//!
//! # Resolve and upload an edited entry file (dry run first)
//! CANVAS_TOKEN=... canvas-assign --file entries.json --dry
//! ```

use anyhow::{bail, Context};
use clap::{CommandFactory, Parser};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use canvas_assign::api::{AssignmentId, CourseId, GroupId};
use canvas_assign::canvas::{report, CanvasClient, Uploaded, Uploader};
use canvas_assign::config::{Args, Mode};
use canvas_assign::models::load_entries;
use canvas_assign::services::apply_defaults;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    FmtSubscriber::builder()
        .with_max_level(args.log_level.parse().unwrap_or(Level::INFO))
        .with_target(false)
        .init();

    let Some(mode) = args.mode() else {
        Args::command().print_help()?;
        bail!("no operation selected");
    };

    let course = CourseId::new(args.course);
    match mode {
        Mode::ReportAssignment => {
            let client = client(&args)?;
            report::report_assignment(&client, course, AssignmentId::new(args.assignment))
        }
        Mode::ReportAssignmentGroup => {
            let client = client(&args)?;
            report::report_assignment_group(
                &client,
                course,
                GroupId::new(args.assignment_group),
                args.include_assignments,
            )
        }
        Mode::ReportAllAssignmentGroups => {
            let client = client(&args)?;
            report::report_all_assignment_groups(&client, course, args.include_assignments)
        }
        Mode::Upload => upload(&args, course),
    }
}

fn upload(args: &Args, course: CourseId) -> anyhow::Result<()> {
    let file = args.file.as_deref().expect("upload mode implies a file");
    let entries = load_entries(file)?;
    let resolution = apply_defaults(entries, course)
        .with_context(|| format!("Failed to resolve defaults in {}", file.display()))?;
    info!(
        course = %resolution.course_id,
        entries = resolution.entries.len(),
        "resolved entry list"
    );

    let outcome = if args.dry {
        Uploader::dry_run().upload(&resolution.entries, resolution.course_id)?
    } else {
        let client = client(args)?;
        Uploader::new(&client).upload(&resolution.entries, resolution.course_id)?
    };

    for step in &outcome {
        match step {
            Uploaded::Group { id, name, created } => {
                println!(
                    "{} group {} ({})",
                    if *created { "created" } else { "updated" },
                    id,
                    name
                );
            }
            Uploaded::Assignment {
                id,
                group_id,
                name,
                created,
            } => {
                println!(
                    "{} assignment {} ({}) in group {}",
                    if *created { "created" } else { "updated" },
                    id,
                    name,
                    group_id
                );
            }
        }
    }
    if args.dry {
        info!("dry run: no changes were sent");
    }
    Ok(())
}

fn client(args: &Args) -> anyhow::Result<CanvasClient> {
    let token = args
        .token
        .as_deref()
        .context("Must set CANVAS_TOKEN (or pass --token)")?;
    Ok(CanvasClient::new(args.endpoint.clone(), token)?)
}
