//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::path::PathBuf;

/// canvas-assign - fetch, template, and upload course assignments
#[derive(Parser, Debug, Clone)]
#[command(name = "canvas-assign")]
#[command(about = "Fetch, template, and upload Canvas assignment groups and assignments")]
pub struct Args {
    /// API access token
    #[arg(long, env = "CANVAS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API endpoint base URL
    #[arg(long, env = "CANVAS_URL", default_value = "https://dixie.instructure.com")]
    pub endpoint: String,

    /// Course ID
    #[arg(long, default_value_t = 0)]
    pub course: i64,

    /// Assignment ID to report
    #[arg(long, default_value_t = 0)]
    pub assignment: i64,

    /// Assignment group ID to report
    #[arg(long, default_value_t = 0)]
    pub assignment_group: i64,

    /// Fetch assignments inside reported groups
    #[arg(long)]
    pub include_assignments: bool,

    /// Upload groups and assignments from this file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Plan the upload without any network calls
    #[arg(long)]
    pub dry: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// The operation selected by a flag combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Report one assignment of a course.
    ReportAssignment,
    /// Report one assignment group of a course.
    ReportAssignmentGroup,
    /// Report every assignment group of a course.
    ReportAllAssignmentGroups,
    /// Resolve defaults in a file and upload the result.
    Upload,
}

impl Args {
    /// Resolve the operation mode, `None` when no valid flag combination
    /// was given.
    pub fn mode(&self) -> Option<Mode> {
        match (self.course, self.assignment, self.assignment_group, &self.file) {
            (c, a, _, None) if c > 0 && a > 0 => Some(Mode::ReportAssignment),
            (c, _, g, None) if c > 0 && g > 0 => Some(Mode::ReportAssignmentGroup),
            (c, _, _, None) if c > 0 => Some(Mode::ReportAllAssignmentGroups),
            (_, _, _, Some(_)) => Some(Mode::Upload),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("canvas-assign").chain(argv.iter().copied()))
            .expect("argv must parse")
    }

    #[test]
    fn test_mode_report_assignment() {
        let args = args(&["--token", "t", "--course", "1", "--assignment", "2"]);
        assert_eq!(args.mode(), Some(Mode::ReportAssignment));
    }

    #[test]
    fn test_mode_report_group() {
        let args = args(&["--token", "t", "--course", "1", "--assignment-group", "2"]);
        assert_eq!(args.mode(), Some(Mode::ReportAssignmentGroup));
    }

    #[test]
    fn test_mode_report_all_groups() {
        let args = args(&["--token", "t", "--course", "1"]);
        assert_eq!(args.mode(), Some(Mode::ReportAllAssignmentGroups));
    }

    #[test]
    fn test_mode_upload_wins_when_file_given() {
        let args = args(&["--token", "t", "--course", "1", "--file", "entries.json"]);
        assert_eq!(args.mode(), Some(Mode::Upload));
    }

    #[test]
    fn test_mode_none_without_flags() {
        assert_eq!(args(&["--token", "t"]).mode(), None);
    }
}
