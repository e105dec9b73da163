//! Check command - warn about assigned values that are not candidates.
//!
//! Every annotation in the given files is validated. Invalid values are
//! reported as warnings pointing at the value; unreadable files as errors.

use anyhow::Result;

use super::super::{args::CheckCommand, context::CommandContext, exit_status::ExitStatus, report};
use crate::{
    core::{AnnotatedLine, Validation, scan},
    issues::{InvalidValueIssue, Issue, ReadErrorIssue, SourceContext, SourceLocation},
};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;

    let mut issues = Vec::new();
    let mut files_checked = 0;
    let mut annotations_checked = 0;

    for path in &cmd.files {
        let file = match ctx.load(path) {
            Ok(file) => file,
            Err(err) => {
                issues.push(Issue::ReadError(ReadErrorIssue {
                    file_path: path.display().to_string(),
                    error: format!("{:#}", err),
                }));
                continue;
            }
        };

        files_checked += 1;
        let file_path = file.display_path();

        for found in scan(&file.document, &ctx.syntax) {
            annotations_checked += 1;
            if let Some(issue) = invalid_value_issue(&file_path, &found) {
                issues.push(Issue::InvalidValue(issue));
            }
        }
    }

    if issues.is_empty() {
        report::print_success(files_checked, annotations_checked);
        return Ok(ExitStatus::Success);
    }

    report::report(&issues);

    if issues.iter().any(|issue| matches!(issue, Issue::ReadError(_))) {
        Ok(ExitStatus::Error)
    } else {
        Ok(ExitStatus::Failure)
    }
}

/// Build an issue for an annotation whose value is not a candidate.
///
/// The location points at the value (1-based character column).
pub fn invalid_value_issue(file_path: &str, found: &AnnotatedLine) -> Option<InvalidValueIssue> {
    let Validation::Invalid { message } = found.annotation.validate() else {
        return None;
    };
    let assignment = found.annotation.assignment.as_ref()?;

    let col = found.text[..assignment.value_range.start].chars().count() + 1;

    Some(InvalidValueIssue {
        context: SourceContext::new(
            SourceLocation::new(file_path, found.line_number(), col),
            found.text.clone(),
        ),
        width: assignment.value.chars().count().max(1),
        message,
    })
}
