//! Toggle and set commands - rewrite the value of one annotated line.
//!
//! `toggle` advances the assignment to the next candidate (wrapping around),
//! `set` picks a specific candidate. Both show a preview by default; use
//! `--apply` to write the file.

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::super::{
    args::{SetCommand, ToggleCommand},
    context::{CommandContext, SourceFile},
    exit_status::ExitStatus,
    report::{FAILURE_MARK, SUCCESS_MARK},
};
use crate::core::{Annotation, Document, LineEdit, parse, set_line, toggle_line};

pub fn toggle(cmd: ToggleCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let file = ctx.load(&cmd.file)?;

    let Some(annotation) = annotation_at(&file, &ctx, cmd.line)? else {
        return Ok(ExitStatus::Failure);
    };
    let Some(edit) = toggle_line(&file.document, cmd.line - 1, &ctx.syntax) else {
        print_missing(&file, cmd.line, &annotation);
        return Ok(ExitStatus::Failure);
    };

    finish(&file, &edit, cmd.apply)
}

pub fn set(cmd: SetCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let file = ctx.load(&cmd.file)?;

    let Some(annotation) = annotation_at(&file, &ctx, cmd.line)? else {
        return Ok(ExitStatus::Failure);
    };

    let value = cmd.value.trim();
    if !annotation.is_candidate(value) {
        println!(
            "{} \"{}\" is not a value of {}:{} (expected one of: {})",
            FAILURE_MARK.red(),
            value,
            file.display_path(),
            cmd.line,
            annotation.candidates.join(", ")
        );
        return Ok(ExitStatus::Failure);
    }

    let Some(edit) = set_line(&file.document, cmd.line - 1, value, &ctx.syntax) else {
        print_missing(&file, cmd.line, &annotation);
        return Ok(ExitStatus::Failure);
    };

    finish(&file, &edit, cmd.apply)
}

/// Parse the annotation on a 1-based line.
///
/// Fails when the line does not exist. Prints a message and returns `None`
/// when the line carries no annotation.
fn annotation_at(file: &SourceFile, ctx: &CommandContext, line: usize) -> Result<Option<Annotation>> {
    let count = file.document.line_count();
    let Some(text) = line.checked_sub(1).and_then(|index| file.document.line(index)) else {
        bail!(
            "Line {} is out of range: {} has {} line(s)",
            line,
            file.display_path(),
            count
        );
    };

    let annotation = parse(text, file.comment_token(&ctx.syntax));
    if annotation.is_none() {
        println!(
            "{} {}:{} has no checkbox annotation",
            FAILURE_MARK.red(),
            file.display_path(),
            line
        );
    }
    Ok(annotation)
}

fn print_missing(file: &SourceFile, line: usize, annotation: &Annotation) {
    let reason = if annotation.assignment.is_none() {
        "has no assignment to rewrite"
    } else {
        "cannot be rewritten"
    };
    println!(
        "{} {}:{} {}",
        FAILURE_MARK.red(),
        file.display_path(),
        line,
        reason
    );
}

fn finish(file: &SourceFile, edit: &LineEdit, apply: bool) -> Result<ExitStatus> {
    let location = format!("{}:{}", file.display_path(), edit.line_number());

    if edit.is_noop() {
        println!(
            "{} {} {}",
            SUCCESS_MARK.green(),
            location,
            "is already up to date".green()
        );
        return Ok(ExitStatus::Success);
    }

    if apply {
        let text = file
            .document
            .apply(edit)
            .with_context(|| format!("Line {} no longer exists", location))?;
        file.write(&text)?;
        println!("{} {}", "Updated".green().bold(), location);
        println!("  {}", edit.replacement);
    } else {
        println!("{}", location.bold());
        println!("{} {}", "-".red(), edit.original);
        println!("{} {}", "+".green(), edit.replacement);
        println!("Run with {} to write this change.", "--apply".cyan());
    }

    Ok(ExitStatus::Success)
}
