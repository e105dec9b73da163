//! List command - show the annotations in the given files.
//!
//! Each annotation is printed with its state glyph, variable name, current
//! value and line number, followed by its candidates with the current one
//! marked. `--filter` narrows the listing by variable name.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::super::{
    args::ListCommand,
    context::CommandContext,
    exit_status::ExitStatus,
    glyphs::StyleRegistry,
    report::{SUCCESS_MARK, plural},
};
use crate::core::{
    AnnotatedLine, AnnotationKind, BinaryState, NameFilter, binary_state, carousel_index,
    looks_like_regex, scan,
};

/// Name shown for annotations without a variable name.
pub const UNNAMED: &str = "(unnamed)";

/// One annotation in `--json` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedAnnotation {
    pub file: String,
    pub line: usize,
    pub name: String,
    pub value: Option<String>,
    pub candidates: Vec<String>,
    pub kind: AnnotationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<BinaryState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    pub valid: bool,
}

impl ListedAnnotation {
    fn new(file: &str, found: &AnnotatedLine) -> Self {
        let annotation = &found.annotation;
        Self {
            file: file.to_string(),
            line: found.line_number(),
            name: annotation.name().unwrap_or(UNNAMED).to_string(),
            value: annotation.current_value().map(String::from),
            candidates: annotation.candidates.clone(),
            kind: annotation.kind(),
            state: binary_state(annotation),
            position: carousel_index(annotation),
            valid: annotation.validate().is_valid(),
        }
    }
}

struct FileListing {
    path: String,
    annotations: Vec<AnnotatedLine>,
}

pub fn list(cmd: ListCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;

    let query = cmd.filter.as_deref().unwrap_or_default();
    let use_regex = cmd.regex || looks_like_regex(query);
    let filter = NameFilter::new(query, cmd.case_sensitive, use_regex);
    if filter.is_invalid() {
        eprintln!(
            "{} Invalid filter pattern '{}', no annotation will match",
            "warning:".bold().yellow(),
            query
        );
    }

    let mut listings = Vec::new();
    let mut read_errors = 0;

    for path in &cmd.files {
        let file = match ctx.load(path) {
            Ok(file) => file,
            Err(err) => {
                read_errors += 1;
                eprintln!("{} {:#}", "warning:".bold().yellow(), err);
                continue;
            }
        };

        let annotations: Vec<AnnotatedLine> = scan(&file.document, &ctx.syntax)
            .into_iter()
            .filter(|found| filter.matches(found.annotation.name().unwrap_or(UNNAMED)))
            .collect();

        listings.push(FileListing {
            path: file.display_path(),
            annotations,
        });
    }

    if cmd.json {
        print_json(&listings)?;
    } else {
        print_listings(&listings, &mut io::stdout().lock());
    }

    if read_errors > 0 {
        Ok(ExitStatus::Error)
    } else {
        Ok(ExitStatus::Success)
    }
}

fn print_json(listings: &[FileListing]) -> Result<()> {
    let records: Vec<ListedAnnotation> = listings
        .iter()
        .flat_map(|listing| {
            listing
                .annotations
                .iter()
                .map(|found| ListedAnnotation::new(&listing.path, found))
        })
        .collect();

    let json = serde_json::to_string_pretty(&records).context("Failed to serialize listing")?;
    println!("{}", json);
    Ok(())
}

fn print_listings<W: Write>(listings: &[FileListing], writer: &mut W) {
    let styles = StyleRegistry::new();
    let mut total = 0;
    let mut files = 0;

    for listing in listings.iter().filter(|l| !l.annotations.is_empty()) {
        files += 1;
        total += listing.annotations.len();

        let _ = writeln!(writer, "{}", listing.path.bold());
        for found in &listing.annotations {
            print_annotation(found, &styles, writer);
        }
        let _ = writeln!(writer);
    }

    if total == 0 {
        let _ = writeln!(writer, "No checkbox annotations found.");
    } else {
        let _ = writeln!(
            writer,
            "{} {} {} in {} {}",
            SUCCESS_MARK.green(),
            total,
            plural(total, "annotation", "annotations"),
            files,
            plural(files, "file", "files")
        );
    }
}

fn print_annotation<W: Write>(found: &AnnotatedLine, styles: &StyleRegistry, writer: &mut W) {
    let annotation = &found.annotation;
    let glyph = styles
        .glyph(annotation)
        .map(ToString::to_string)
        .unwrap_or_else(|| " ".to_string());
    let value = annotation.current_value().unwrap_or("(none)");

    let _ = writeln!(
        writer,
        "  {} {} = {}  {}",
        glyph,
        annotation.name().unwrap_or(UNNAMED),
        value,
        format!("line {}", found.line_number()).dimmed()
    );

    for candidate in &annotation.candidates {
        let mark = if Some(candidate.as_str()) == annotation.current_value() {
            "\u{2713}".green() // ✓
        } else {
            " ".normal()
        };
        let _ = writeln!(writer, "      {} {}", mark, candidate);
    }
}
