//! Report formatting and printing utilities.
//!
//! Kept separate from the core so the library can be used without printing
//! side effects.

use std::{
    collections::BTreeSet,
    error::Error,
    io::{self, Write},
};

use colored::Colorize;

use crate::core::SyncReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// Print the outcome of a run to stdout.
pub fn print(report: &SyncReport) {
    print_to(report, &mut io::stdout().lock());
}

/// Print the outcome of a run to a custom writer.
pub fn print_to<W: Write>(report: &SyncReport, writer: &mut W) {
    if report.is_clean() {
        print_success_to(report, writer);
        return;
    }

    let path = report.reference_path.display();
    let diff = &report.diff;

    if !diff.added.is_empty() {
        print_section_to("Added keys", &diff.added, writer);
        if report.added_applied {
            let count = report.entries_added;
            let _ = writeln!(
                writer,
                "{} {}\n",
                SUCCESS_MARK.green(),
                format!("Added {} {} to {}", count, plural(count, "key", "keys"), path).green()
            );
        } else {
            print_hint_to(
                &format!("run with --auto-add to add them to {}", path),
                writer,
            );
        }
    }

    if !diff.removed.is_empty() {
        print_section_to("Removed keys", &diff.removed, writer);
        if report.removed_applied {
            let count = report.entries_removed;
            let _ = writeln!(
                writer,
                "{} {}\n",
                SUCCESS_MARK.green(),
                format!(
                    "Removed {} {} from {}",
                    count,
                    plural(count, "entry", "entries"),
                    path
                )
                .green()
            );
        } else {
            print_hint_to(
                &format!("run with --auto-remove to delete them from {}", path),
                writer,
            );
        }
    }

    if !report.is_resolved() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} is out of sync with source", path).red()
        );
    }
}

/// Labeled header, divider, then one key per line.
fn print_section_to<W: Write>(title: &str, keys: &BTreeSet<String>, writer: &mut W) {
    let header = format!("{} ({})", title, keys.len());
    let _ = writeln!(writer, "{}", header.bold());
    let _ = writeln!(writer, "{}", "=".repeat(header.chars().count()).dimmed());
    for key in keys {
        let _ = writeln!(writer, "  {}", key);
    }
    let _ = writeln!(writer);
}

fn print_hint_to<W: Write>(hint: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}\n", "hint:".bold().cyan(), hint);
}

fn print_success_to<W: Write>(report: &SyncReport, writer: &mut W) {
    let files = report.source_files;
    let entries = report.reference_entries;
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} against {} reference {} - no changes needed",
            files,
            plural(files, "file", "files"),
            entries,
            plural(entries, "entry", "entries")
        )
        .green()
    );
}

/// Print a reference-file load failure to stdout.
pub fn print_reference_error(err: &(dyn Error + 'static)) {
    print_reference_error_to(err, &mut io::stdout().lock());
}

pub fn print_reference_error_to<W: Write>(err: &(dyn Error + 'static), writer: &mut W) {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(source) = cause {
        message.push_str(": ");
        message.push_str(&source.to_string());
        cause = source.source();
    }
    let _ = writeln!(writer, "{} {}", "error:".bold().red(), message);
}
