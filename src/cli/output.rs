//! Small colored-output helpers shared by the CLI commands.

use colored::*;

pub fn section_header(title: &str) {
    println!("{}", title.bold().cyan());
    println!("{}", "─".repeat(title.len()).dimmed());
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn info(message: &str) {
    println!("{} {}", "•".dimmed(), message);
}

/// Print a labelled value as a tree item, marking the last entry.
pub fn tree_item(last: bool, label: &str, value: Option<&str>) {
    let branch = if last { "└─" } else { "├─" };
    match value {
        Some(v) => println!("{} {}: {}", branch.dimmed(), label, v.bold()),
        None => println!("{} {}", branch.dimmed(), label),
    }
}
