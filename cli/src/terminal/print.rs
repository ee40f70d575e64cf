use std::fmt::Display;

use colored::*;

pub const TOTAL_WIDTH: usize = 64;

pub fn banner() {
    let text_content: String = format!("⟦ SUBFIN v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = console::measure_text_width(&text_content);
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();

    eprintln!("{}{}{}", sep, text, sep);
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    eprintln!("{}", line);
}

pub fn fat_separator() {
    eprintln!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    eprintln!("{}{}", space, msg);
}

/// `key ......: value` line for the per-source report.
pub fn aligned_line<V: Display>(key_width: usize, key: &str, value: V) {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.chars().count()));
    eprintln!(
        "{} {}{}{} {}",
        ">".bright_black(),
        key.cyan(),
        dots.bright_black(),
        ":".bright_black(),
        value
    );
}

/// One level of `├─ item` branches under whatever was printed last.
pub fn tree_list(items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        let branch = if i + 1 == items.len() { "└─" } else { "├─" };
        eprintln!(" {} {}", branch.bright_black(), item);
    }
}

pub fn no_results() {
    eprintln!("{}", "No subdomains found.".red().bold());
}
