use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

use super::KeyListView;
use crate::constants::{EMPTY_STATE, LOADING};
use crate::models::ApiKey;

const HEADERS: [&str; 5] = ["Name", "Key", "Status", "Created", "Id"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Active,
    Inactive,
}

impl StatusBadge {
    pub fn for_key(key: &ApiKey) -> Self {
        if key.is_active {
            StatusBadge::Active
        } else {
            StatusBadge::Inactive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBadge::Active => "Active",
            StatusBadge::Inactive => "Inactive",
        }
    }
}

/// First `len` characters of the secret followed by an ellipsis
pub fn truncate_key(key: &ApiKey, len: usize) -> String {
    format!("{}...", key.key.preview(len))
}

/// Creation date in local time, date only. Falls back to ISO dates when
/// `date_format` is not a valid strftime string.
pub fn format_created(created_at: &DateTime<Utc>, date_format: &str) -> String {
    let local = created_at.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(date_format)).is_err() {
        return local.date_naive().to_string();
    }
    out
}

pub fn render(view: &KeyListView) -> String {
    if view.loading {
        return LOADING.to_string();
    }

    let mut out = String::from("API Keys\n\n");

    if view.keys.is_empty() {
        out.push_str(EMPTY_STATE);
        out.push('\n');
    } else {
        let rows: Vec<[String; 5]> = view
            .keys
            .iter()
            .map(|key| {
                [
                    key.name.clone(),
                    truncate_key(key, view.display.key_preview_len),
                    StatusBadge::for_key(key).label().to_string(),
                    format_created(&key.created_at, &view.display.date_format),
                    key.id.clone(),
                ]
            })
            .collect();
        out.push_str(&table(&rows));
    }

    if view.show_modal {
        let _ = write!(
            out,
            "\nCreate API Key\n  Key Name: {}\n",
            if view.key_name.is_empty() {
                "(e.g., Production Key)"
            } else {
                view.key_name.as_str()
            }
        );
    }

    out
}

fn table(rows: &[[String; 5]]) -> String {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(rule.join("  ").as_str());
    out.push('\n');
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
