use attrsearch::api::{CmdMessage, MessageLevel, SchemaRow};
use attrsearch::config::{SearchConfig, CONFIG_KEYS};
use attrsearch::endpoint::SearchRequest;
use attrsearch::model::AttributeFilter;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const IN_USE_MARKER: &str = "●";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// One chip per line, labels padded to a common display width.
pub(super) fn render_filters(filters: &[AttributeFilter]) -> String {
    if filters.is_empty() {
        return format!("{}\n", "No active filters.".dimmed());
    }

    let width = filters.iter().map(|f| f.label().width()).max().unwrap_or(0);
    let mut out = String::new();
    for (i, filter) in filters.iter().enumerate() {
        let label = filter.label();
        let pad = " ".repeat(width - label.width());
        out.push_str(&format!(
            "{:>3}. {}{}  {}\n",
            i + 1,
            label.bold(),
            pad,
            filter.value
        ));
    }
    out
}

pub(super) fn render_schema_rows(rows: &[SchemaRow]) -> String {
    if rows.is_empty() {
        return format!("{}\n", "The profile declares no attributes.".dimmed());
    }

    let width = rows.iter().map(|r| r.name.width()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let marker = if row.in_use {
            IN_USE_MARKER.yellow().to_string()
        } else {
            " ".to_string()
        };
        let pad = " ".repeat(width - row.name.width());
        out.push_str(&format!(
            "{} {}{}  {}\n",
            marker,
            row.name,
            pad,
            row.label.dimmed()
        ));
    }
    out
}

pub(super) fn render_search(request: &SearchRequest) -> String {
    format!(
        "{} {}\n{} {}\n",
        "GET".bold(),
        request.url,
        "q:".dimmed(),
        request.query
    )
}

pub(super) fn render_config(config: &SearchConfig) -> String {
    let width = CONFIG_KEYS.iter().map(|k| k.width()).max().unwrap_or(0);
    CONFIG_KEYS
        .iter()
        .map(|key| {
            let value = config.get(key).unwrap_or_default();
            format!("{:<width$}  {}\n", key, value, width = width)
        })
        .collect()
}
