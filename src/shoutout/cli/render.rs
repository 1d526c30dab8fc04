//! Terminal rendering of grouped shoutouts.
//!
//! Each name gets its own rounded frame, titled with the name. The shoutout
//! text inside a frame is tinted with a color picked from a fixed palette by
//! hashing the name, so a given person always shows up in the same color:
//!
//! ```text
//! ╭ Ana ─────────────────────────────────────╮
//! │                                          │
//! │  Great demo! @ 2026-02-10T12:30:00.000Z  │
//! │                                          │
//! ╰──────────────────────────────────────────╯
//! ```

use chrono::SecondsFormat;
use colored::{Color, Colorize};
use shoutout::api::{CmdMessage, MessageLevel};
use shoutout::group::ShoutGroup;
use unicode_width::UnicodeWidthStr;

const PADDING: usize = 2;
const PALETTE: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Render all groups, one frame per name, separated by blank lines.
pub(super) fn render_groups(groups: &[ShoutGroup]) -> String {
    render_groups_internal(groups, true)
}

/// `with_color = false` renders plain text; tests use it for deterministic
/// output. With color on, styling still defers to `colored`'s global gate, so
/// piped output stays free of escape codes.
fn render_groups_internal(groups: &[ShoutGroup], with_color: bool) -> String {
    if groups.is_empty() {
        return "No shoutouts found.\n".to_string();
    }
    let frames: Vec<String> = groups
        .iter()
        .map(|group| render_group(group, with_color))
        .collect();
    frames.join("\n")
}

fn render_group(group: &ShoutGroup, with_color: bool) -> String {
    let color = palette_color(&group.name);

    // Measure on the plain text, style afterwards. Escape codes have no width.
    let lines: Vec<(String, String)> = group
        .shoutouts
        .iter()
        .map(|entry| {
            let stamp = entry
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Millis, true);
            let plain = format!("{} @ {}", entry.shoutout, stamp);
            let styled = if with_color {
                format!("{} @ {}", entry.shoutout.color(color), stamp.dimmed())
            } else {
                plain.clone()
            };
            (plain, styled)
        })
        .collect();

    let widest = lines
        .iter()
        .map(|(plain, _)| plain.width())
        .max()
        .unwrap_or(0);
    let name_width = group.name.width();
    // Wide enough for the longest line plus padding, and for the title with
    // a little rule after it.
    let interior = (widest + 2 * PADDING).max(name_width + 4);

    let title = if with_color {
        group.name.bold().to_string()
    } else {
        group.name.clone()
    };

    let mut out = String::new();
    out.push_str(&format!(
        "╭ {} {}╮\n",
        title,
        "─".repeat(interior.saturating_sub(name_width + 2))
    ));
    let blank_row = format!("│{}│\n", " ".repeat(interior));
    out.push_str(&blank_row);
    for (plain, styled) in &lines {
        let fill = interior.saturating_sub(PADDING + plain.width());
        out.push_str(&format!(
            "│{}{}{}│\n",
            " ".repeat(PADDING),
            styled,
            " ".repeat(fill)
        ));
    }
    out.push_str(&blank_row);
    out.push_str(&format!("╰{}╯\n", "─".repeat(interior)));
    out
}

/// Stable palette pick per name: sum of char codes modulo the palette size.
fn palette_color(name: &str) -> Color {
    let hash = name
        .chars()
        .fold(0u32, |acc, c| acc.wrapping_add(c as u32));
    PALETTE[(hash % PALETTE.len() as u32) as usize]
}
