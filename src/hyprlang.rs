//! Rendering tracked changes as a Hyprland config snippet.
//!
//! The output is meant to be pulled into `hyprland.conf` with
//! `source = <path>`; hyprcc never edits the user's main config.
//!
//! ```text
//! # generated by hyprcc
//! decoration:active_opacity = 0.9
//! general:border_size = 4
//! general:col.active_border = 0xffFF0000 0xff00ff99 45deg
//! general:col.inactive_border = rgb(595959)
//! ```

use crate::tracker::{ChangeTracker, Value};

const HEADER: &str = "# generated by hyprcc";

/// Hyprland's `category:key` form of a dotted option name.
///
/// Colour variables keep their `col.` prefix (`general:col.active_border`).
pub fn config_key(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev: Option<&str> = None;
    for segment in name.split('.') {
        match prev {
            None => {}
            Some("col") => out.push('.'),
            Some(_) => out.push(':'),
        }
        out.push_str(segment);
        prev = Some(segment);
    }
    out
}

/// Hyprland's textual form of a value.
pub fn config_value(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Float(x) => x.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Color(c) => format!("rgb({})", c.digits()),
        Value::Gradient { color, tail } if tail.is_empty() => format!("0xff{}", color.digits()),
        Value::Gradient { color, tail } => format!("0xff{} {}", color.digits(), tail),
    }
}

/// One `key = value` line per tracked change, sorted by option name.
pub fn render_overrides(tracker: &ChangeTracker) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for (name, value) in tracker.iter() {
        out.push_str(&format!("{} = {}\n", config_key(name), config_value(value)));
    }
    out
}
