//! Plain-text rendering of the assembled tabs (`hyprcc --list`).

use crate::assembler::{ControlHandle, Tab};
use crate::traits::Control;
use std::fmt::Write;

/// Render every tab, card and control as indented text.
///
/// ```text
/// == General (preferences-system)
///   General Border Size [−] 1 [+]
///   Snap:
///     General Snap Enabled [off]
/// ```
pub fn render_tabs(tabs: &[Tab]) -> String {
    let mut out = String::new();
    for tab in tabs {
        match &tab.icon {
            Some(icon) => {
                let _ = writeln!(out, "== {} ({})", tab.title, icon);
            }
            None => {
                let _ = writeln!(out, "== {}", tab.title);
            }
        }
        write_controls(&mut out, &tab.controls, 1);
        for card in &tab.cards {
            let _ = writeln!(out, "  {}", card.title);
            write_controls(&mut out, &card.controls, 2);
        }
    }
    out
}

fn write_controls(out: &mut String, controls: &[ControlHandle], depth: usize) {
    let indent = "  ".repeat(depth);
    for control in controls {
        let _ = writeln!(out, "{}{}", indent, control.borrow().render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;
    use crate::schema::Schema;
    use crate::tracker::ChangeTracker;

    #[test]
    fn lists_tabs_cards_and_controls() {
        let json = r#"{
            "general": {
                "icon": "preferences-system",
                "options": [
                    { "name": "general.border_size", "description": "", "type": "int", "default": "1" }
                ],
                "sub_categories": {
                    "snap": [
                        { "name": "general.snap.enabled", "description": "", "type": "bool", "default": "false" }
                    ]
                }
            },
            "decoration": {
                "options": [
                    { "name": "decoration.col.shadow", "description": "", "type": "color", "default": "0xee1a1a1a" },
                    { "name": "decoration.active_opacity", "description": "[0.0 - 1.0]", "type": "float", "default": "1.0" }
                ]
            }
        }"#;
        let schema = Schema::from_json(json).unwrap();
        let tabs = assemble(&schema, &ChangeTracker::shared()).unwrap();
        assert_eq!(
            render_tabs(&tabs),
            "== General (preferences-system)\n\
             \x20 General Border Size [−] 1 [+]\n\
             \x20 Snap:\n\
             \x20   General Snap Enabled [off]\n\
             == Decoration\n\
             \x20 Decoration Col Shadow #1A1A1A\n\
             \x20 Decoration Active Opacity 1.00 [0 - 1]\n"
        );
    }
}
