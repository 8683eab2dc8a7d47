//! Display titles derived from option and category names.

/// Turn a dotted/underscored option name into a title.
///
/// `_` and `.` become spaces, then every letter that follows a non-letter
/// is uppercased and every other letter lowercased.
///
/// ```
/// use hyprcc::humanize::humanize;
/// assert_eq!(humanize("general.border_size"), "General Border Size");
/// ```
pub fn humanize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_letter = false;
    for c in name.chars() {
        let c = if c == '_' || c == '.' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_name() {
        assert_eq!(humanize("general.border_size"), "General Border Size");
    }

    #[test]
    fn nested_and_colour_names() {
        assert_eq!(humanize("decoration.blur.new_optimizations"), "Decoration Blur New Optimizations");
        assert_eq!(humanize("col.active_border"), "Col Active Border");
    }

    #[test]
    fn acronyms_are_not_preserved() {
        assert_eq!(humanize("xwayland.use_nearest_neighbor"), "Xwayland Use Nearest Neighbor");
        assert_eq!(humanize("misc.VRR"), "Misc Vrr");
    }

    #[test]
    fn digits_start_a_new_word() {
        assert_eq!(humanize("gestures.workspace_swipe_3d"), "Gestures Workspace Swipe 3D");
    }

    #[test]
    fn capitalize_category() {
        assert_eq!(capitalize("decoration"), "Decoration");
        assert_eq!(capitalize("BLUR"), "Blur");
        assert_eq!(capitalize(""), "");
    }
}
