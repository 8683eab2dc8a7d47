//! The control set: one typed, toolkit-independent control per option.
//!
//! | Option type        | Control         | Widget                     |
//! |--------------------|-----------------|----------------------------|
//! | `bool`             | [`Toggle`]      | switch                     |
//! | `float`            | [`Slider`]      | bounded slider + readout   |
//! | `int`              | [`Counter`]     | `−` / text field / `+`     |
//! | `color`/`gradient` | [`ColorPicker`] | colour button              |
//! | anything else      | [`InfoRow`]     | none                       |
//!
//! Every interactive control holds a clone of the session's
//! [`SharedTracker`] and keeps it in sync on each edit.

use crate::color::{ColorError, HexColor};
use crate::factory::{generate, OptionKind};
use crate::humanize::humanize;
use crate::schema::{OptionDescriptor, SchemaError};
use crate::tracker::{SharedTracker, Value};
use crate::traits::Control;
use log::warn;
use std::fmt;

/// Errors from applying a user edit.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("{option}: expected a {expected} value, got {got:?}")]
    TypeMismatch {
        option: String,
        expected: &'static str,
        got: Value,
    },
    #[error("{option}: {text:?} is not an integer")]
    InvalidInteger { option: String, text: String },
    #[error(transparent)]
    InvalidColor(#[from] ColorError),
    #[error("{0} is read-only")]
    ReadOnly(String),
}

//  Visual description

/// The interactive part of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetView {
    Switch { active: bool },
    Slider { min: f64, max: f64, value: f64, readout: String },
    Counter { value: i64 },
    ColorSwatch { color: HexColor, gradient: bool },
    None,
}

/// What a frontend should draw for one control.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub title: String,
    pub description: String,
    pub widget: WidgetView,
}

impl fmt::Display for RowView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        match &self.widget {
            WidgetView::Switch { active } => {
                write!(f, " [{}]", if *active { "on" } else { "off" })
            }
            WidgetView::Slider { min, max, readout, .. } => {
                write!(f, " {} [{} - {}]", readout, min, max)
            }
            WidgetView::Counter { value } => write!(f, " [−] {} [+]", value),
            WidgetView::ColorSwatch { color, gradient } => {
                write!(f, " {}{}", color, if *gradient { " (gradient)" } else { "" })
            }
            WidgetView::None => Ok(()),
        }
    }
}

//  Shared plumbing

/// Name, display text and tracker handle common to all editable controls.
#[derive(Debug)]
struct Binding {
    name: String,
    title: String,
    description: String,
    tracker: SharedTracker,
}

impl Binding {
    fn new(option: &OptionDescriptor, tracker: &SharedTracker) -> Self {
        Self {
            name: option.name.clone(),
            title: humanize(&option.name),
            description: option.description.clone(),
            tracker: tracker.clone(),
        }
    }

    fn record(&self, current: Value, default: Value) {
        self.tracker
            .borrow_mut()
            .record(&self.name, &current, &default);
    }

    fn view(&self, widget: WidgetView) -> RowView {
        RowView {
            title: self.title.clone(),
            description: self.description.clone(),
            widget,
        }
    }

    fn mismatch(&self, expected: &'static str, got: Value) -> ControlError {
        ControlError::TypeMismatch {
            option: self.name.clone(),
            expected,
            got,
        }
    }
}

//  Toggle

/// Binary switch for `bool` options.
#[derive(Debug)]
pub struct Toggle {
    binding: Binding,
    default: bool,
    current: bool,
}

impl Control for Toggle {
    fn name(&self) -> &str {
        &self.binding.name
    }

    fn render(&self) -> RowView {
        self.binding.view(WidgetView::Switch {
            active: self.current,
        })
    }

    fn current_value(&self) -> Option<Value> {
        Some(Value::Bool(self.current))
    }

    fn on_user_edit(&mut self, value: Value) -> Result<(), ControlError> {
        let active = match value {
            Value::Bool(active) => active,
            other => return Err(self.binding.mismatch("bool", other)),
        };
        self.current = active;
        self.binding
            .record(Value::Bool(self.current), Value::Bool(self.default));
        Ok(())
    }
}

//  Slider

/// Continuous value in `[min, max]` for `float` options.
#[derive(Debug)]
pub struct Slider {
    binding: Binding,
    default: f64,
    current: f64,
    min: f64,
    max: f64,
    readout: String,
}

impl Slider {
    /// The value formatted to two decimals, as shown next to the slider.
    pub fn readout(&self) -> &str {
        &self.readout
    }
}

impl Control for Slider {
    fn name(&self) -> &str {
        &self.binding.name
    }

    fn render(&self) -> RowView {
        self.binding.view(WidgetView::Slider {
            min: self.min,
            max: self.max,
            value: self.current,
            readout: self.readout.clone(),
        })
    }

    fn current_value(&self) -> Option<Value> {
        Some(Value::Float(self.current))
    }

    fn on_user_edit(&mut self, value: Value) -> Result<(), ControlError> {
        let raw = match value {
            Value::Float(x) => x,
            Value::Int(n) => n as f64,
            other => return Err(self.binding.mismatch("float", other)),
        };
        self.current = raw.clamp(self.min, self.max);
        self.readout = format!("{:.2}", self.current);
        self.binding
            .record(Value::Float(self.current), Value::Float(self.default));
        Ok(())
    }
}

//  Counter

/// Unbounded integer with `±1` steps for `int` options.
#[derive(Debug)]
pub struct Counter {
    binding: Binding,
    default: i64,
    current: i64,
}

impl Counter {
    /// Add `delta` (the `−`/`+` buttons pass `-1`/`1`).
    pub fn step(&mut self, delta: i64) {
        self.set(self.current.saturating_add(delta));
    }

    /// Apply text typed directly into the field.
    ///
    /// Anything that is not an integer is rejected and changes nothing;
    /// the frontend should show [`text`](Counter::text) again.
    pub fn set_text(&mut self, text: &str) -> Result<(), ControlError> {
        let value = text
            .trim()
            .parse::<i64>()
            .map_err(|_| ControlError::InvalidInteger {
                option: self.binding.name.clone(),
                text: text.to_string(),
            })?;
        self.set(value);
        Ok(())
    }

    /// Commit the field contents when the user finishes editing (Enter or
    /// focus leaving the field).  Returns what the field should show: the
    /// new value, or the unchanged current value if `text` was rejected.
    pub fn commit_text(&mut self, text: &str) -> String {
        if let Err(e) = self.set_text(text) {
            warn!("{}", e);
        }
        self.text()
    }

    /// The field contents for the current value.
    pub fn text(&self) -> String {
        self.current.to_string()
    }

    fn set(&mut self, value: i64) {
        self.current = value;
        self.binding
            .record(Value::Int(self.current), Value::Int(self.default));
    }
}

impl Control for Counter {
    fn name(&self) -> &str {
        &self.binding.name
    }

    fn render(&self) -> RowView {
        self.binding.view(WidgetView::Counter {
            value: self.current,
        })
    }

    fn current_value(&self) -> Option<Value> {
        Some(Value::Int(self.current))
    }

    fn on_user_edit(&mut self, value: Value) -> Result<(), ControlError> {
        match value {
            Value::Int(n) => {
                self.set(n);
                Ok(())
            }
            other => Err(self.binding.mismatch("int", other)),
        }
    }
}

//  Colour picker

/// Colour button for `color` and `gradient` options.
///
/// Both the stored default and every picked colour are [`HexColor`]s, so
/// the comparison always happens on the normalised `#RRGGBB` form.
#[derive(Debug)]
pub struct ColorPicker {
    binding: Binding,
    default: HexColor,
    current: HexColor,
    /// Remaining gradient tokens; `None` for plain colours.
    gradient: Option<String>,
}

impl ColorPicker {
    /// Apply a colour given as text (`#rrggbb`, `0xaarrggbb`, …).
    pub fn set_hex(&mut self, text: &str) -> Result<(), ControlError> {
        let color = HexColor::parse(text)?;
        self.on_user_edit(Value::Color(color))
    }

    pub fn color(&self) -> &HexColor {
        &self.current
    }

    fn value_of(&self, color: &HexColor) -> Value {
        match &self.gradient {
            Some(tail) => Value::Gradient {
                color: color.clone(),
                tail: tail.clone(),
            },
            None => Value::Color(color.clone()),
        }
    }
}

impl Control for ColorPicker {
    fn name(&self) -> &str {
        &self.binding.name
    }

    fn render(&self) -> RowView {
        self.binding.view(WidgetView::ColorSwatch {
            color: self.current.clone(),
            gradient: self.gradient.is_some(),
        })
    }

    fn current_value(&self) -> Option<Value> {
        Some(self.value_of(&self.current))
    }

    fn on_user_edit(&mut self, value: Value) -> Result<(), ControlError> {
        self.current = match value {
            Value::Color(color) | Value::Gradient { color, .. } => color,
            other => return Err(self.binding.mismatch("color", other)),
        };
        self.binding
            .record(self.value_of(&self.current), self.value_of(&self.default));
        Ok(())
    }
}

//  Info row

/// Read-only row for option types without an editor.
#[derive(Debug)]
pub struct InfoRow {
    name: String,
    title: String,
    description: String,
}

impl Control for InfoRow {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> RowView {
        RowView {
            title: self.title.clone(),
            description: self.description.clone(),
            widget: WidgetView::None,
        }
    }

    fn current_value(&self) -> Option<Value> {
        None
    }

    fn on_user_edit(&mut self, _value: Value) -> Result<(), ControlError> {
        Err(ControlError::ReadOnly(self.name.clone()))
    }
}

//  Closed union

/// Any control, as produced from a schema option.
#[derive(Debug)]
pub enum ControlInstance {
    Toggle(Toggle),
    Slider(Slider),
    Counter(Counter),
    Color(ColorPicker),
    Info(InfoRow),
}

impl ControlInstance {
    /// Build the control for `option`, bound to `tracker`.
    pub fn from_descriptor(
        option: &OptionDescriptor,
        tracker: &SharedTracker,
    ) -> Result<Self, SchemaError> {
        let kind = generate(option)?;
        Ok(Self::new(option, kind, tracker))
    }

    /// Build a control from an already generated [`OptionKind`].
    pub fn new(option: &OptionDescriptor, kind: OptionKind, tracker: &SharedTracker) -> Self {
        match kind {
            OptionKind::Bool { default } => ControlInstance::Toggle(Toggle {
                binding: Binding::new(option, tracker),
                default,
                current: default,
            }),
            OptionKind::Float { default, min, max } => ControlInstance::Slider(Slider {
                binding: Binding::new(option, tracker),
                default,
                current: default,
                min,
                max,
                readout: format!("{:.2}", default),
            }),
            OptionKind::Int { default } => ControlInstance::Counter(Counter {
                binding: Binding::new(option, tracker),
                default,
                current: default,
            }),
            OptionKind::Color { default, gradient } => ControlInstance::Color(ColorPicker {
                binding: Binding::new(option, tracker),
                current: default.clone(),
                default,
                gradient,
            }),
            OptionKind::Other => ControlInstance::Info(InfoRow {
                name: option.name.clone(),
                title: humanize(&option.name),
                description: option.description.clone(),
            }),
        }
    }

    fn inner(&self) -> &dyn Control {
        match self {
            ControlInstance::Toggle(c) => c,
            ControlInstance::Slider(c) => c,
            ControlInstance::Counter(c) => c,
            ControlInstance::Color(c) => c,
            ControlInstance::Info(c) => c,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Control {
        match self {
            ControlInstance::Toggle(c) => c,
            ControlInstance::Slider(c) => c,
            ControlInstance::Counter(c) => c,
            ControlInstance::Color(c) => c,
            ControlInstance::Info(c) => c,
        }
    }
}

impl Control for ControlInstance {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn render(&self) -> RowView {
        self.inner().render()
    }

    fn current_value(&self) -> Option<Value> {
        self.inner().current_value()
    }

    fn on_user_edit(&mut self, value: Value) -> Result<(), ControlError> {
        self.inner_mut().on_user_edit(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::OptionType;
    use crate::tracker::ChangeTracker;

    fn build(name: &str, option_type: OptionType, default: &str, description: &str) -> (ControlInstance, SharedTracker) {
        let tracker = ChangeTracker::shared();
        let option = OptionDescriptor {
            name: name.into(),
            description: description.into(),
            option_type,
            default: default.into(),
        };
        let control = ControlInstance::from_descriptor(&option, &tracker).unwrap();
        (control, tracker)
    }

    #[test]
    fn toggle_tracks_non_default() {
        let (mut c, tracker) = build("misc.vfr", OptionType::Bool, "false", "");
        c.on_user_edit(Value::Bool(true)).unwrap();
        assert_eq!(tracker.borrow().get("misc.vfr"), Some(&Value::Bool(true)));
        c.on_user_edit(Value::Bool(false)).unwrap();
        assert!(tracker.borrow().is_empty());
        assert_eq!(c.render().widget, WidgetView::Switch { active: false });
    }

    #[test]
    fn slider_clamps_and_formats_readout() {
        let (mut c, tracker) = build("decoration.active_opacity", OptionType::Float, "1.0", "opacity [0.0 - 1.0]");
        c.on_user_edit(Value::Float(0.333)).unwrap();
        match c.render().widget {
            WidgetView::Slider { readout, value, .. } => {
                assert_eq!(readout, "0.33");
                assert_eq!(value, 0.333);
            }
            other => panic!("expected slider, got {:?}", other),
        }
        c.on_user_edit(Value::Float(7.0)).unwrap();
        assert_eq!(c.current_value(), Some(Value::Float(1.0)));
        assert!(tracker.borrow().is_empty());
    }

    #[test]
    fn slider_initial_readout() {
        let (c, _) = build("blur.noise", OptionType::Float, "0.0117", "[0.0 - 1.0]");
        let ControlInstance::Slider(s) = c else { panic!("expected slider") };
        assert_eq!(s.readout(), "0.01");
        assert!(matches!(s.render().widget, WidgetView::Slider { min, max, .. } if min == 0.0 && max == 1.0));
    }

    #[test]
    fn slider_with_non_finite_hint_uses_default_range() {
        let (mut c, tracker) = build("misc.weird", OptionType::Float, "0.5", "[nan - 1]");
        c.on_user_edit(Value::Float(4.0)).unwrap();
        assert_eq!(c.current_value(), Some(Value::Float(1.0)));
        assert_eq!(tracker.borrow().get("misc.weird"), Some(&Value::Float(1.0)));
    }

    #[test]
    fn slider_overwrites_tracked_value() {
        let (mut c, tracker) = build("blur.size", OptionType::Float, "0.0", "[0 - 10]");
        for v in [0.0, 3.5, 6.2] {
            c.on_user_edit(Value::Float(v)).unwrap();
        }
        assert_eq!(tracker.borrow().get("blur.size"), Some(&Value::Float(6.2)));
        assert_eq!(tracker.borrow().len(), 1);
    }

    #[test]
    fn counter_steps_and_returns_to_default() {
        let (c, tracker) = build("general.gaps_in", OptionType::Int, "5", "");
        let ControlInstance::Counter(mut c) = c else { panic!("expected counter") };
        c.step(1);
        c.step(1);
        assert_eq!(c.text(), "7");
        assert_eq!(tracker.borrow().get("general.gaps_in"), Some(&Value::Int(7)));
        c.step(-1);
        c.step(-1);
        assert!(!tracker.borrow().contains("general.gaps_in"));
    }

    #[test]
    fn counter_rejects_non_integer_text() {
        let (c, tracker) = build("general.gaps_out", OptionType::Int, "20", "");
        let ControlInstance::Counter(mut c) = c else { panic!("expected counter") };
        c.set_text("25").unwrap();
        let err = c.set_text("abc").unwrap_err();
        assert!(matches!(err, ControlError::InvalidInteger { .. }));
        assert_eq!(c.text(), "25");
        assert_eq!(tracker.borrow().get("general.gaps_out"), Some(&Value::Int(25)));
    }

    #[test]
    fn counter_commit_applies_or_restores_text() {
        let (c, tracker) = build("general.border_size", OptionType::Int, "1", "");
        let ControlInstance::Counter(mut c) = c else { panic!("expected counter") };
        assert_eq!(c.commit_text(" 3 "), "3");
        assert_eq!(tracker.borrow().get("general.border_size"), Some(&Value::Int(3)));
        assert_eq!(c.commit_text("3x"), "3");
        assert_eq!(c.commit_text("1"), "1");
        assert!(tracker.borrow().is_empty());
    }

    #[test]
    fn counter_saturates() {
        let (c, _) = build("x", OptionType::Int, &i64::MAX.to_string(), "");
        let ControlInstance::Counter(mut c) = c else { panic!("expected counter") };
        c.step(1);
        assert_eq!(c.current_value(), Some(Value::Int(i64::MAX)));
    }

    #[test]
    fn unset_color_displays_white() {
        let (c, _) = build("group.col.border", OptionType::Color, "unset", "");
        assert_eq!(
            c.render().widget,
            WidgetView::ColorSwatch {
                color: HexColor::parse("#FFFFFF").unwrap(),
                gradient: false
            }
        );
    }

    #[test]
    fn color_compares_normalised_forms() {
        let (c, tracker) = build("general.col.inactive_border", OptionType::Color, "0xff444444", "");
        let ControlInstance::Color(mut c) = c else { panic!("expected colour") };
        c.set_hex("#ff0000").unwrap();
        assert_eq!(
            tracker.borrow().get("general.col.inactive_border"),
            Some(&Value::Color(HexColor::parse("FF0000").unwrap()))
        );
        c.set_hex("#444444").unwrap();
        assert!(tracker.borrow().is_empty());
        assert!(c.set_hex("nope").is_err());
        assert_eq!(c.color().as_str(), "#444444");
    }

    #[test]
    fn gradient_edit_keeps_remaining_stops() {
        let (c, tracker) = build(
            "general.col.active_border",
            OptionType::Gradient,
            "0xff33ccff 0xff00ff99 45deg",
            "",
        );
        let ControlInstance::Color(mut c) = c else { panic!("expected colour") };
        assert!(matches!(c.render().widget, WidgetView::ColorSwatch { gradient: true, .. }));
        c.set_hex("#ff0000").unwrap();
        assert_eq!(
            tracker.borrow().get("general.col.active_border"),
            Some(&Value::Gradient {
                color: HexColor::parse("FF0000").unwrap(),
                tail: "0xff00ff99 45deg".into(),
            })
        );
        c.set_hex("0xee33ccff").unwrap();
        assert!(tracker.borrow().is_empty());
    }

    #[test]
    fn info_row_is_read_only() {
        let (mut c, tracker) = build("general.layout", OptionType::Other("str".into()), "dwindle", "layout");
        assert_eq!(c.current_value(), None);
        assert!(matches!(c.on_user_edit(Value::Int(1)), Err(ControlError::ReadOnly(_))));
        assert!(tracker.borrow().is_empty());
        assert_eq!(c.render().title, "General Layout");
    }

    #[test]
    fn wrong_value_type_is_rejected() {
        let (mut c, tracker) = build("misc.vfr", OptionType::Bool, "true", "");
        assert!(matches!(
            c.on_user_edit(Value::Int(0)),
            Err(ControlError::TypeMismatch { expected: "bool", .. })
        ));
        assert!(tracker.borrow().is_empty());
    }

    #[test]
    fn row_view_display() {
        let (c, _) = build("general.border_size", OptionType::Int, "1", "size of the border");
        assert_eq!(c.render().to_string(), "General Border Size [−] 1 [+]");
        assert_eq!(c.name(), "general.border_size");
    }
}
