//! Session-scoped record of edited options.
//!
//! The [`ChangeTracker`] holds an entry for an option **iff** its current
//! value differs from its declared default.  A missing key means "use the
//! default".  Every control calls [`ChangeTracker::record`] once per user
//! edit, so the map never holds a stale value.

use crate::color::HexColor;
use log::debug;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A typed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    Color(HexColor),
    /// A gradient whose first colour was edited.  `tail` is the rest of the
    /// gradient (further colour stops, angle) as written in the default.
    Gradient { color: HexColor, tail: String },
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Float(x) => write!(f, "{}", x),
            Value::Int(n) => write!(f, "{}", n),
            Value::Color(c) => write!(f, "{}", c),
            Value::Gradient { color, tail } if tail.is_empty() => write!(f, "{}", color),
            Value::Gradient { color, tail } => write!(f, "{} {}", color, tail),
        }
    }
}

/// Option name → overridden value.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    entries: BTreeMap<String, Value>,
}

/// The tracker as shared between the session and every control.
///
/// The UI runs on a single thread, so plain `Rc<RefCell<_>>` suffices.
pub type SharedTracker = Rc<RefCell<ChangeTracker>>;

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tracker ready to be handed to controls.
    pub fn shared() -> SharedTracker {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Store `current` under `name` if it differs from `default`, otherwise
    /// drop any entry for `name`.
    pub fn record(&mut self, name: &str, current: &Value, default: &Value) {
        if current != default {
            debug!("tracker: {} = {}", name, current);
            self.entries.insert(name.to_string(), current.clone());
        } else if self.entries.remove(name).is_some() {
            debug!("tracker: {} back to default", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by option name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_to_default_removes_entry() {
        let mut t = ChangeTracker::new();
        let default = Value::Int(5);
        for v in [5, 7, 5] {
            t.record("general.gaps_in", &Value::Int(v), &default);
        }
        assert!(!t.contains("general.gaps_in"));
        assert!(t.is_empty());
    }

    #[test]
    fn last_write_wins() {
        let mut t = ChangeTracker::new();
        let default = Value::Float(0.0);
        for v in [0.0, 3.5, 6.2] {
            t.record("decoration.blur.size", &Value::Float(v), &default);
        }
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("decoration.blur.size"), Some(&Value::Float(6.2)));
    }

    #[test]
    fn equal_value_without_entry_is_noop() {
        let mut t = ChangeTracker::new();
        t.record("misc.vfr", &Value::Bool(true), &Value::Bool(true));
        assert!(t.is_empty());
    }

    #[test]
    fn iterates_sorted() {
        let mut t = ChangeTracker::new();
        t.record("b", &Value::Int(1), &Value::Int(0));
        t.record("a", &Value::Bool(true), &Value::Bool(false));
        let keys: Vec<&str> = t.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Float(0.5).to_string(), "0.5");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(
            Value::Color(HexColor::parse("0xffaabbcc").unwrap()).to_string(),
            "#AABBCC"
        );
        assert_eq!(
            Value::Gradient {
                color: HexColor::parse("33ccff").unwrap(),
                tail: "0xff00ff99 45deg".into(),
            }
            .to_string(),
            "#33CCFF 0xff00ff99 45deg"
        );
    }
}
