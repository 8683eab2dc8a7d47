//! Option factory: schema descriptor → typed option kind.
//!
//! [`generate`] is the only place that interprets the string `default`
//! field.  A default that does not parse for its declared type fails the
//! whole load with [`SchemaError::InvalidDefault`] naming the option.

use crate::color::{HexColor, UNSET_FALLBACK};
use crate::range::extract_range;
use crate::schema::{OptionDescriptor, OptionType, SchemaError};
use log::warn;

/// Sentinel Hyprland uses for colours with no value.
const UNSET: &str = "unset";

/// What kind of control an option becomes, with its parsed default.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionKind {
    Bool {
        default: bool,
    },
    Float {
        default: f64,
        min: f64,
        max: f64,
    },
    Int {
        default: i64,
    },
    /// Colours and gradients.  A gradient is edited through its first
    /// colour; `gradient` holds the tokens after it (further stops, angle)
    /// so they can be written back unchanged.  `None` for plain colours.
    Color {
        default: HexColor,
        gradient: Option<String>,
    },
    /// No editor; shown as a plain title/description row.
    Other,
}

/// Parse a bool default: `true`, `yes` and `1` (any case) are true.
pub fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

/// Turn one descriptor into its [`OptionKind`].
pub fn generate(option: &OptionDescriptor) -> Result<OptionKind, SchemaError> {
    let invalid = || SchemaError::InvalidDefault {
        option: option.name.clone(),
        expected: option.option_type.clone(),
        value: option.default.clone(),
    };

    match &option.option_type {
        OptionType::Bool => Ok(OptionKind::Bool {
            default: parse_bool(&option.default),
        }),

        OptionType::Float => {
            let default: f64 = option.default.trim().parse().map_err(|_| invalid())?;
            let (mut min, mut max) = extract_range(&option.description);
            if min > max {
                warn!("{}: reversed range [{} - {}], swapping", option.name, min, max);
                std::mem::swap(&mut min, &mut max);
            }
            if default < min || default > max {
                warn!(
                    "{}: default {} lies outside [{} - {}]",
                    option.name, default, min, max
                );
            }
            Ok(OptionKind::Float { default, min, max })
        }

        OptionType::Int => {
            let default: i64 = option.default.trim().parse().map_err(|_| invalid())?;
            Ok(OptionKind::Int { default })
        }

        OptionType::Color => {
            let raw = if option.default == UNSET {
                UNSET_FALLBACK
            } else {
                option.default.as_str()
            };
            let default = HexColor::parse(raw).map_err(|_| invalid())?;
            Ok(OptionKind::Color {
                default,
                gradient: None,
            })
        }

        OptionType::Gradient => {
            // "0xffaabbcc 0xff112233 45deg": edit the first colour, keep the rest.
            let (first, tail) = if option.default == UNSET {
                (UNSET_FALLBACK, String::new())
            } else {
                let mut tokens = option.default.split_whitespace();
                let first = tokens.next().unwrap_or("");
                (first, tokens.collect::<Vec<_>>().join(" "))
            };
            let default = HexColor::parse(first).map_err(|_| invalid())?;
            Ok(OptionKind::Color {
                default,
                gradient: Some(tail),
            })
        }

        OptionType::Other(_) => Ok(OptionKind::Other),
    }
}
