//! **hyprcc** — a schema-driven settings editor for Hyprland.
//!
//! A JSON schema lists every tunable option with its type, default and
//! description.  hyprcc turns each option into a typed control, groups the
//! controls into one tab per category (with cards for sub-categories), and
//! records every edit that moves an option away from its default.
//!
//! # Architecture
//!
//! ```text
//! schema ──► factory ──► controls ──► assembler ──► ui
//!                            │
//!                            └──► tracker ──► hyprlang (Save)
//! ```
//!
//! * [`schema`] loads the document, keeping file order.
//! * [`factory`] parses each option's string default into an
//!   [`OptionKind`](factory::OptionKind), using [`range`] for float bounds.
//! * [`controls`] holds the toolkit-independent controls behind the
//!   [`traits::Control`] capability trait.
//! * [`tracker`] is the session's record of non-default values, owned by
//!   [`session::Session`] and shared with every control.
//! * [`ui`] draws a session, either as text or as a GTK4 window.

pub mod assembler;
pub mod color;
pub mod config;
pub mod controls;
pub mod factory;
pub mod humanize;
pub mod hyprlang;
pub mod range;
pub mod schema;
pub mod session;
pub mod tracker;
pub mod traits;
pub mod ui;
