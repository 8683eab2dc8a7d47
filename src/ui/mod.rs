//! Frontends for an editing [`Session`](crate::session::Session).
//!
//! [`text`] prints the assembled tabs and is always available.  When the
//! `ui-gtk` feature is enabled, [`gtk::run_main_loop`] takes over the main
//! thread and drives the editor window through the GLib main loop.

pub mod text;

#[cfg(feature = "ui-gtk")]
pub mod gtk;
