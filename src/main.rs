//! Entry point for **hyprcc**.
//!
//! Loads the config and the option schema, builds a
//! [`Session`](hyprcc::session::Session), then hands it to a frontend.
//!
//! When the `ui-gtk` feature is enabled the main thread runs the GLib main
//! loop with the editor window.  With `--list`, or without the feature, the
//! assembled tabs are printed to stdout instead.
//!
//! ```text
//! hyprcc [--schema <path>] [--list]
//! ```

use hyprcc::config::Config;
use hyprcc::session::Session;
use log::{error, info};
use std::path::PathBuf;

/// Resolve the config directory (`$XDG_CONFIG_HOME/hyprcc`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("hyprcc")
}

/// Try to load the config from `$XDG_CONFIG_HOME/hyprcc/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

/// Resolve the CSS stylesheet path.
#[cfg(feature = "ui-gtk")]
fn css_path() -> PathBuf {
    config_dir().join("style.css")
}

//  Command line

#[derive(Debug, Default)]
struct Args {
    schema: Option<PathBuf>,
    list: bool,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--list" => args.list = true,
            "--schema" => match iter.next() {
                Some(path) => args.schema = Some(PathBuf::from(path)),
                None => {
                    error!("--schema requires a path");
                    std::process::exit(2);
                }
            },
            other => {
                error!("unknown argument {:?}", other);
                std::process::exit(2);
            }
        }
    }
    args
}

//  Main

fn main() {
    env_logger::init();

    let args = parse_args();
    let config = load_config();
    let dir = config_dir();

    let schema_path = args.schema.unwrap_or_else(|| config.schema_path_in(&dir));
    let session = match Session::load(&schema_path, Some(config.save_path_in(&dir))) {
        Ok(s) => s,
        Err(e) => {
            error!("cannot build editor: {}", e);
            std::process::exit(1);
        }
    };

    if args.list {
        print!("{}", hyprcc::ui::text::render_tabs(session.tabs()));
        return;
    }

    start_frontend(session, config);
}

//  Frontends

#[cfg(feature = "ui-gtk")]
fn start_frontend(session: Session, config: Config) {
    if let Err(e) = hyprcc::ui::gtk::run_main_loop(session, Some(css_path()), config.window) {
        error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ui-gtk"))]
fn start_frontend(session: Session, _config: Config) {
    info!("built without `ui-gtk`, listing options");
    print!("{}", hyprcc::ui::text::render_tabs(session.tabs()));
}
