//! GTK4 editor window that runs on the **main thread**.
//!
//! # Widget tree
//!
//! ```text
//! window                          (title "Hyprland Control Center")
//! ├ headerbar
//! │   └ .save-button            ("Save", packed at the end)
//! └ notebook                      (one page per tab)
//!     └ scrolledwindow
//!         └ .tab-page
//!             ├ listbox.boxed-list      (top-level options)
//!             │   └ .option-row          (title/description + widget)
//!             └ frame.card              (one per sub-category)
//!                 ├ .card-title
//!                 └ listbox.boxed-list
//! ```
//!
//! # CSS selectors
//!
//! | Selector          | Targets                                   |
//! |-------------------|-------------------------------------------|
//! | `.save-button`    | The header bar Save button                |
//! | `.tab-page`       | Content box of every notebook page        |
//! | `.option-row`     | One row per option                        |
//! | `.option-title`   | Humanised option name                     |
//! | `.option-desc`    | Description under the title               |
//! | `.readout`        | Two-decimal value next to a slider        |
//! | `.card`           | Sub-category frame                        |
//! | `.card-title`     | Sub-category heading                      |
//!
//! Every widget callback goes through [`Control::on_user_edit`] (or the
//! counter helpers), so the tracker is updated after the widget has
//! already shown the new value.

use crate::assembler::{Card, ControlHandle, Tab};
use crate::color::HexColor;
use crate::config::WindowConfig;
use crate::controls::{ControlInstance, Counter, WidgetView};
use crate::session::Session;
use crate::tracker::Value;
use crate::traits::Control;
use gtk4::prelude::*;
use gtk4::{gdk, glib};
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::rc::Rc;

const TITLE: &str = "Hyprland Control Center";

//  Default CSS

/// `@ACCENT@` is replaced with [`WindowConfig::accent_color`].
const DEFAULT_CSS: &str = r#"
.save-button {
    background: @ACCENT@;
    color: #101010;
    border-radius: 10px;
    padding: 2px 14px;
}

.tab-page {
    padding: 20px;
}

.option-row {
    padding: 6px 10px;
}

.option-title {
    font-weight: bold;
}

.option-desc {
    opacity: 0.7;
    font-size: smaller;
}

.readout {
    font-family: monospace;
    min-width: 48px;
}

.card {
    border-radius: 12px;
    padding: 10px;
}

.card-title {
    font-size: 18pt;
    font-weight: bold;
    margin-bottom: 6px;
}
"#;

/// Error from bringing up the GTK frontend.
#[derive(Debug, thiserror::Error)]
#[error("GTK error: {0}")]
pub struct UiError(String);

//  Public API

/// Build the editor window for `session` and run the GLib main loop on the
/// current thread until the window is closed.
pub fn run_main_loop(
    session: Session,
    css_path: Option<PathBuf>,
    config: WindowConfig,
) -> Result<(), UiError> {
    gtk4::init().map_err(|e| UiError(e.to_string()))?;
    info!("GTK4 initialised on main thread");

    if config.prefer_dark {
        if let Some(settings) = gtk4::Settings::default() {
            settings.set_gtk_application_prefer_dark_theme(true);
        }
    }
    load_css(&css_path, &config.accent_color);

    let session = Rc::new(session);

    let window = gtk4::Window::new();
    window.set_title(Some(TITLE));
    window.set_default_size(config.width, config.height);

    //  Header bar with Save
    let header = gtk4::HeaderBar::new();
    let save_button = gtk4::Button::with_label("Save");
    save_button.add_css_class("save-button");
    match session.save_target() {
        Some(path) => save_button.set_tooltip_text(Some(&format!("Write overrides to {}", path.display()))),
        None => save_button.set_tooltip_text(Some("Log the changed options")),
    }
    {
        let session = session.clone();
        save_button.connect_clicked(move |_| match session.save() {
            Ok(report) => match report.written_to {
                Some(path) => info!("saved {} change(s) to {}", report.entries, path.display()),
                None => info!("dumped {} change(s)", report.entries),
            },
            Err(e) => error!("save failed: {}", e),
        });
    }
    header.pack_end(&save_button);
    window.set_titlebar(Some(&header));

    //  One notebook page per tab
    let notebook = gtk4::Notebook::new();
    notebook.set_scrollable(true);
    for tab in session.tabs() {
        let page = build_page(tab);
        notebook.append_page(&page, Some(&tab_label(tab)));
    }
    window.set_child(Some(&notebook));
    info!("window built with {} page(s)", notebook.n_pages());

    let main_loop = glib::MainLoop::new(None, false);
    {
        let main_loop = main_loop.clone();
        window.connect_close_request(move |_| {
            main_loop.quit();
            glib::Propagation::Proceed
        });
    }

    window.present();
    info!("entering GLib main loop");
    main_loop.run();
    info!("GLib main loop exited");
    Ok(())
}

//  Pages and cards

fn tab_label(tab: &Tab) -> gtk4::Box {
    let label_box = gtk4::Box::new(gtk4::Orientation::Horizontal, 6);
    if let Some(icon) = &tab.icon {
        label_box.append(&gtk4::Image::from_icon_name(icon));
    }
    label_box.append(&gtk4::Label::new(Some(&tab.title)));
    label_box
}

fn build_page(tab: &Tab) -> gtk4::ScrolledWindow {
    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 10);
    content.add_css_class("tab-page");

    if !tab.controls.is_empty() {
        content.append(&build_list(&tab.controls));
    }
    for card in &tab.cards {
        content.append(&build_card(card));
    }

    gtk4::ScrolledWindow::builder()
        .child(&content)
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .vexpand(true)
        .build()
}

fn build_card(card: &Card) -> gtk4::Frame {
    let inner = gtk4::Box::new(gtk4::Orientation::Vertical, 6);
    let title = gtk4::Label::new(Some(&card.title));
    title.add_css_class("card-title");
    title.set_xalign(0.0);
    inner.append(&title);
    inner.append(&build_list(&card.controls));

    let frame = gtk4::Frame::new(None);
    frame.add_css_class("card");
    frame.set_child(Some(&inner));
    frame
}

fn build_list(controls: &[ControlHandle]) -> gtk4::ListBox {
    let list = gtk4::ListBox::new();
    list.set_selection_mode(gtk4::SelectionMode::None);
    list.add_css_class("boxed-list");
    for control in controls {
        list.append(&build_row(control));
    }
    list
}

//  Rows

fn build_row(control: &ControlHandle) -> gtk4::Box {
    let view = control.borrow().render();

    let row = gtk4::Box::new(gtk4::Orientation::Horizontal, 12);
    row.add_css_class("option-row");

    let text = gtk4::Box::new(gtk4::Orientation::Vertical, 2);
    text.set_hexpand(true);
    let title = gtk4::Label::new(Some(&view.title));
    title.add_css_class("option-title");
    title.set_xalign(0.0);
    text.append(&title);
    if !view.description.is_empty() {
        let desc = gtk4::Label::new(Some(&view.description));
        desc.add_css_class("option-desc");
        desc.set_xalign(0.0);
        desc.set_wrap(true);
        text.append(&desc);
    }
    row.append(&text);

    match view.widget {
        WidgetView::Switch { active } => row.append(&switch_widget(control, active)),
        WidgetView::Slider {
            min,
            max,
            value,
            readout,
        } => {
            let (readout_label, scale) = slider_widgets(control, min, max, value, &readout);
            row.append(&readout_label);
            row.append(&scale);
        }
        WidgetView::Counter { value } => row.append(&counter_widget(control, value)),
        WidgetView::ColorSwatch { color, gradient } => {
            if gradient {
                let hint = gtk4::Label::new(Some("gradient"));
                hint.add_css_class("option-desc");
                row.append(&hint);
            }
            row.append(&color_widget(control, &color));
        }
        WidgetView::None => {}
    }
    row
}

fn switch_widget(control: &ControlHandle, active: bool) -> gtk4::Switch {
    let switch = gtk4::Switch::builder()
        .active(active)
        .valign(gtk4::Align::Center)
        .build();
    let control = control.clone();
    switch.connect_state_set(move |_, state| {
        apply(&control, Value::Bool(state));
        glib::Propagation::Proceed
    });
    switch
}

fn slider_widgets(
    control: &ControlHandle,
    min: f64,
    max: f64,
    value: f64,
    readout: &str,
) -> (gtk4::Label, gtk4::Scale) {
    let label = gtk4::Label::new(Some(readout));
    label.add_css_class("readout");

    // GtkScale needs a non-empty range.
    let max = if max > min { max } else { min + 1.0 };
    let scale = gtk4::Scale::with_range(gtk4::Orientation::Horizontal, min, max, (max - min) / 100.0);
    scale.set_value(value);
    scale.set_draw_value(false);
    scale.set_width_request(220);
    scale.set_valign(gtk4::Align::Center);

    let control = control.clone();
    let readout_label = label.clone();
    scale.connect_value_changed(move |scale| {
        apply(&control, Value::Float(scale.value()));
        if let WidgetView::Slider { readout, .. } = control.borrow().render().widget {
            readout_label.set_text(&readout);
        }
    });
    (label, scale)
}

fn counter_widget(control: &ControlHandle, value: i64) -> gtk4::Box {
    let container = gtk4::Box::new(gtk4::Orientation::Horizontal, 4);
    container.set_valign(gtk4::Align::Center);

    let minus = gtk4::Button::from_icon_name("list-remove-symbolic");
    let entry = gtk4::Entry::new();
    entry.set_text(&value.to_string());
    entry.set_width_chars(6);
    entry.set_alignment(0.5);
    let plus = gtk4::Button::from_icon_name("list-add-symbolic");

    for (button, delta) in [(&minus, -1), (&plus, 1)] {
        let control = control.clone();
        let entry = entry.clone();
        button.connect_clicked(move |_| {
            if let Some(text) = with_counter(&control, |c| {
                c.step(delta);
                c.text()
            }) {
                entry.set_text(&text);
            }
        });
    }

    // Typed text is committed on Enter and when the field loses focus.
    {
        let control = control.clone();
        entry.connect_activate(move |entry| commit_entry(&control, entry));
    }
    {
        let control = control.clone();
        let entry_ref = entry.clone();
        let focus = gtk4::EventControllerFocus::new();
        focus.connect_leave(move |_| commit_entry(&control, &entry_ref));
        entry.add_controller(focus);
    }

    container.append(&minus);
    container.append(&entry);
    container.append(&plus);
    container
}

#[allow(deprecated)]
fn color_widget(control: &ControlHandle, color: &HexColor) -> gtk4::ColorButton {
    let button = gtk4::ColorButton::new();
    button.set_use_alpha(false);
    button.set_valign(gtk4::Align::Center);
    match gdk::RGBA::parse(color.as_str()) {
        Ok(rgba) => button.set_rgba(&rgba),
        Err(e) => warn!("cannot show colour {}: {}", color, e),
    }

    let control = control.clone();
    button.connect_color_set(move |button| {
        let rgba = button.rgba();
        let picked = HexColor::from_rgb_f64(
            f64::from(rgba.red()),
            f64::from(rgba.green()),
            f64::from(rgba.blue()),
        );
        apply(&control, Value::Color(picked));
    });
    button
}

//  Helpers

fn apply(control: &ControlHandle, value: Value) {
    let mut control = control.borrow_mut();
    debug!("edit {} -> {}", control.name(), value);
    if let Err(e) = control.on_user_edit(value) {
        warn!("{}", e);
    }
}

fn commit_entry(control: &ControlHandle, entry: &gtk4::Entry) {
    let typed = entry.text();
    if let Some(shown) = with_counter(control, |c| c.commit_text(&typed)) {
        if shown != typed.as_str() {
            entry.set_text(&shown);
        }
    }
}

fn with_counter<R>(control: &ControlHandle, f: impl FnOnce(&mut Counter) -> R) -> Option<R> {
    match &mut *control.borrow_mut() {
        ControlInstance::Counter(counter) => Some(f(counter)),
        _ => None,
    }
}

//  CSS loading

fn load_css(css_path: &Option<PathBuf>, accent: &str) {
    let provider = gtk4::CssProvider::new();

    let css_content = match css_path.as_ref().filter(|p| p.exists()) {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(content) => {
                info!("user CSS: {} ({} bytes)", p.display(), content.len());
                content
            }
            Err(e) => {
                warn!("CSS read failed ({}): {}, using built-in", p.display(), e);
                DEFAULT_CSS.replace("@ACCENT@", accent)
            }
        },
        None => {
            info!("no user CSS, using built-in default");
            DEFAULT_CSS.replace("@ACCENT@", accent)
        }
    };

    #[allow(deprecated)]
    provider.load_from_data(&css_content);

    if let Some(display) = gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
        info!("CSS registered on display");
    } else {
        warn!("no GDK display, CSS will not be applied");
    }
}
