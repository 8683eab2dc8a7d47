//! Groups generated controls into tabs and sub-category cards.

use crate::controls::ControlInstance;
use crate::humanize::capitalize;
use crate::schema::{Category, OptionDescriptor, Schema, SchemaError};
use crate::tracker::SharedTracker;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// A control shared between the session and the widget callbacks that
/// edit it.
pub type ControlHandle = Rc<RefCell<ControlInstance>>;

/// A titled group of controls for one sub-category.
#[derive(Debug)]
pub struct Card {
    /// `"<Name>:"`, capitalised.
    pub title: String,
    pub controls: Vec<ControlHandle>,
}

/// One page of the editor, built from a top-level category.
#[derive(Debug)]
pub struct Tab {
    pub title: String,
    pub icon: Option<String>,
    pub controls: Vec<ControlHandle>,
    pub cards: Vec<Card>,
}

impl Tab {
    /// All controls on this tab, top-level first, then card by card.
    pub fn all_controls(&self) -> impl Iterator<Item = &ControlHandle> {
        self.controls
            .iter()
            .chain(self.cards.iter().flat_map(|c| c.controls.iter()))
    }
}

/// Build one [`Tab`] per category, in schema order.
///
/// Fails on the first option whose default cannot be parsed.
pub fn assemble(schema: &Schema, tracker: &SharedTracker) -> Result<Vec<Tab>, SchemaError> {
    schema
        .categories
        .iter()
        .map(|(name, category)| build_tab(name, category, tracker))
        .collect()
}

fn build_tab(name: &str, category: &Category, tracker: &SharedTracker) -> Result<Tab, SchemaError> {
    let controls = build_controls(&category.options, tracker)?;
    let cards = category
        .sub_categories
        .iter()
        .map(|(sub_name, options)| {
            Ok(Card {
                title: format!("{}:", capitalize(sub_name)),
                controls: build_controls(options, tracker)?,
            })
        })
        .collect::<Result<Vec<_>, SchemaError>>()?;

    debug!(
        "tab {:?}: {} option(s), {} card(s)",
        name,
        controls.len(),
        cards.len()
    );

    Ok(Tab {
        title: capitalize(name),
        icon: category.icon.clone(),
        controls,
        cards,
    })
}

fn build_controls(
    options: &[OptionDescriptor],
    tracker: &SharedTracker,
) -> Result<Vec<ControlHandle>, SchemaError> {
    options
        .iter()
        .map(|option| {
            let control = ControlInstance::from_descriptor(option, tracker)?;
            Ok(Rc::new(RefCell::new(control)))
        })
        .collect()
}
