//! Roster views and the list/detail state they are rendered from.
//!
//! # Design
//! `View` is the whole of the UI state: either the list of entries from the
//! last successful fetch, or one entry's detail. Rendering is a pure
//! function of `View`, and every render replaces the `main` region
//! wholesale, so stale content can never survive a transition.

use crate::markup::{Action, Element, Node};
use crate::types::Entry;

/// Shown in `main` when there is nothing to list.
pub const EMPTY_MESSAGE: &str = "No players found.";

pub const PAGE_TITLE: &str = "PuppyBowl";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    List(Vec<Entry>),
    Detail(Entry),
}

impl Default for View {
    fn default() -> Self {
        View::List(Vec::new())
    }
}

impl View {
    pub fn mode(&self) -> Mode {
        match self {
            View::List(_) => Mode::List,
            View::Detail(_) => Mode::Detail,
        }
    }

    /// List -> Detail, or Detail -> Detail for a different entry.
    pub fn show_details(self, entry: Entry) -> View {
        View::Detail(entry)
    }

    /// Any state -> List, with freshly fetched entries.
    pub fn show_list(self, entries: Vec<Entry>) -> View {
        View::List(entries)
    }

    /// Contents of the `main` region for this state.
    pub fn render(&self) -> Vec<Node> {
        match self {
            View::List(entries) => render_entry_list(entries),
            View::Detail(entry) => render_entry_detail(entry),
        }
    }
}

/// One card per entry in input order, or the empty-state message.
pub fn render_entry_list(entries: &[Entry]) -> Vec<Node> {
    if entries.is_empty() {
        return vec![Node::text(EMPTY_MESSAGE)];
    }
    entries.iter().map(|entry| entry_card(entry).into()).collect()
}

fn entry_card(entry: &Entry) -> Element {
    Element::new("div")
        .class("card")
        .attr("data-id", &entry.id.to_string())
        .child(Element::new("h4").text(&format!("Name: {}", entry.name)))
        .child(Element::new("p").text(&format!("ID: {}", entry.id)))
        .child(portrait(entry))
        .child(
            Element::new("div")
                .class("actions")
                .child(Element::button("Show details", Action::ShowDetails(entry.id)))
                .child(Element::button("Delete", Action::Delete(entry.id))),
        )
}

/// Single card with breed and team, followed by a back button.
pub fn render_entry_detail(entry: &Entry) -> Vec<Node> {
    let card = Element::new("div")
        .class("card detail")
        .attr("data-id", &entry.id.to_string())
        .child(Element::new("h4").text(&format!("Name: {}", entry.name)))
        .child(Element::new("p").text(&format!("ID: {}", entry.id)))
        .child(Element::new("p").text(&format!("Breed: {}", entry.breed)))
        .child(
            Element::new("p")
                .class("team")
                .text(&format!("Team: {}", entry.team_label())),
        )
        .child(portrait(entry));

    vec![
        card.into(),
        Element::button("Back to all players", Action::Back).into(),
    ]
}

pub fn render_title() -> Node {
    Element::new("h1").text(PAGE_TITLE).into()
}

fn portrait(entry: &Entry) -> Element {
    Element::new("img")
        .attr("src", &entry.image_url)
        .attr("alt", &entry.name)
}
