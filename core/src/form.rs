//! The new-player form and the draft it submits.

use std::collections::HashMap;

use crate::markup::{Element, Node};
use crate::types::EntryDraft;

/// `id` of the region the form is rendered into.
pub const FORM_ID: &str = "new-player-form";

/// Values offered by the status select, after its blank placeholder.
pub const STATUS_OPTIONS: [&str; 2] = ["bench", "field"];

/// Field values captured when the form is submitted, keyed by input name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    /// Current value of `name`; an absent field reads as empty.
    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl EntryDraft {
    /// Read each field as-is and coerce `teamId` to a number.
    ///
    /// Only integer text is accepted as a team id. A blank field becomes
    /// `None` rather than `0`, and so do decimal or exponent literals such
    /// as `"3.5"` or `"1e2"`, which a browser's numeric coercion would
    /// have sent as `3.5` and `100`. Nothing else is validated; the server
    /// rejects malformed drafts.
    pub fn from_form(form: &FormData) -> Self {
        let raw_team = form.value("teamId").trim();
        let team_id = if raw_team.is_empty() {
            None
        } else {
            match raw_team.parse::<i64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    log::warn!("ignoring non-numeric team id {raw_team:?}");
                    None
                }
            }
        };

        EntryDraft {
            name: form.value("name").to_string(),
            breed: form.value("breed").to_string(),
            status: form.value("status").to_string(),
            image_url: form.value("imageUrl").to_string(),
            team_id,
        }
    }
}

/// Inputs for name, breed, status, image URL and team id, plus submit.
pub fn render_creation_form() -> Vec<Node> {
    let mut status = Element::new("select")
        .attr("name", "status")
        .attr("id", "status")
        .child(Element::new("option").attr("value", "").text("Select status"));
    for option in STATUS_OPTIONS {
        status = status.child(Element::new("option").attr("value", option).text(option));
    }

    vec![
        input("text", "name", "Name").into(),
        input("text", "breed", "Breed").into(),
        status.into(),
        input("url", "imageUrl", "Image URL").into(),
        input("number", "teamId", "Team ID").into(),
        Element::new("button")
            .attr("type", "submit")
            .text("Submit")
            .into(),
    ]
}

fn input(kind: &str, name: &str, placeholder: &str) -> Element {
    Element::new("input")
        .attr("type", kind)
        .attr("name", name)
        .attr("id", name)
        .attr("placeholder", placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> Node {
        Element::new("form")
            .attr("id", FORM_ID)
            .children(render_creation_form())
            .into()
    }

    #[test]
    fn form_has_every_field_and_a_submit() {
        let form = form();
        let names: Vec<&str> = form
            .find_all(&|el| el.get_attr("name").is_some())
            .into_iter()
            .filter_map(|el| el.get_attr("name"))
            .collect();
        assert_eq!(names, vec!["name", "breed", "status", "imageUrl", "teamId"]);

        let submits = form.find_all(&|el| el.get_attr("type") == Some("submit"));
        assert_eq!(submits.len(), 1);
    }

    #[test]
    fn status_options_have_distinct_values() {
        let form = form();
        let values: Vec<&str> = form
            .find_by_tag("option")
            .into_iter()
            .filter_map(|el| el.get_attr("value"))
            .collect();
        assert_eq!(values, vec!["", "bench", "field"]);
    }

    #[test]
    fn draft_coerces_team_id_to_number() {
        let data: FormData = [
            ("name", "Rex"),
            ("breed", "Lab"),
            ("status", "field"),
            ("imageUrl", "http://x/y.png"),
            ("teamId", "3"),
        ]
        .into_iter()
        .collect();
        let draft = EntryDraft::from_form(&data);
        assert_eq!(
            draft,
            EntryDraft {
                name: "Rex".to_string(),
                breed: "Lab".to_string(),
                status: "field".to_string(),
                image_url: "http://x/y.png".to_string(),
                team_id: Some(3),
            }
        );
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json["teamId"].is_number());
    }

    #[test]
    fn blank_or_garbage_team_id_is_none() {
        let blank = FormData::new().set("name", "Bo").set("teamId", "  ");
        assert_eq!(EntryDraft::from_form(&blank).team_id, None);
        let garbage = FormData::new().set("teamId", "three");
        assert_eq!(EntryDraft::from_form(&garbage).team_id, None);
    }

    #[test]
    fn non_integer_numeric_literals_are_not_team_ids() {
        for raw in ["3.5", "1e2", "0x10"] {
            let form = FormData::new().set("teamId", raw);
            assert_eq!(EntryDraft::from_form(&form).team_id, None, "{raw}");
        }
        let padded = FormData::new().set("teamId", " 7 ");
        assert_eq!(EntryDraft::from_form(&padded).team_id, Some(7));
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let draft = EntryDraft::from_form(&FormData::new());
        assert_eq!(draft.name, "");
        assert_eq!(draft.status, "");
        assert_eq!(draft.image_url, "");
    }
}
