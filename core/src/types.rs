//! Domain DTOs for the PuppyBowl API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined
//! independently; integration tests catch drift between the two crates.
//! Every response is wrapped in the same `{success, error, data}` envelope,
//! so the envelope is generic over its `data` payload.

use serde::{Deserialize, Serialize};

/// Shown in place of a team name when a player has no team.
pub const UNASSIGNED: &str = "Unassigned";

/// A roster entry ("player") as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    pub name: String,
    pub breed: String,
    #[serde(default)]
    pub status: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub team: Option<Team>,
}

impl Entry {
    /// The team's name, or `"Unassigned"` when there is no team.
    pub fn team_label(&self) -> &str {
        self.team.as_ref().map_or(UNASSIGNED, |t| t.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

/// Request payload for creating a new entry.
///
/// All five keys are always sent; `teamId` goes out as `null` when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
    pub team_id: Option<i64>,
}

/// The `{success, error, data}` wrapper every endpoint responds with.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<ErrorBody>,
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayersData {
    pub players: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayerData {
    pub player: Entry,
}
