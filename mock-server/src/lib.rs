use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const STATUSES: [&str; 2] = ["bench", "field"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
    pub team_id: Option<i64>,
    pub team: Option<Team>,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreatePlayer {
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
    pub team_id: Option<i64>,
}

/// One cohort's players and teams.
#[derive(Debug)]
pub struct Roster {
    players: BTreeMap<i64, Player>,
    teams: Vec<Team>,
    next_id: i64,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            players: BTreeMap::new(),
            teams: vec![
                Team { id: 1, name: "Ruff".to_string() },
                Team { id: 2, name: "Fluff".to_string() },
            ],
            next_id: 1,
        }
    }
}

impl Roster {
    fn team(&self, id: i64) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    fn create(&mut self, input: CreatePlayer) -> Result<Player, String> {
        if input.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        if input.breed.trim().is_empty() {
            return Err("breed is required".to_string());
        }
        let status = if input.status.is_empty() {
            STATUSES[0].to_string()
        } else if STATUSES.contains(&input.status.as_str()) {
            input.status
        } else {
            return Err(format!("status must be one of {STATUSES:?}"));
        };
        let team = match input.team_id {
            Some(id) => Some(self.team(id).cloned().ok_or_else(|| format!("team #{id} does not exist"))?),
            None => None,
        };

        let player = Player {
            id: self.next_id,
            name: input.name,
            breed: input.breed,
            status,
            image_url: input.image_url,
            team_id: input.team_id,
            team,
        };
        self.next_id += 1;
        self.players.insert(player.id, player.clone());
        Ok(player)
    }
}

pub type Db = Arc<RwLock<HashMap<String, Roster>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/api/{cohort}/players", get(list_players).post(create_player))
        .route("/api/{cohort}/players/{id}", get(get_player).delete(delete_player))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn ok(data: Value) -> Response {
    Json(json!({ "success": true, "error": null, "data": data })).into_response()
}

fn fail(status: StatusCode, name: &str, message: String) -> Response {
    let body = json!({
        "success": false,
        "error": { "name": name, "message": message },
        "data": null,
    });
    (status, Json(body)).into_response()
}

async fn list_players(State(db): State<Db>, Path(cohort): Path<String>) -> Response {
    let db = db.read().await;
    let players: Vec<&Player> = db
        .get(&cohort)
        .map(|roster| roster.players.values().collect())
        .unwrap_or_default();
    ok(json!({ "players": players }))
}

async fn create_player(
    State(db): State<Db>,
    Path(cohort): Path<String>,
    Json(input): Json<CreatePlayer>,
) -> Response {
    let mut db = db.write().await;
    match db.entry(cohort).or_default().create(input) {
        Ok(player) => {
            log::info!("created player #{}", player.id);
            ok(json!({ "player": player }))
        }
        Err(message) => fail(StatusCode::BAD_REQUEST, "ValidationError", message),
    }
}

async fn get_player(State(db): State<Db>, Path((cohort, id)): Path<(String, i64)>) -> Response {
    let db = db.read().await;
    match db.get(&cohort).and_then(|roster| roster.players.get(&id)) {
        Some(player) => ok(json!({ "player": player })),
        None => fail(StatusCode::NOT_FOUND, "NotFoundError", format!("player #{id} not found")),
    }
}

/// Unknown ids are reported in-band: HTTP 200 with `success: false`.
async fn delete_player(State(db): State<Db>, Path((cohort, id)): Path<(String, i64)>) -> Response {
    let mut db = db.write().await;
    match db.get_mut(&cohort).and_then(|roster| roster.players.remove(&id)) {
        Some(_) => {
            log::info!("deleted player #{id}");
            ok(Value::Null)
        }
        None => fail(StatusCode::OK, "NotFoundError", format!("player #{id} not found")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> CreatePlayer {
        CreatePlayer {
            name: name.to_string(),
            breed: "Lab".to_string(),
            ..CreatePlayer::default()
        }
    }

    #[test]
    fn player_serializes_camel_case() {
        let player = Player {
            id: 1,
            name: "Rex".to_string(),
            breed: "Lab".to_string(),
            status: "field".to_string(),
            image_url: "http://x/y.png".to_string(),
            team_id: None,
            team: None,
        };
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["imageUrl"], "http://x/y.png");
        assert!(json["teamId"].is_null());
        assert!(json["team"].is_null());
    }

    #[test]
    fn create_player_all_fields_optional_in_json() {
        let input: CreatePlayer = serde_json::from_str("{}").unwrap();
        assert!(input.name.is_empty());
        assert!(input.team_id.is_none());
    }

    #[test]
    fn ids_are_sequential() {
        let mut roster = Roster::default();
        assert_eq!(roster.create(draft("A")).unwrap().id, 1);
        assert_eq!(roster.create(draft("B")).unwrap().id, 2);
    }

    #[test]
    fn blank_status_defaults_to_bench() {
        let mut roster = Roster::default();
        assert_eq!(roster.create(draft("A")).unwrap().status, "bench");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut roster = Roster::default();
        let mut input = draft("A");
        input.status = "goalie".to_string();
        assert!(roster.create(input).is_err());
    }

    #[test]
    fn name_is_required() {
        let mut roster = Roster::default();
        assert_eq!(roster.create(draft(" ")).unwrap_err(), "name is required");
    }

    #[test]
    fn team_id_resolves_seeded_team() {
        let mut roster = Roster::default();
        let mut input = draft("A");
        input.team_id = Some(2);
        let player = roster.create(input).unwrap();
        assert_eq!(player.team.unwrap().name, "Fluff");
    }

    #[test]
    fn unknown_team_is_rejected() {
        let mut roster = Roster::default();
        let mut input = draft("A");
        input.team_id = Some(99);
        assert!(roster.create(input).is_err());
    }
}
