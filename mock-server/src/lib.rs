//! In-memory stand-in for the IFPA player endpoints.
//!
//! Reproduces the quirks the client has to cope with: unknown ids answer
//! 200 with every field `null`, unranked stats are `"Not Ranked"` / `""`,
//! unknown ages are `""`, and an empty search returns a string instead of a
//! list.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_id: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub state: String,
    pub country_code: String,
    pub country_name: String,
    pub initials: String,
    pub email: String,
    pub age: Option<u32>,
    pub excluded: bool,
    pub ifpa_registered: bool,
    pub wppr_rank: Option<u32>,
    pub ratings_rank: Option<u32>,
    pub ratings_value: Option<f64>,
}

impl PlayerRecord {
    fn player_json(&self) -> Value {
        json!({
            "player_id": self.player_id,
            "first_name": self.first_name,
            "last_name": self.last_name,
            "city": self.city,
            "state": self.state,
            "country_code": self.country_code,
            "country_name": self.country_name,
            "initials": self.initials,
            "age": self.age.map_or_else(|| json!(""), |age| json!(age)),
            "excluded_flag": flag(self.excluded),
            "ifpa_registered": flag(self.ifpa_registered)
        })
    }

    fn stats_json(&self) -> Value {
        json!({
            "current_wppr_rank": self.wppr_rank.map(|rank| rank.to_string()),
            "ratings_rank": self
                .ratings_rank
                .map_or_else(|| "Not Ranked".to_string(), |rank| rank.to_string()),
            "ratings_value": self
                .ratings_value
                .map_or_else(String::new, |value| format!("{value:.2}"))
        })
    }

    fn search_json(&self) -> Value {
        json!({
            "player_id": self.player_id,
            "first_name": self.first_name,
            "last_name": self.last_name,
            "country_code": self.country_code,
            "country_name": self.country_name,
            "city": self.city,
            "state": self.state,
            "wppr_rank": self.wppr_rank.map(|rank| rank.to_string())
        })
    }

    fn matches_name(&self, segment: &str) -> bool {
        let segment = segment.to_lowercase();
        self.first_name.to_lowercase().contains(&segment)
            || self.last_name.to_lowercase().contains(&segment)
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "Y"
    } else {
        "N"
    }
}

/// What the service returns for an id it does not know.
fn unknown_player_json() -> Value {
    json!({
        "player": {
            "player_id": null,
            "first_name": null,
            "last_name": null,
            "city": null,
            "state": null,
            "country_code": null,
            "country_name": null,
            "initials": null,
            "age": 47,
            "excluded_flag": null,
            "ifpa_registered": "N"
        },
        "player_stats": {
            "current_wppr_rank": null,
            "ratings_rank": "Not Ranked",
            "ratings_value": ""
        }
    })
}

pub fn sample_players() -> Vec<PlayerRecord> {
    vec![
        PlayerRecord {
            player_id: "25696".to_string(),
            first_name: "Robin".to_string(),
            last_name: "Lassonde ".to_string(),
            city: "Berkeley".to_string(),
            state: "CA".to_string(),
            country_code: "US".to_string(),
            country_name: "United States".to_string(),
            initials: "RML".to_string(),
            email: "rlassonde@gmail.com".to_string(),
            age: Some(1),
            excluded: false,
            ifpa_registered: true,
            wppr_rank: Some(81),
            ratings_rank: Some(93),
            ratings_value: Some(1697.08),
        },
        PlayerRecord {
            player_id: "9303".to_string(),
            first_name: "Jason".to_string(),
            last_name: "Delano".to_string(),
            city: String::new(),
            state: String::new(),
            country_code: "US".to_string(),
            country_name: "United States".to_string(),
            initials: "JD".to_string(),
            email: "jdelano@example.com".to_string(),
            age: None,
            excluded: false,
            ifpa_registered: false,
            wppr_rank: Some(4313),
            ratings_rank: Some(4020),
            ratings_value: Some(1402.5),
        },
        PlayerRecord {
            player_id: "55848".to_string(),
            first_name: "Jayson".to_string(),
            last_name: "Delorme ".to_string(),
            city: String::new(),
            state: String::new(),
            country_code: "CA".to_string(),
            country_name: "Canada".to_string(),
            initials: "JD".to_string(),
            email: "jdelorme@example.com".to_string(),
            age: None,
            excluded: true,
            ifpa_registered: false,
            wppr_rank: None,
            ratings_rank: None,
            ratings_value: None,
        },
    ]
}

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
    players: Arc<Vec<PlayerRecord>>,
}

#[derive(Deserialize)]
pub struct PlayerQuery {
    pub api_key: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub api_key: Option<String>,
    pub q: Option<String>,
    pub email: Option<String>,
}

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

pub fn app(api_key: &str, players: Vec<PlayerRecord>) -> Router {
    let state = AppState {
        api_key: Arc::from(api_key),
        players: Arc::new(players),
    };
    Router::new()
        .route("/v1/player/search", get(search_players))
        .route("/v1/player/{id}", get(get_player))
        .with_state(state)
}

pub async fn run(
    listener: TcpListener,
    api_key: &str,
    players: Vec<PlayerRecord>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key, players)).await
}

fn authorize(state: &AppState, api_key: Option<&str>) -> Result<(), (StatusCode, Json<Value>)> {
    if api_key == Some(&*state.api_key) {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "API_KEY was not found"})),
        ))
    }
}

async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PlayerQuery>,
) -> ApiResult {
    authorize(&state, query.api_key.as_deref())?;
    let body = state
        .players
        .iter()
        .find(|player| player.player_id == id)
        .map_or_else(unknown_player_json, |player| {
            json!({
                "player": player.player_json(),
                "player_stats": player.stats_json()
            })
        });
    Ok(Json(body))
}

async fn search_players(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult {
    authorize(&state, query.api_key.as_deref())?;

    let (term, hits): (String, Vec<Value>) = match (&query.q, &query.email) {
        (Some(segment), _) => (
            segment.clone(),
            state
                .players
                .iter()
                .filter(|player| player.matches_name(segment))
                .map(PlayerRecord::search_json)
                .collect(),
        ),
        (None, Some(email)) => (
            email.clone(),
            state
                .players
                .iter()
                .filter(|player| player.email.eq_ignore_ascii_case(email))
                .map(PlayerRecord::search_json)
                .collect(),
        ),
        (None, None) => (String::new(), Vec::new()),
    };

    let search = if hits.is_empty() {
        json!("No players found")
    } else {
        Value::Array(hits)
    };
    Ok(Json(json!({"query": term, "search": search})))
}
