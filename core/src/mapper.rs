//! Decoded response → domain record.
//!
//! # Design
//! The service is loose about types: present ages are integers while unknown
//! ages are `""`, ranks are numeric strings or `"Not Ranked"`, and a search
//! with no hits returns a string where a list is expected. Every field is
//! read through one of the coercions below, each an explicit match on the
//! JSON value, so what counts as "absent" is decided in one place.
//!
//! Stats fields that are empty or non-numeric are absent, never zero.

use log::debug;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::executor::DecodedResponse;
use crate::types::{Player, PlayerStats};

/// Trimmed string if the value is a JSON string.
pub fn string_or_absent(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(s)) => Some(s.trim().to_string()),
        _ => None,
    }
}

/// The value if it is a JSON integer. Numeric strings and floats are absent.
pub fn integer_or_absent(object: &Map<String, Value>, key: &str) -> Option<i64> {
    match object.get(key) {
        Some(Value::Number(n)) => n.as_i64(),
        _ => None,
    }
}

/// `Some(true)` for `"Y"`, `Some(false)` for any other value including
/// `null`, `None` only if the key is missing.
pub fn flag_or_absent(object: &Map<String, Value>, key: &str) -> Option<bool> {
    object
        .get(key)
        .map(|value| matches!(value, Value::String(s) if s == "Y"))
}

/// Parse a stats string as an integer; empty or sentinel text is absent.
pub fn lenient_integer(raw: &str) -> Option<i64> {
    let parsed = raw.trim().parse::<i64>().ok();
    if parsed.is_none() && !raw.is_empty() {
        debug!("treating non-numeric rank {raw:?} as absent");
    }
    parsed
}

/// Parse a stats string as a float; empty or sentinel text is absent.
pub fn lenient_float(raw: &str) -> Option<f64> {
    let parsed = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite());
    if parsed.is_none() && !raw.is_empty() {
        debug!("treating non-numeric rating {raw:?} as absent");
    }
    parsed
}

pub fn map_player(decoded: &DecodedResponse) -> Result<Player, ApiError> {
    let document = || Value::Object(decoded.clone());

    let player = match decoded.get("player") {
        None => return Err(ApiError::missing("Player key missing", document())),
        Some(Value::Object(player)) if !player.is_empty() => player,
        Some(_) => return Err(ApiError::missing("Player id missing", document())),
    };

    let id = match string_or_absent(player, "player_id") {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ApiError::missing("Player id missing", document())),
    };

    let stats = match decoded.get("player_stats") {
        None | Some(Value::Null) => None,
        Some(Value::Object(stats)) => Some(map_player_stats(stats)),
        Some(_) => return Err(ApiError::missing("Player stats malformed", document())),
    };

    Ok(Player {
        id,
        first_name: string_or_absent(player, "first_name"),
        last_name: string_or_absent(player, "last_name"),
        city: string_or_absent(player, "city"),
        state: string_or_absent(player, "state"),
        country_code: string_or_absent(player, "country_code"),
        country_name: string_or_absent(player, "country_name"),
        initials: string_or_absent(player, "initials"),
        age: integer_or_absent(player, "age"),
        is_excluded: flag_or_absent(player, "excluded_flag"),
        is_ifpa_registered: flag_or_absent(player, "ifpa_registered"),
        stats,
    })
}

pub fn map_player_stats(stats: &Map<String, Value>) -> PlayerStats {
    PlayerStats {
        wppr_rank: string_or_absent(stats, "current_wppr_rank").and_then(|s| lenient_integer(&s)),
        rating_rank: string_or_absent(stats, "ratings_rank").and_then(|s| lenient_integer(&s)),
        rating_value: string_or_absent(stats, "ratings_value").and_then(|s| lenient_float(&s)),
    }
}

/// Player ids from a `player/search` response, in service order.
///
/// A scalar `search` value is how the service says "no results". One bad
/// entry fails the whole list. An object-valued `search` is rejected rather
/// than iterated, since the service has never been seen to send one.
pub fn map_id_list(decoded: &DecodedResponse) -> Result<Vec<String>, ApiError> {
    let document = || Value::Object(decoded.clone());

    let results = match decoded.get("search") {
        None => return Err(ApiError::missing("Search key missing", document())),
        Some(Value::Array(results)) => results,
        Some(Value::Object(_)) => return Err(ApiError::missing("Search results malformed", document())),
        Some(_) => return Ok(Vec::new()),
    };

    results
        .iter()
        .map(|entry| match entry.get("player_id") {
            Some(Value::String(id)) => Ok(id.clone()),
            Some(_) => Err(ApiError::missing("Search result has unexpected player id", document())),
            None => Err(ApiError::missing("Search result missing player id", document())),
        })
        .collect()
}
