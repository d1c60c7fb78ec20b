use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use crate::models::deck::extract_commanders;
use crate::models::Tournament;

/// Longest debug excerpt of a deck description or standing
const DEBUG_EXCERPT_LEN: usize = 200;

/// Enrich every tournament in a raw upstream payload.
///
/// The input is left untouched. A payload that is not a sequence counts as
/// zero tournaments; entries that are not objects are dropped.
pub fn enrich_tournaments(raw: &Value) -> Vec<Tournament> {
    let Some(records) = raw.as_array() else {
        warn!("TopDeck payload is not a sequence, treating as empty");
        return Vec::new();
    };
    info!(count = records.len(), "Received tournaments from API");

    let enriched: Vec<Tournament> = records
        .iter()
        .filter_map(|record| Tournament::from_value(record.clone()))
        .map(enrich_tournament)
        .collect();

    if let Some(first) = enriched.first().and_then(|t| t.standings().first()) {
        debug!(standing = %excerpt(first), "First standing before filter");
    }

    enriched
}

/// Set `data.participants` and add `commanders` to every standing.
pub fn enrich_tournament(mut tournament: Tournament) -> Tournament {
    let participants = tournament.standings().len();
    let fields = tournament.fields_mut();

    if let Some(Value::Array(standings)) = fields.get_mut("standings") {
        for (idx, standing) in standings.iter_mut().enumerate() {
            add_commanders(idx, standing);
        }
    }

    if let Some(Value::Object(data)) = fields.get_mut("data") {
        data.insert("participants".to_string(), Value::from(participants));
    } else {
        let mut data = Map::new();
        data.insert("participants".to_string(), Value::from(participants));
        fields.insert("data".to_string(), Value::Object(data));
    }

    tournament
}

fn add_commanders(idx: usize, standing: &mut Value) {
    let deck = standing.get("deckObj");
    if let Some(deck_value) = deck {
        if let Some(deck_fields) = deck_value.as_object() {
            debug!(
                standing = idx,
                keys = ?deck_fields.keys().collect::<Vec<_>>(),
                deck = %excerpt(deck_value),
                "Deck description"
            );
        }
    }
    let commanders = extract_commanders(deck);

    match standing {
        Value::Object(fields) => {
            fields.insert("commanders".to_string(), json!(commanders));
        }
        other => *other = json!({ "commanders": commanders }),
    }
}

fn excerpt(value: &Value) -> String {
    let text = value.to_string();
    match text.char_indices().nth(DEBUG_EXCERPT_LEN) {
        Some((end, _)) => text[..end].to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log lines in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn enrich_one(value: Value) -> Tournament {
        enrich_tournament(Tournament::from_value(value).expect("object"))
    }

    #[test]
    fn test_participants_equals_standings_length() {
        let t = enrich_one(json!({"data": {"name": "x"}, "standings": [{}, {}, {}, {}]}));
        assert_eq!(t.participants(), 4);
        assert_eq!(t.data().expect("data")["name"], json!("x"));
    }

    #[test]
    fn test_participants_zero_without_standings() {
        assert_eq!(enrich_one(json!({})).participants(), 0);
        assert_eq!(enrich_one(json!({"standings": {"1": {}}})).participants(), 0);
        assert_eq!(enrich_one(json!({"data": "bogus", "standings": null})).participants(), 0);
    }

    #[test]
    fn test_participants_overrides_upstream_value() {
        let t = enrich_one(json!({"data": {"participants": 99}, "standings": [{}]}));
        assert_eq!(t.participants(), 1);
    }

    #[test]
    fn test_every_standing_gains_commanders() {
        let t = enrich_one(json!({"standings": [
            {"name": "Alice", "deckObj": {"Commanders": {"Thrasios": {}, "Tymna": {}, "Kraum": {}}}},
            {"name": "Bob", "deckObj": null},
            {"name": "Carol"},
            "not-an-object"
        ]}));
        let standings = t.standings();
        assert_eq!(standings[0]["commanders"], json!(["Thrasios", "Tymna"]));
        assert_eq!(standings[0]["name"], json!("Alice"));
        assert_eq!(standings[1]["commanders"], json!([]));
        assert_eq!(standings[2]["commanders"], json!([]));
        assert_eq!(standings[3], json!({"commanders": []}));
    }

    #[test]
    fn test_input_is_not_modified() {
        let raw = json!([{"data": {"name": "cEDH"}, "standings": [{"deckObj": {"name": "Rog"}}]}]);
        let before = raw.clone();
        let out = enrich_tournaments(&raw);
        assert_eq!(raw, before);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_existing_key_order_is_kept() {
        let t = enrich_one(json!({"id": 1, "data": {"name": "n"}, "standings": []}));
        let keys: Vec<&String> = t.fields().keys().collect();
        assert_eq!(keys, vec!["id", "data", "standings"]);
    }

    #[test]
    fn test_received_count_logged_at_info() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            enrich_tournaments(&json!([{}, {}]));
        });

        let text = logs.text();
        let line = text
            .lines()
            .find(|l| l.contains("Received tournaments from API"))
            .expect("count is logged at info level");
        assert!(line.contains("INFO"));
        assert!(line.contains("count=2"));
    }

    #[test]
    fn test_excerpt_is_bounded() {
        let long = json!("a".repeat(500));
        assert_eq!(excerpt(&long).chars().count(), DEBUG_EXCERPT_LEN);
    }
}
