use serde_json::{Map, Value};

/// A standing never lists more commanders than this (partner pairs).
pub const MAX_COMMANDERS: usize = 2;

/// Where a deck description keeps its commanders.
///
/// Upstream decks come in several shapes. Variants are listed in precedence
/// order: the first one present on the deck wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommanderSource<'a> {
    /// `{"Commanders": {"<card>": {..}, ..}}`
    Commanders(&'a Map<String, Value>),
    /// `{"commanders": {"<card>": {..}, ..}}`
    LowercaseCommanders(&'a Map<String, Value>),
    /// `{"Commander": "<card>"}`
    Commander(&'a str),
    /// `{"name": "<deck name>"}`
    Name(&'a str),
}

impl<'a> CommanderSource<'a> {
    /// Pick the highest-precedence commander source on a deck description.
    ///
    /// Mapping rules only count when the field is an object; the singular
    /// rules only when the field is a non-empty string.
    pub fn detect(deck: &'a Value) -> Option<Self> {
        let deck = deck.as_object()?;

        if let Some(Value::Object(cards)) = deck.get("Commanders") {
            return Some(Self::Commanders(cards));
        }
        if let Some(Value::Object(cards)) = deck.get("commanders") {
            return Some(Self::LowercaseCommanders(cards));
        }
        if let Some(commander) = non_empty_str(deck.get("Commander")) {
            return Some(Self::Commander(commander));
        }
        non_empty_str(deck.get("name")).map(Self::Name)
    }

    /// Commander names in upstream order, at most `MAX_COMMANDERS`.
    pub fn commanders(&self) -> Vec<String> {
        match self {
            Self::Commanders(cards) | Self::LowercaseCommanders(cards) => {
                cards.keys().take(MAX_COMMANDERS).cloned().collect()
            }
            Self::Commander(name) | Self::Name(name) => vec![name.to_string()],
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Commanders for a standing's deck description; empty when none is found.
pub fn extract_commanders(deck: Option<&Value>) -> Vec<String> {
    deck.and_then(CommanderSource::detect)
        .map(|source| source.commanders())
        .unwrap_or_default()
}
