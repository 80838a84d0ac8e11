//! Relevance scoring for provider candidates.
//!
//! The provider's own ordering is unreliable for addresses that name both a
//! locality and a point of interest, so every candidate is re-weighted by
//! token overlap with its display name and by its category.

use crate::constants::*;
use serde::Deserialize;
use serde_json::Value;
use std::cmp::Ordering;

/// One result returned by the geocoding provider
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub importance: Option<f64>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub lat: Value,
    #[serde(default)]
    pub lon: Value,
}

impl Candidate {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: render_coordinate(&self.lat),
            lon: render_coordinate(&self.lon),
        }
    }
}

/// Latitude/longitude exactly as the provider sent them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub lat: String,
    pub lon: String,
}

impl Coordinates {
    pub fn is_complete(&self) -> bool {
        !self.lat.is_empty() && !self.lon.is_empty()
    }
}

fn render_coordinate(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub score: f64,
    pub index: usize,
    pub candidate: Candidate,
}

/// Score a candidate against the tokens of the query address.
///
/// `tokens` must not be empty; only the first two tokens are considered.
pub fn score_candidate(candidate: &Candidate, tokens: &[String]) -> f64 {
    let mut score = candidate.importance.unwrap_or(0.0);
    let display_name = candidate
        .display_name
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    if tokens.len() > 1 {
        let city = display_name.contains(tokens[0].as_str());
        let location = display_name.contains(tokens[1].as_str());
        score += match (city, location) {
            (true, true) => BOTH_TOKENS_BONUS,
            (true, false) => CITY_TOKEN_BONUS,
            (false, true) => LOCATION_TOKEN_BONUS,
            (false, false) => 0.0,
        };
    } else if let Some(only) = tokens.first() {
        if display_name.contains(only.as_str()) {
            score += SINGLE_TOKEN_BONUS;
        }
    }

    score += match candidate.class.as_deref().unwrap_or_default() {
        "place" => PLACE_CLASS_BONUS,
        "highway" => HIGHWAY_CLASS_BONUS,
        "amenity" => AMENITY_CLASS_BONUS,
        _ => 0.0,
    };

    score
}

/// Score every candidate and order them best first.
///
/// Equal scores keep the provider's order. An empty token slice yields an
/// empty ranking.
pub fn rank_candidates(candidates: Vec<Candidate>, tokens: &[String]) -> Vec<ScoredCandidate> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| ScoredCandidate {
            score: score_candidate(&candidate, tokens),
            index,
            candidate,
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    scored
}

pub fn best_candidate(candidates: Vec<Candidate>, tokens: &[String]) -> Option<ScoredCandidate> {
    rank_candidates(candidates, tokens).into_iter().next()
}
