//! Participants, rosters and match formats.
//!
//! A [`Participant`] is an immutable rated value; the optimizer only ever
//! reads `rating` and `dedicated_keeper`. [`Roster`] is the pick-list a
//! caller selects from before asking for teams.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, Result};

pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 10.0;
/// Rating assigned to manual entries whose rating is unusable.
pub const RATING_FALLBACK: f64 = 7.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "ATT")]
    Attacker,
    #[default]
    Any,
}

impl Role {
    pub fn code(self) -> &'static str {
        match self {
            Role::Goalkeeper => "GK",
            Role::Defender => "DEF",
            Role::Midfielder => "MID",
            Role::Attacker => "ATT",
            Role::Any => "Any",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub rating: f64,
    #[serde(default, alias = "position")]
    pub role: Role,
    /// A true goalkeeper; the only flag the optimizer enforces anything on.
    #[serde(default, alias = "realGK")]
    pub dedicated_keeper: bool,
    /// Outfielder who can cover in goal. Informational.
    #[serde(default, alias = "canPlayGK")]
    pub can_cover_keeper: bool,
}

impl Participant {
    /// Manual entry: id is derived from the name, rating is normalized and a
    /// `Goalkeeper` role marks a dedicated keeper.
    pub fn new(name: &str, rating: f64, role: Role) -> Self {
        let name = name.trim();
        Self {
            id: slug(name),
            name: name.to_string(),
            rating: normalize_rating(rating),
            role,
            dedicated_keeper: role == Role::Goalkeeper,
            can_cover_keeper: false,
        }
    }

    pub fn as_keeper(mut self) -> Self {
        self.dedicated_keeper = true;
        self
    }

    pub fn covers_keeper(mut self) -> Self {
        self.can_cover_keeper = true;
        self
    }
}

/// Lower-case, whitespace dropped, anything outside `[a-z0-9]` dropped.
pub fn slug(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Clamp to the rating scale and snap to half points.
pub fn normalize_rating(rating: f64) -> f64 {
    if !rating.is_finite() {
        return RATING_FALLBACK;
    }
    ((rating * 2.0).round() / 2.0).clamp(RATING_MIN, RATING_MAX)
}

/// Mean rating of a team; 0 for an empty team.
pub fn team_strength(team: &[Participant]) -> f64 {
    crate::mechanics::mean_by(team, |p| p.rating)
}

/// Players-per-team presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchFormat {
    FiveASide,
    SixASide,
    SevenASide,
    #[default]
    EightASide,
    ElevenASide,
    Custom(usize),
}

impl MatchFormat {
    /// Smallest side a custom format may ask for.
    pub const CUSTOM_MIN: usize = 3;

    pub fn per_team(self) -> usize {
        match self {
            MatchFormat::FiveASide => 5,
            MatchFormat::SixASide => 6,
            MatchFormat::SevenASide => 7,
            MatchFormat::EightASide => 8,
            MatchFormat::ElevenASide => 11,
            MatchFormat::Custom(n) => n.max(Self::CUSTOM_MIN),
        }
    }

    pub fn required_players(self, teams: usize) -> usize {
        self.per_team().saturating_mul(teams)
    }

    /// Presets map back to their variant; anything else is `Custom`.
    pub fn from_size(size: usize) -> Self {
        match size {
            5 => MatchFormat::FiveASide,
            6 => MatchFormat::SixASide,
            7 => MatchFormat::SevenASide,
            8 => MatchFormat::EightASide,
            11 => MatchFormat::ElevenASide,
            n => MatchFormat::Custom(n),
        }
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchFormat::Custom(_) => write!(f, "Custom ({}-a-side)", self.per_team()),
            other => write!(f, "{}-a-side", other.per_team()),
        }
    }
}

/// Ordered pick-list with unique ids.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Participant>,
}

impl Roster {
    pub fn new(players: Vec<Participant>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(players.len());
        for p in &players {
            if !seen.insert(p.id.as_str()) {
                return Err(BalanceError::DuplicateId(p.id.clone()));
            }
        }
        Ok(Self { players })
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let players: Vec<Participant> = serde_json::from_str(s)?;
        Self::new(players)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Participant> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Manual add: same id replaces the existing entry in place.
    pub fn insert(&mut self, player: Participant) {
        match self.players.iter_mut().find(|p| p.id == player.id) {
            Some(slot) => *slot = player,
            None => self.players.push(player),
        }
    }

    /// Resolve ids in the order given.
    pub fn select<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Participant>> {
        let mut seen = HashSet::with_capacity(ids.len());
        ids.iter()
            .map(|id| {
                let id = id.as_ref();
                if !seen.insert(id) {
                    return Err(BalanceError::DuplicateId(id.to_string()));
                }
                self.get(id)
                    .cloned()
                    .ok_or_else(|| BalanceError::UnknownParticipant(id.to_string()))
            })
            .collect()
    }

    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &Participant> {
        self.players.iter().filter(move |p| p.role == role)
    }

    pub fn search<'a>(&'a self, needle: &str) -> impl Iterator<Item = &'a Participant> + use<'a> {
        let needle = needle.trim().to_lowercase();
        self.players
            .iter()
            .filter(move |p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_entry_derives_id_and_normalizes_rating() {
        let p = Participant::new("  Tom Harris-2 ", 7.26, Role::Goalkeeper);
        assert_eq!(p.id, "tomharris2");
        assert_eq!(p.name, "Tom Harris-2");
        assert_eq!(p.rating, 7.5);
        assert!(p.dedicated_keeper);
        assert!(!p.can_cover_keeper);

        assert_eq!(normalize_rating(0.2), 1.0);
        assert_eq!(normalize_rating(12.0), 10.0);
        assert_eq!(normalize_rating(6.74), 6.5);
        assert_eq!(normalize_rating(f64::NAN), RATING_FALLBACK);
    }

    #[test]
    fn insert_replaces_by_id() {
        let mut roster = Roster::new(vec![Participant::new("Ky", 9.0, Role::Midfielder)]).unwrap();
        roster.insert(Participant::new("ky", 6.0, Role::Defender));
        roster.insert(Participant::new("Owen", 9.0, Role::Midfielder));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("ky").unwrap().rating, 6.0);
        assert_eq!(roster.by_role(Role::Midfielder).count(), 1);
        assert_eq!(roster.search("OW").count(), 1);
        assert_eq!(roster.search("").count(), 2);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[{"id":"a","name":"A","rating":5},{"id":"a","name":"B","rating":6}]"#;
        assert!(matches!(Roster::from_json_str(json), Err(BalanceError::DuplicateId(_))));
    }

    #[test]
    fn match_formats() {
        assert_eq!(MatchFormat::default().per_team(), 8);
        assert_eq!(MatchFormat::Custom(1).per_team(), 3);
        assert_eq!(MatchFormat::FiveASide.required_players(2), 10);
        assert_eq!(MatchFormat::from_size(11), MatchFormat::ElevenASide);
        assert_eq!(MatchFormat::from_size(9), MatchFormat::Custom(9));
        assert_eq!(MatchFormat::SevenASide.to_string(), "7-a-side");
    }
}
