//! Wire models for the habits REST API.
//!
//! Field names follow the server's camelCase convention via serde renames;
//! the [`Frequency`] enum carries the Portuguese wire values the server
//! stores and filters by.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use store::User;

/// A habit record as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency: Frequency,
    pub is_active: bool,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Habit {
    /// Date portion of the creation timestamp, for display.
    pub fn created_date(&self) -> &str {
        self.created_at.split('T').next().unwrap_or(&self.created_at)
    }
}

/// How often a habit recurs. Serialises to the server's Portuguese values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    #[serde(rename = "Diário")]
    Daily,
    #[serde(rename = "Semanal")]
    Weekly,
    #[serde(rename = "Quinzenal")]
    Biweekly,
    #[serde(rename = "Mensal")]
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::Monthly,
    ];

    /// The exact string sent over the wire and shown in the UI.
    pub fn wire_value(self) -> &'static str {
        match self {
            Frequency::Daily => "Diário",
            Frequency::Weekly => "Semanal",
            Frequency::Biweekly => "Quinzenal",
            Frequency::Monthly => "Mensal",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

#[derive(Debug, Error)]
#[error("unknown frequency: {0}")]
pub struct ParseFrequencyError(String);

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Frequency::ALL
            .into_iter()
            .find(|freq| freq.wire_value() == s)
            .ok_or_else(|| ParseFrequencyError(s.to_string()))
    }
}

/// Body of `POST /api/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: the opaque bearer token plus the user it belongs to.
/// The server's confirmation `message` is not represented.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Full habit payload for create (POST) and update (PUT, full replace).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency: Frequency,
    pub is_active: bool,
}

/// Partial habit payload for PATCH: only present fields are serialised.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl HabitPatch {
    /// A patch that flips only the active flag.
    pub fn active(value: bool) -> Self {
        Self {
            is_active: Some(value),
            ..Self::default()
        }
    }
}

/// Client-side list filters, serialised as query parameters only when set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitFilters {
    pub is_active: Option<bool>,
    pub frequency: Option<Frequency>,
    pub name: Option<String>,
}

impl HabitFilters {
    pub fn is_empty(&self) -> bool {
        self.is_active.is_none() && self.frequency.is_none() && self.name.is_none()
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(active) = self.is_active {
            query.push(("isActive", active.to_string()));
        }
        if let Some(frequency) = self.frequency {
            query.push(("frequency", frequency.wire_value().to_string()));
        }
        if let Some(name) = &self.name {
            query.push(("name", name.clone()));
        }
        query
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    pub uptime: f64,
    pub environment: String,
}

// Response envelopes. Mutating habit endpoints answer with the habit fields
// plus a confirmation `message`; the envelope captures it so the client can
// discard it before handing the habit to callers.

#[derive(Debug, Deserialize)]
pub(crate) struct RegisteredEnvelope {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    #[allow(dead_code)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileEnvelope {
    pub user: User,
    #[serde(default)]
    #[allow(dead_code)]
    pub message: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HabitEnvelope {
    #[serde(flatten)]
    pub habit: Habit,
    #[serde(default)]
    #[allow(dead_code)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HabitListEnvelope {
    pub habits: Vec<Habit>,
    #[serde(default)]
    #[allow(dead_code)]
    pub count: Option<u64>,
    #[serde(default)]
    #[allow(dead_code)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_serialises_to_wire_values() {
        assert_eq!(
            serde_json::to_string(&Frequency::Daily).unwrap(),
            "\"Diário\""
        );
        assert_eq!(
            serde_json::from_str::<Frequency>("\"Quinzenal\"").unwrap(),
            Frequency::Biweekly
        );
    }

    #[test]
    fn frequency_parses_from_wire_value() {
        for freq in Frequency::ALL {
            assert_eq!(freq.wire_value().parse::<Frequency>().unwrap(), freq);
        }
        assert!("Anual".parse::<Frequency>().is_err());
    }

    #[test]
    fn habit_uses_camel_case_wire_names() {
        let habit: Habit = serde_json::from_str(
            r#"{
                "id": "h-1",
                "name": "Academia",
                "frequency": "Semanal",
                "isActive": true,
                "userId": "u-1",
                "createdAt": "2024-01-10T12:00:00.000Z",
                "updatedAt": "2024-01-11T09:30:00.000Z"
            }"#,
        )
        .unwrap();
        assert_eq!(habit.name, "Academia");
        assert!(habit.is_active);
        assert!(habit.description.is_none());
        assert_eq!(habit.created_date(), "2024-01-10");
    }

    #[test]
    fn habit_envelope_strips_message() {
        let envelope: HabitEnvelope = serde_json::from_str(
            r#"{
                "id": "h-1",
                "name": "Correr",
                "frequency": "Diário",
                "isActive": true,
                "userId": "u-1",
                "createdAt": "t0",
                "updatedAt": "t0",
                "message": "Hábito criado com sucesso"
            }"#,
        )
        .unwrap();
        assert_eq!(envelope.habit.name, "Correr");
        assert_eq!(envelope.message.as_deref(), Some("Hábito criado com sucesso"));
    }

    #[test]
    fn patch_serialises_only_present_fields() {
        let patch = HabitPatch::active(false);
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"isActive":false}"#
        );
    }

    #[test]
    fn empty_filters_produce_no_query_parameters() {
        assert!(HabitFilters::default().is_empty());
        assert!(HabitFilters::default().to_query().is_empty());
    }

    #[test]
    fn filters_serialise_only_present_fields() {
        let filters = HabitFilters {
            is_active: Some(true),
            frequency: None,
            name: Some("acade".to_string()),
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("isActive", "true".to_string()),
                ("name", "acade".to_string()),
            ]
        );
    }
}
