//! Domain types for user records
//!
//! The shape mirrors the upstream randomuser.me record so records can be
//! deserialized directly from the API envelope. Records are immutable once
//! fetched and are shared between screens as `Arc<UserRecord>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Gender as reported (and filtered) by the upstream source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Query-parameter value understood by the upstream API
    pub fn as_param(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_param())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("unknown gender '{other}' (expected male or female)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserName {
    pub title: String,
    pub first: String,
    pub last: String,
}

impl UserName {
    /// "First Last", the form used for searching
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// "Title First Last", the form used for display
    pub fn display(&self) -> String {
        format!("{} {} {}", self.title, self.first, self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Timezone {
    pub offset: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    /// Upstream sends either a string or a number here
    #[serde(deserialize_with = "string_or_number")]
    pub postcode: String,
    pub coordinates: Coordinates,
    pub timezone: Timezone,
}

/// Login identity. Credential hashes sent by the upstream API are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Login {
    pub uuid: String,
    pub username: String,
}

/// A timestamp plus the age in whole years derived from it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DatedAge {
    pub date: DateTime<Utc>,
    pub age: u32,
}

/// National identifier (e.g. "SSN"); the value is null for some nationalities
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct NationalId {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

/// One user profile as delivered by the record source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserRecord {
    pub gender: Gender,
    pub name: UserName,
    pub location: Location,
    pub email: String,
    pub login: Login,
    pub dob: DatedAge,
    pub registered: DatedAge,
    pub phone: String,
    pub cell: String,
    #[serde(default)]
    pub id: NationalId,
    pub picture: Picture,
    pub nat: String,
}

impl UserRecord {
    /// Stable key for navigation and list rendering
    pub fn uuid(&self) -> &str {
        &self.login.uuid
    }

    pub fn username(&self) -> &str {
        &self.login.username
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}
