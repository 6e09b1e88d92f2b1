//! Language preference model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Which kind of identity a preference belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    User,
    Group,
}

impl Namespace {
    pub const ALL: [Namespace; 2] = [Namespace::User, Namespace::Group];

    pub fn table(&self) -> &'static str {
        match self {
            Namespace::User => "user_languages",
            Namespace::Group => "group_languages",
        }
    }

    pub fn id_column(&self) -> &'static str {
        match self {
            Namespace::User => "user_id",
            Namespace::Group => "group_id",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::User => write!(f, "user"),
            Namespace::Group => write!(f, "group"),
        }
    }
}

impl FromStr for Namespace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Namespace::User),
            "group" | "guild" => Ok(Namespace::Group),
            other => Err(format!("unknown namespace: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LanguagePreference {
    pub identity: i64,
    pub language: String,
    pub updated_at: DateTime<Utc>,
}
