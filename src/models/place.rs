use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::geo::GeoPoint;
use super::interval::WeeklyInterval;

/// Unique place identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(Uuid);

impl PlaceId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID value.
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlaceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Closed set of place categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restaurant,
    Cafe,
    Bar,
    Park,
    Museum,
    Shopping,
    Hotel,
    Entertainment,
    Other,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "restaurant" => Ok(Self::Restaurant),
            "cafe" => Ok(Self::Cafe),
            "bar" => Ok(Self::Bar),
            "park" => Ok(Self::Park),
            "museum" => Ok(Self::Museum),
            "shopping" => Ok(Self::Shopping),
            "hotel" => Ok(Self::Hotel),
            "entertainment" => Ok(Self::Entertainment),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// Moderation status of a place record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceStatus {
    Pending,
    Authorized,
    Rejected,
}

impl FromStr for PlaceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "authorized" => Ok(Self::Authorized),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

/// A place record owned by the catalog.
///
/// `schedules` keeps insertion order (which is also display order) and must
/// stay pairwise non-overlapping; the catalog does not enforce that itself,
/// validation happens in [`crate::schedule`] before a place reaches it.
/// Address, phone numbers and description are opaque to the query engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub category: Category,
    pub location: GeoPoint,
    #[serde(default)]
    pub schedules: Vec<WeeklyInterval>,
    pub creator_id: String,
    pub status: PlaceStatus,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Place {
    /// Create a new pending place with a fresh id.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        location: GeoPoint,
        creator_id: impl Into<String>,
    ) -> Self {
        Self {
            id: PlaceId::generate(),
            name: name.into(),
            category,
            location,
            schedules: Vec::new(),
            creator_id: creator_id.into(),
            status: PlaceStatus::Pending,
            address: String::new(),
            phone_numbers: Vec::new(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }
}
