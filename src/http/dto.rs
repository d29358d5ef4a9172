//! Data Transfer Objects for the HTTP API.
//!
//! Model types already derive Serialize/Deserialize and cross the wire
//! as-is; the types here exist for request shapes that do not map 1:1 onto
//! a model (search query strings, creation payloads, validation verdicts).

use serde::{Deserialize, Serialize};

use crate::models::{Category, GeoPoint, Place, PlaceStatus, WeeklyInterval};
use crate::schedule::ScheduleError;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Repository backend and current place count
    pub repository: String,
}

/// Query parameters for place search.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchQuery {
    /// Name substring filter (case-insensitive)
    #[serde(default)]
    pub text: Option<String>,
    /// Category filter
    #[serde(default)]
    pub category: Option<Category>,
    /// Reference latitude for radius filtering
    #[serde(default)]
    pub lat: Option<f64>,
    /// Reference longitude for radius filtering
    #[serde(default)]
    pub lon: Option<f64>,
    /// Radius in kilometers, boundary inclusive
    #[serde(default)]
    pub radius_km: Option<f64>,
}

/// Response for place listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceListResponse {
    pub places: Vec<Place>,
    pub total: usize,
}

/// Request body for creating or replacing a place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceRequest {
    pub name: String,
    pub category: Category,
    pub latitude: f64,
    pub longitude: f64,
    pub creator_id: String,
    #[serde(default)]
    pub schedules: Vec<WeeklyInterval>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl PlaceRequest {
    /// Build a new pending place from the request.
    ///
    /// # Returns
    /// * `Err(String)` if the coordinates are out of range
    pub fn into_place(self) -> Result<Place, String> {
        let location = GeoPoint::new(self.latitude, self.longitude)?;
        let mut place = Place::new(self.name, self.category, location, self.creator_id);
        place.schedules = self.schedules;
        place.address = self.address;
        place.phone_numbers = self.phone_numbers;
        place.description = self.description;
        Ok(place)
    }
}

/// Request body for a status transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: PlaceStatus,
}

/// Request body for schedule validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateScheduleRequest {
    #[serde(flatten)]
    pub interval: WeeklyInterval,
    /// Index of the row being edited, excluded from conflict checking
    #[serde(default)]
    pub edited_index: Option<usize>,
}

/// Validation verdict; a failed check is a payload, not an HTTP error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateScheduleResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ScheduleError>,
}

impl ValidateScheduleResponse {
    pub fn ok() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failed(error: ScheduleError) -> Self {
        Self {
            ok: false,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, TimeOfDay};

    #[test]
    fn test_place_request_into_place() {
        let request = PlaceRequest {
            name: "El Mirador".to_string(),
            category: Category::Restaurant,
            latitude: 4.5339,
            longitude: -75.6811,
            creator_id: "user-9".to_string(),
            schedules: vec![],
            address: "Calle 10 #5-20".to_string(),
            phone_numbers: vec!["+57 300 000 0000".to_string()],
            description: String::new(),
        };
        let place = request.into_place().unwrap();
        assert_eq!(place.name, "El Mirador");
        assert_eq!(place.address, "Calle 10 #5-20");
    }

    #[test]
    fn test_place_request_rejects_bad_coordinates() {
        let request = PlaceRequest {
            name: "nowhere".to_string(),
            category: Category::Other,
            latitude: 95.0,
            longitude: 0.0,
            creator_id: "user-9".to_string(),
            schedules: vec![],
            address: String::new(),
            phone_numbers: vec![],
            description: String::new(),
        };
        assert!(request.into_place().is_err());
    }

    #[test]
    fn test_validate_request_flattens_interval_fields() {
        let json = r#"{
            "open_day": "monday",
            "open_time": 9,
            "close_day": "monday",
            "close_time": 17,
            "edited_index": 1
        }"#;
        let request: ValidateScheduleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.interval.open_day, Some(DayOfWeek::Monday));
        assert_eq!(request.interval.close_time, TimeOfDay::new(17));
        assert_eq!(request.edited_index, Some(1));
    }

    #[test]
    fn test_validation_verdict_serialization() {
        let ok = serde_json::to_value(ValidateScheduleResponse::ok()).unwrap();
        assert_eq!(ok, serde_json::json!({"ok": true}));

        let failed =
            serde_json::to_value(ValidateScheduleResponse::failed(ScheduleError::Overlap))
                .unwrap();
        assert_eq!(failed, serde_json::json!({"ok": false, "error": "Overlap"}));
    }
}
