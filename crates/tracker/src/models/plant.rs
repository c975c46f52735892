//! Plant record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use verdant_core::{CareLevel, Category, PlantId};

/// A plant, either from the shipped catalog or from a personal collection.
///
/// Both stores use this shape; they never cross-reference each other, and
/// an id is only unique within its own store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    /// Store-local identifier. Generated entries use a millisecond
    /// timestamp string; catalog entries use small integer strings.
    pub id: PlantId,
    /// Common or cultivar name.
    pub name: String,
    /// Category from the closed set.
    pub category: Category,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Image URL, free text.
    pub image_url: String,
    /// Care level from the closed set.
    pub care_level: CareLevel,
    /// Watering cadence, free text (e.g. "Weekly").
    pub watering_frequency: String,
    /// When the plant was last watered, if recorded.
    #[serde(
        default,
        deserialize_with = "de::empty_date_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_watered: Option<NaiveDate>,
    /// When the plant is next due for watering, if scheduled.
    #[serde(
        default,
        deserialize_with = "de::empty_date_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_watering: Option<NaiveDate>,
    /// Free-text health note (e.g. "healthy").
    #[serde(
        default,
        deserialize_with = "de::empty_string_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub health_status: Option<String>,
}

/// Deserializers tolerant of the legacy wire format, which wrote unset
/// optional fields as empty strings rather than omitting them.
pub(crate) mod de {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, de::Error};

    pub fn empty_string_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|s| !s.is_empty()))
    }

    pub fn empty_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)?.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => s.parse::<NaiveDate>().map(Some).map_err(Error::custom),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn monstera() -> Plant {
        Plant {
            id: PlantId::new("1"),
            name: "Monstera Deliciosa".to_owned(),
            category: Category::Tropical,
            description: "Split-leaf philodendron.".to_owned(),
            image_url: "https://example.com/monstera.jpg".to_owned(),
            care_level: CareLevel::Easy,
            watering_frequency: "Weekly".to_owned(),
            last_watered: None,
            next_watering: None,
            health_status: Some("healthy".to_owned()),
        }
    }

    #[test]
    fn test_wire_format_field_names() {
        let json = serde_json::to_value(monstera()).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/monstera.jpg");
        assert_eq!(json["careLevel"], "easy");
        assert_eq!(json["wateringFrequency"], "Weekly");
        assert_eq!(json["healthStatus"], "healthy");
        assert!(json.get("lastWatered").is_none());
    }

    #[test]
    fn test_reads_legacy_empty_string_dates() {
        let json = r#"{
            "id": 1721049600000,
            "name": "Jade Plant",
            "category": "succulent",
            "description": "",
            "imageUrl": "https://example.com/jade.jpg",
            "careLevel": "easy",
            "wateringFrequency": "Every two weeks",
            "lastWatered": "",
            "nextWatering": "",
            "healthStatus": "healthy"
        }"#;

        let plant: Plant = serde_json::from_str(json).unwrap();
        assert_eq!(plant.id.as_str(), "1721049600000");
        assert_eq!(plant.last_watered, None);
        assert_eq!(plant.next_watering, None);
    }

    #[test]
    fn test_reads_dates_when_present() {
        let json = r#"{
            "id": "2",
            "name": "Boston Fern",
            "category": "fern",
            "imageUrl": "https://example.com/fern.jpg",
            "careLevel": "moderate",
            "wateringFrequency": "Twice a week",
            "lastWatered": "2024-07-01",
            "nextWatering": "2024-07-04"
        }"#;

        let plant: Plant = serde_json::from_str(json).unwrap();
        assert_eq!(
            plant.last_watered,
            Some(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())
        );
        assert_eq!(
            plant.next_watering,
            Some(NaiveDate::from_ymd_opt(2024, 7, 4).unwrap())
        );
    }

    #[test]
    fn test_rejects_unknown_category() {
        let json = r#"{
            "id": "3",
            "name": "Mystery",
            "category": "weed",
            "imageUrl": "x",
            "careLevel": "easy",
            "wateringFrequency": "Never"
        }"#;
        assert!(serde_json::from_str::<Plant>(json).is_err());
    }

    #[test]
    fn test_roundtrip_preserves_record() {
        let plant = monstera();
        let json = serde_json::to_string(&plant).unwrap();
        let parsed: Plant = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, plant);
    }
}
