use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Trimmed episode record returned by the `get_episodes` tool
///
/// Fields present in the upstream response are copied verbatim; fields the
/// upstream omits serialize as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub air_date: Option<String>,
    /// Episode code, e.g. "S01E01"
    pub episode: Option<String>,
}

/// Trimmed character record returned by the `get_character` tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub species: Option<String>,
    #[serde(rename = "type")]
    pub character_type: Option<String>,
    pub gender: Option<String>,
    /// URLs of the episodes the character appears in, in upstream order
    #[serde(default)]
    pub episode: Vec<String>,
    /// Last known location as the upstream object (at least `name` and `url`)
    #[serde(default)]
    pub location: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_episode_deserializes_from_full_upstream_record() {
        // Upstream sends more fields than the summary keeps
        let body = json!({
            "id": 1,
            "name": "Pilot",
            "air_date": "December 2, 2013",
            "episode": "S01E01",
            "characters": ["https://rickandmortyapi.com/api/character/1"],
            "url": "https://rickandmortyapi.com/api/episode/1",
            "created": "2017-11-10T12:56:33.798Z"
        });

        let episode: EpisodeSummary = serde_json::from_value(body).unwrap();

        assert_eq!(episode.id, Some(1));
        assert_eq!(episode.name.as_deref(), Some("Pilot"));
        assert_eq!(episode.air_date.as_deref(), Some("December 2, 2013"));
        assert_eq!(episode.episode.as_deref(), Some("S01E01"));
    }

    #[test]
    fn test_episode_absent_fields_serialize_as_null() {
        let episode: EpisodeSummary = serde_json::from_value(json!({ "id": 7 })).unwrap();

        let value = serde_json::to_value(&episode).unwrap();
        assert_eq!(
            value,
            json!({ "id": 7, "name": null, "air_date": null, "episode": null })
        );
    }

    #[test]
    fn test_episode_pilot_serialization_shape() {
        let episode = EpisodeSummary {
            id: Some(1),
            name: Some("Pilot".to_string()),
            air_date: Some("December 2, 2013".to_string()),
            episode: Some("S01E01".to_string()),
        };

        assert_eq!(
            serde_json::to_string(&episode).unwrap(),
            r#"{"id":1,"name":"Pilot","air_date":"December 2, 2013","episode":"S01E01"}"#
        );
    }

    #[test]
    fn test_character_defaults_for_missing_collections() {
        let character: CharacterSummary =
            serde_json::from_value(json!({ "id": 3, "name": "Summer Smith" })).unwrap();

        assert_eq!(character.id, Some(3));
        assert!(character.episode.is_empty());
        assert!(character.location.is_empty());
        assert_eq!(character.status, None);
    }

    #[test]
    fn test_character_location_passes_through_upstream_keys() {
        let character: CharacterSummary = serde_json::from_value(json!({
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "episode": ["https://rickandmortyapi.com/api/episode/1"],
            "location": {
                "name": "Citadel of Ricks",
                "url": "https://rickandmortyapi.com/api/location/3"
            }
        }))
        .unwrap();

        assert_eq!(character.character_type.as_deref(), Some(""));
        assert_eq!(
            character.location.get("name"),
            Some(&json!("Citadel of Ricks"))
        );
        assert_eq!(character.episode.len(), 1);

        // The "type" key round-trips under its upstream name
        let value = serde_json::to_value(&character).unwrap();
        assert_eq!(value.get("type"), Some(&json!("")));
    }
}
