//! Corpus loading and validation
//!
//! Turns raw JSON person records into domain [`Person`]s. Validation happens
//! up front so a malformed corpus is rejected before any LLM call is made.

use crate::error::PipelineError;
use rapport_domain::{Person, PersonId, Vehicle};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::info;

/// Parse a JSON document holding an array of person records
///
/// Input order is preserved; it becomes the pair-enumeration order.
pub fn parse_people(json: &str) -> Result<Vec<Person>, PipelineError> {
    let value: Value = serde_json::from_str(json)?;
    load_people(&value)
}

/// Validate an already-parsed JSON value as a corpus
pub fn load_people(value: &Value) -> Result<Vec<Person>, PipelineError> {
    let records = value
        .as_array()
        .ok_or_else(|| invalid("People data must be a JSON array".to_string()))?;

    let mut seen = HashSet::new();
    let mut people = Vec::with_capacity(records.len());

    for (idx, record) in records.iter().enumerate() {
        let person = parse_person(record).map_err(|e| invalid(format!("person {}: {}", idx, e)))?;

        if !seen.insert(person.id) {
            return Err(invalid(format!(
                "person {}: duplicate id {}",
                idx, person.id
            )));
        }
        people.push(person);
    }

    info!("Loaded corpus of {} people", people.len());
    Ok(people)
}

fn invalid(message: String) -> PipelineError {
    PipelineError::Validation(message)
}

/// Parse a single person record
fn parse_person(json: &Value) -> Result<Person, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "record is not a JSON object".to_string())?;

    let id: PersonId = obj
        .get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| "missing or invalid 'id'".to_string())?;

    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| "missing or empty 'name'".to_string())?
        .to_string();

    let values = string_list(obj, "values")?;
    let visions = string_list(obj, "visions")?;

    let vehicles = array_field(obj, "vehicles")?
        .iter()
        .enumerate()
        .map(|(i, v)| parse_vehicle(v).map_err(|e| format!("vehicles[{}]: {}", i, e)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Person {
        id,
        name,
        values,
        visions,
        vehicles,
    })
}

fn array_field<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Vec<Value>, String> {
    obj.get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| format!("'{}' must be an array", field))
}

fn string_list(obj: &Map<String, Value>, field: &str) -> Result<Vec<String>, String> {
    array_field(obj, field)?
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| format!("{}[{}] must be a string", field, i))
        })
        .collect()
}

/// Vehicles are `{title, description?}` objects, or a bare title string
fn parse_vehicle(json: &Value) -> Result<Vehicle, String> {
    match json {
        Value::String(title) => Ok(Vehicle::new(title.as_str())),
        Value::Object(obj) => {
            let title = obj
                .get("title")
                .and_then(Value::as_str)
                .ok_or_else(|| "missing or invalid 'title'".to_string())?;

            let vehicle = Vehicle::new(title);
            match obj.get("description") {
                None | Some(Value::Null) => Ok(vehicle),
                Some(Value::String(description)) => Ok(vehicle.with_description(description.as_str())),
                Some(_) => Err("'description' must be a string".to_string()),
            }
        }
        _ => Err("vehicle must be a string or an object".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(json: &str, needle: &str) {
        match parse_people(json) {
            Err(PipelineError::Validation(message)) => {
                assert!(message.contains(needle), "{:?} should mention {:?}", message, needle)
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_valid_corpus() {
        let json = r#"[
            {
                "id": 1,
                "name": "Alice",
                "values": ["cake", "respect"],
                "visions": ["The world is beautiful"],
                "vehicles": [{"title": "Candy Co", "description": "Makes candy"}],
                "email": "alice@example.com"
            },
            {
                "id": 2,
                "name": "Bob",
                "values": [],
                "visions": [],
                "vehicles": [{"title": "Band"}, "Studio"]
            }
        ]"#;

        let people = parse_people(json).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "Alice");
        assert_eq!(people[0].vehicles[0].description.as_deref(), Some("Makes candy"));
        assert_eq!(people[1].vehicles[0], Vehicle::new("Band"));
        assert_eq!(people[1].vehicles[1], Vehicle::new("Studio"));
    }

    #[test]
    fn test_preserves_input_order() {
        let json = r#"[
            {"id": 9, "name": "Zed", "values": [], "visions": [], "vehicles": []},
            {"id": 3, "name": "Amy", "values": [], "visions": [], "vehicles": []}
        ]"#;

        let ids: Vec<_> = parse_people(json).unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 3]);
    }

    #[test]
    fn test_empty_corpus() {
        assert!(parse_people("[]").unwrap().is_empty());
    }

    #[test]
    fn test_not_an_array() {
        assert_invalid(r#"{"people": []}"#, "array");
    }

    #[test]
    fn test_missing_name() {
        assert_invalid(
            r#"[{"id": 1, "values": [], "visions": [], "vehicles": []}]"#,
            "name",
        );
        assert_invalid(
            r#"[{"id": 1, "name": "", "values": [], "visions": [], "vehicles": []}]"#,
            "name",
        );
    }

    #[test]
    fn test_attribute_not_array() {
        assert_invalid(
            r#"[{"id": 1, "name": "A", "values": "cake", "visions": [], "vehicles": []}]"#,
            "'values' must be an array",
        );
        assert_invalid(
            r#"[{"id": 1, "name": "A", "values": [], "vehicles": []}]"#,
            "'visions' must be an array",
        );
    }

    #[test]
    fn test_error_names_record_index() {
        assert_invalid(
            r#"[
                {"id": 1, "name": "A", "values": [], "visions": [], "vehicles": []},
                {"id": 2, "name": "B", "values": [], "visions": [], "vehicles": 5}
            ]"#,
            "person 1",
        );
    }

    #[test]
    fn test_missing_or_duplicate_id() {
        assert_invalid(
            r#"[{"name": "A", "values": [], "visions": [], "vehicles": []}]"#,
            "'id'",
        );
        assert_invalid(
            r#"[
                {"id": 1, "name": "A", "values": [], "visions": [], "vehicles": []},
                {"id": 1, "name": "B", "values": [], "visions": [], "vehicles": []}
            ]"#,
            "duplicate id 1",
        );
    }

    #[test]
    fn test_invalid_vehicle() {
        assert_invalid(
            r#"[{"id": 1, "name": "A", "values": [], "visions": [], "vehicles": [{"description": "x"}]}]"#,
            "vehicles[0]",
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_people("[{"), Err(PipelineError::JsonParse(_))));
    }
}
