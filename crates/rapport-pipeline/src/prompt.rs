//! LLM prompt construction for classification and explanation

use once_cell::sync::Lazy;
use rapport_domain::{Person, Score, Vehicle};

/// Render a vehicle as a profile line
pub fn format_vehicle(vehicle: &Vehicle) -> String {
    match &vehicle.description {
        Some(description) => format!("- {}: {}", vehicle.title, description),
        None => format!("- {}", vehicle.title),
    }
}

/// Render a person as the canonical textual profile
pub fn format_person(person: &Person) -> String {
    let values = person.values.join(", ");
    let visions = person.visions.join(", ");
    let vehicles = person
        .vehicles
        .iter()
        .map(format_vehicle)
        .collect::<Vec<_>>()
        .join("\n");

    [
        "NAME:",
        person.name.as_str(),
        "VALUES:",
        values.as_str(),
        "VISIONS:",
        visions.as_str(),
        "VEHICLES:",
        vehicles.as_str(),
    ]
    .join("\n")
}

/// User message presenting two people to the classifier
pub fn pair_input(person1: &Person, person2: &Person) -> String {
    format!(
        "PERSON 1:\n\n{}\n\nPERSON 2:\n\n{}",
        format_person(person1),
        format_person(person2)
    )
}

/// User message presenting two people and their ranking to the generator
pub fn explanation_input(person1: &Person, person2: &Person, score: Score) -> String {
    format!("{}\n\nRANKING: {}", pair_input(person1, person2), score)
}

/// System instruction for pairwise classification
pub fn classifier_instructions() -> &'static str {
    &CLASSIFIER_INSTRUCTIONS
}

static CLASSIFIER_INSTRUCTIONS: Lazy<String> = Lazy::new(|| {
    let alice = Person::new(0, "Alice")
        .with_values(["cake", "candy", "respect"])
        .with_visions(["The world is beautiful", "The world has lots of sweets"])
        .with_vehicles([Vehicle::new("Owns a candy company")]);
    let bob = Person::new(1, "Bob")
        .with_values(["beauty", "headphones"])
        .with_visions(["The world sounds great", "The world looks incredible"])
        .with_vehicles([Vehicle::new("Is a musician")]);

    format!(
        r#"Given two people, return a "ranking", which is the compatibility of these two people. The ranking should be one of the following: "low", "medium", or "high". Do not output any other information, just one of those values.

For example, if given the following input:

---
{}
---

You would output something like the following:

medium

Do NOT output any other text, as it will not be helpful."#,
        pair_input(&alice, &bob)
    )
});

/// System instruction for explaining a ranking
pub const GENERATOR_INSTRUCTIONS: &str = r#"Given two people and a previously-determined ranking, return a JSON object with:

- "reason", a reason for this ranking.
- "potential", an array of things these two people could talk about given their compatibility."#;

/// JSON schema the generator's answer must follow
pub const RECOMMENDATION_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "reason": { "type": "string" },
    "potential": { "type": "array", "items": { "type": "string" } }
  },
  "required": ["reason", "potential"],
  "additionalProperties": false
}"#;
