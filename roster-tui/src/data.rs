//! The embedded people roster.

use serde::Deserialize;

/// One roster record, as stored in `assets/people.json`.
#[derive(Clone, Debug, Deserialize)]
pub struct Person {
    pub guid: String,
    pub name: String,
    pub gender: String,
    pub age: i64,
    pub email: String,
}

const PEOPLE_JSON: &str = include_str!("../assets/people.json");

/// Load the embedded dataset. The JSON ships inside the binary, so a parse
/// failure is a build defect, not a runtime condition.
pub fn load_people() -> Vec<Person> {
    serde_json::from_str(PEOPLE_JSON).expect("embedded people.json is valid")
}
