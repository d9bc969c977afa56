use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Gender {
    Female,
    Male,
    NonBinary,
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PetPreference {
    Cat,
    Dog,
}

/// Intake details collected before any task is run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserData {
    pub name: String,
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    pub pet_preference: Option<PetPreference>,
    #[serde(default)]
    pub email: Option<String>,
}
