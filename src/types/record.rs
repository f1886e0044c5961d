use serde::{Deserialize, Serialize};

/// A heritage site record as stored in `sites.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Site {
    pub id: String,
    pub name: String,
    pub province: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(
        rename = "healthTips",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub health_tips: Option<Vec<String>>,
    #[serde(
        rename = "safetyTips",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub safety_tips: Option<Vec<String>>,
    #[serde(
        rename = "itemsToCarry",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub items_to_carry: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// A city record as stored in `cities.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct City {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}
