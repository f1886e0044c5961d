use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OverpassElement {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: OverpassTags,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct OverpassTags {
    pub amenity: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "contact:phone")]
    pub contact_phone: Option<String>,
    #[serde(rename = "addr:housenumber")]
    pub addr_housenumber: Option<String>,
    #[serde(rename = "addr:street")]
    pub addr_street: Option<String>,
    #[serde(rename = "addr:suburb")]
    pub addr_suburb: Option<String>,
    #[serde(rename = "addr:city")]
    pub addr_city: Option<String>,
}
