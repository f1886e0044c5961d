use serde::{Deserialize, Serialize, Serializer};

/// One amenity from the Overpass response, reshaped for the frontend.
/// `category` goes out on the wire as `type` to match what the client reads.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Place {
    pub id: i64,
    #[serde(rename = "type")]
    pub category: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub phone: String,
    pub address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Center {
    pub lat: f64,
    pub lng: f64,
}

/// Response envelope for `GET /api/nearby`.
#[derive(Serialize, Deserialize, Debug)]
pub struct PlaceSet {
    pub center: Center,
    #[serde(serialize_with = "serialize_radius")]
    pub radius: f64,
    pub count: usize,
    pub places: Vec<Place>,
}

/// Whole-number radii go out as integers (`3000`, not `3000.0`); fractional
/// values keep their fraction.
fn serialize_radius<S: Serializer>(radius: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if radius.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(radius) {
        serializer.serialize_i64(*radius as i64)
    } else {
        serializer.serialize_f64(*radius)
    }
}
