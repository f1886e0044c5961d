use crate::types::dto::place::Place;
use crate::types::overpass::{OverpassElement, OverpassTags};

pub const DEFAULT_RADIUS_M: f64 = 3000.0;

/// Name given to amenities with no `name` tag. The frontend renders it
/// verbatim, and the sort below pushes these entries to the back.
pub const UNNAMED_PLACEHOLDER: &str = "(Unnamed)";

const AMENITIES: [&str; 4] = ["hospital", "clinic", "doctors", "pharmacy"];

/// Parses a coordinate query parameter, accepting only finite numbers.
/// `f64::from_str` would happily take "inf" or "NaN".
pub fn parse_coord(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Resolves the radius query parameter. Absent or empty falls back to the
/// default; a present value must parse to a finite number. Fractional radii
/// are forwarded as-is.
pub fn parse_radius(raw: Option<&str>) -> Option<f64> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Some(DEFAULT_RADIUS_M),
        Some(value) => value.parse::<f64>().ok().filter(|radius| radius.is_finite()),
    }
}

/// Overpass QL for health amenity nodes around a point.
pub fn overpass_query(lat: f64, lng: f64, radius: f64) -> String {
    let selectors = AMENITIES
        .iter()
        .map(|amenity| {
            format!("  node(around:{radius},{lat},{lng})[\"amenity\"=\"{amenity}\"];\n")
        })
        .collect::<String>();
    format!("[out:json];\n(\n{selectors});\nout center tags;\n")
}

/// Reshapes the raw Overpass elements and sorts named places ahead of
/// placeholder-named ones. The sort key is a bool and `sort_by_key` is
/// stable, so upstream order is kept within each group.
pub fn places_from(elements: Vec<OverpassElement>) -> Vec<Place> {
    let mut places: Vec<Place> = elements.into_iter().map(place_from).collect();
    places.sort_by_key(|place| place.name == UNNAMED_PLACEHOLDER);
    places
}

fn place_from(element: OverpassElement) -> Place {
    let OverpassTags {
        amenity,
        name,
        phone,
        contact_phone,
        addr_housenumber,
        addr_street,
        addr_suburb,
        addr_city,
    } = element.tags;
    Place {
        id: element.id,
        category: amenity.unwrap_or_else(|| String::from("unknown")),
        name: name.unwrap_or_else(|| String::from(UNNAMED_PLACEHOLDER)),
        lat: element.lat,
        lng: element.lon,
        phone: phone.or(contact_phone).unwrap_or_default(),
        address: [addr_housenumber, addr_street, addr_suburb, addr_city]
            .into_iter()
            .flatten()
            .collect::<Vec<String>>()
            .join(", "),
    }
}
