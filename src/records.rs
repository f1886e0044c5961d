use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::clients::get_data_dir;
use crate::types::record::{City, Site};

const SITES_FILE: &str = "sites.json";
const CITIES_FILE: &str = "cities.json";

/// Re-reads the backing file on every call. The collections are small and
/// never written at runtime, so there is no cache to keep consistent.
async fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

fn data_file(file_name: &str) -> Result<PathBuf> {
    Ok(Path::new(get_data_dir()?).join(file_name))
}

pub async fn list_sites() -> Result<Vec<Site>> {
    read_collection(&data_file(SITES_FILE)?).await
}

pub async fn find_site(site_id: &str) -> Result<Option<Site>> {
    let sites = list_sites().await?;
    Ok(sites.into_iter().find(|site| site.id == site_id))
}

pub async fn list_cities() -> Result<Vec<City>> {
    read_collection(&data_file(CITIES_FILE)?).await
}

pub async fn find_city(city_id: &str) -> Result<Option<City>> {
    let cities = list_cities().await?;
    Ok(cities.into_iter().find(|city| city.id == city_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::DATA_DIR;
    use std::sync::OnceLock;
    use tempfile::TempDir;

    const SITES_JSON: &str = r#"[
        {
            "id": "great-zimbabwe",
            "name": "Great Zimbabwe",
            "province": "Masvingo",
            "description": "Ruins of a medieval stone city.",
            "image": "https://example.com/great-zimbabwe.jpg",
            "location": { "lat": -20.2674, "lng": 30.9335 },
            "healthTips": ["Carry drinking water"],
            "safetyTips": ["Stay on marked paths"],
            "itemsToCarry": ["Hat", "Sunscreen"]
        },
        {
            "id": "khami-ruins",
            "name": "Khami Ruins",
            "province": "Matabeleland North",
            "description": "Stone-walled capital of the Torwa state."
        }
    ]"#;

    const CITIES_JSON: &str = r#"[
        {
            "id": "harare",
            "name": "Harare",
            "tips": ["Tap water quality varies", "Use registered taxis"]
        },
        {
            "id": "bulawayo",
            "name": "Bulawayo",
            "tips": []
        }
    ]"#;

    static TEST_DIR: OnceLock<TempDir> = OnceLock::new();

    // DATA_DIR can only be set once per process, so every test in this
    // module shares the same fixture directory.
    fn init_test_data() {
        let dir = TEST_DIR.get_or_init(|| {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join(SITES_FILE), SITES_JSON).unwrap();
            std::fs::write(dir.path().join(CITIES_FILE), CITIES_JSON).unwrap();
            dir
        });
        DATA_DIR.get_or_init(|| dir.path().to_string_lossy().into_owned());
    }

    #[tokio::test]
    async fn list_sites_returns_all_in_source_order() {
        init_test_data();
        let sites = list_sites().await.unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].id, "great-zimbabwe");
        assert_eq!(sites[1].id, "khami-ruins");
    }

    #[tokio::test]
    async fn find_site_returns_record_with_all_fields() {
        init_test_data();
        let site = find_site("great-zimbabwe").await.unwrap().unwrap();
        assert_eq!(site.name, "Great Zimbabwe");
        assert_eq!(site.province, "Masvingo");
        let location = site.location.unwrap();
        assert_eq!(location.lat, -20.2674);
        assert_eq!(location.lng, 30.9335);
        assert_eq!(site.health_tips.unwrap(), vec!["Carry drinking water"]);
        assert_eq!(site.items_to_carry.unwrap(), vec!["Hat", "Sunscreen"]);
    }

    #[tokio::test]
    async fn find_site_unknown_id_is_none() {
        init_test_data();
        assert!(find_site("no-such-site").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn absent_optional_fields_are_omitted_from_output() {
        init_test_data();
        let site = find_site("khami-ruins").await.unwrap().unwrap();
        assert!(site.image.is_none());
        let value = serde_json::to_value(&site).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("image"));
        assert!(!object.contains_key("location"));
        assert!(!object.contains_key("healthTips"));
    }

    #[tokio::test]
    async fn find_city_matches_exact_id() {
        init_test_data();
        let city = find_city("bulawayo").await.unwrap().unwrap();
        assert_eq!(city.name, "Bulawayo");
        assert!(city.tips.is_empty());
        assert!(find_city("bulaway").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn repeated_reads_are_identical() {
        init_test_data();
        let first = list_cities().await.unwrap();
        let second = list_cities().await.unwrap();
        assert_eq!(first, second);
    }
}
