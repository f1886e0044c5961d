use std::sync::OnceLock;

use color_eyre::eyre::{eyre, Result};

pub static REQWEST: OnceLock<reqwest::Client> = OnceLock::new();
pub static OVERPASS_URL: OnceLock<String> = OnceLock::new();
pub static DATA_DIR: OnceLock<String> = OnceLock::new();

pub fn get_reqwest_client() -> Result<&'static reqwest::Client> {
    REQWEST.get().ok_or(eyre!("Failed to get reqwest client"))
}

pub fn get_overpass_url() -> Result<&'static String> {
    OVERPASS_URL
        .get()
        .ok_or(eyre!("Failed to get overpass url"))
}

pub fn get_data_dir() -> Result<&'static String> {
    DATA_DIR.get().ok_or(eyre!("Failed to get data dir"))
}
