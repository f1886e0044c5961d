mod clients;
mod nearby;
mod net;
mod records;
mod types;

use std::net::SocketAddr;

use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use clients::{get_overpass_url, get_reqwest_client, DATA_DIR, OVERPASS_URL, REQWEST};
use nearby::{overpass_query, parse_coord, parse_radius, places_from};
use net::response::{ResponseError, Result};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{info, instrument};
use types::dto::place::{Center, PlaceSet};
use types::overpass::OverpassResponse;
use types::record::{City, Site};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
const DEFAULT_DATA_DIR: &str = "data";

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // initialize tracing
    tracing_subscriber::fmt::init();

    init_config();

    // build our application with a route
    let app = Router::new()
        .route("/", get(api_status))
        .route("/api/sites", get(list_sites))
        .route("/api/sites/:id", get(get_site_by_id))
        .route("/api/cities", get(list_cities))
        .route("/api/cities/:id", get(get_city_by_id))
        .route("/api/nearby", get(find_nearby))
        .layer(CorsLayer::permissive());

    let port = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    info!("Running on port {port}");

    axum::Server::bind(&SocketAddr::from(([0, 0, 0, 0], port)))
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

fn init_config() {
    OVERPASS_URL
        .set(
            std::env::var("HERITAGE_OVERPASS_URL")
                .unwrap_or_else(|_| String::from(DEFAULT_OVERPASS_URL)),
        )
        .unwrap();
    DATA_DIR
        .set(
            std::env::var("HERITAGE_DATA_DIR")
                .unwrap_or_else(|_| String::from(DEFAULT_DATA_DIR)),
        )
        .unwrap();
    REQWEST.set(reqwest::Client::new()).unwrap();
}

async fn api_status() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "message": "Heritage Health Hub API running" }))
}

async fn list_sites() -> Result<Json<Vec<Site>>> {
    Ok(Json(records::list_sites().await?))
}

async fn get_site_by_id(Path(site_id): Path<String>) -> Result<Json<Site>> {
    let site = records::find_site(&site_id)
        .await?
        .ok_or(ResponseError::not_found("Site not found"))?;
    Ok(Json(site))
}

async fn list_cities() -> Result<Json<Vec<City>>> {
    Ok(Json(records::list_cities().await?))
}

async fn get_city_by_id(Path(city_id): Path<String>) -> Result<Json<City>> {
    let city = records::find_city(&city_id)
        .await?
        .ok_or(ResponseError::not_found("City not found"))?;
    Ok(Json(city))
}

#[derive(Deserialize, Debug)]
struct NearbyParams {
    lat: Option<String>,
    lng: Option<String>,
    radius: Option<String>,
}

#[instrument]
async fn find_nearby(Query(params): Query<NearbyParams>) -> Result<Json<PlaceSet>> {
    let (Some(lat), Some(lng)) = (
        parse_coord(params.lat.as_deref()),
        parse_coord(params.lng.as_deref()),
    ) else {
        return Err(ResponseError::bad_request("lat and lng are required numbers"));
    };
    let radius = parse_radius(params.radius.as_deref())
        .ok_or(ResponseError::bad_request("radius must be a number"))?;

    let response = get_reqwest_client()?
        .post(get_overpass_url()?)
        .header(CONTENT_TYPE, "text/plain")
        .body(overpass_query(lat, lng, radius))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ResponseError::bad_gateway(status));
    }

    let data: OverpassResponse = response.json().await?;
    let places = places_from(data.elements);

    Ok(Json(PlaceSet {
        center: Center { lat, lng },
        radius,
        count: places.len(),
        places,
    }))
}
