//! Request handlers, one per route.

use axum::Json;
use axum::extract::{Form, Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::repos::CreateCafeParams;
use crate::domain::entities::CafeRecord;

use super::ApiState;
use super::error::{ApiError, cafe_error_to_api};

const WELCOME_MESSAGE: &str = "Welcome to Cafe API!";
const MISSING_LOCATION_MESSAGE: &str = "Location parameter \"loc\" is required";
const MISSING_PRICE_MESSAGE: &str = "New price is required.";
const CAFE_ADDED_MESSAGE: &str = "Successfully added the new cafe.";
const PRICE_UPDATED_MESSAGE: &str = "Successfully updated the coffee price.";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub loc: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePriceQuery {
    pub new_price: Option<String>,
}

/// Fields accepted by `/add`. Everything arrives as form text; the
/// amenity flags are strings compared against the literal `"True"`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddCafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_sockets: Option<String>,
    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub can_take_calls: Option<String>,
    pub coffee_price: Option<String>,
}

#[derive(Debug, Serialize)]
struct SuccessBody {
    success: &'static str,
}

#[derive(Debug, Serialize)]
struct AddCafeResponse {
    response: SuccessBody,
}

pub async fn home() -> &'static str {
    WELCOME_MESSAGE
}

pub async fn random_cafe(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let cafe = state.cafes.random().await.map_err(cafe_error_to_api)?;
    Ok(cafe_or_empty(cafe))
}

pub async fn all_cafes(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let cafes = state.cafes.list_all().await.map_err(cafe_error_to_api)?;
    Ok(Json(cafes))
}

pub async fn search_cafes(
    State(state): State<ApiState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let location = match query.loc.as_deref() {
        Some(location) if !location.is_empty() => location,
        _ => return Err(ApiError::validation(MISSING_LOCATION_MESSAGE)),
    };

    let cafes = state
        .cafes
        .search_by_location(location)
        .await
        .map_err(cafe_error_to_api)?;

    Ok(Json(cafes))
}

pub async fn add_cafe(
    State(state): State<ApiState>,
    Form(form): Form<AddCafeForm>,
) -> Result<impl IntoResponse, ApiError> {
    let params = CreateCafeParams {
        name: require_field(form.name, "name")?,
        map_url: require_field(form.map_url, "map_url")?,
        img_url: require_field(form.img_url, "img_url")?,
        location: require_field(form.location, "location")?,
        seats: require_field(form.seats, "seats")?,
        has_toilet: parse_form_flag(&form.has_toilet),
        has_wifi: parse_form_flag(&form.has_wifi),
        has_sockets: parse_form_flag(&form.has_sockets),
        can_take_calls: parse_form_flag(&form.can_take_calls),
        coffee_price: form.coffee_price,
    };

    state.cafes.add_cafe(params).await.map_err(cafe_error_to_api)?;

    Ok(Json(AddCafeResponse {
        response: SuccessBody {
            success: CAFE_ADDED_MESSAGE,
        },
    }))
}

pub async fn update_price(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Query(query): Query<UpdatePriceQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let new_price = match query.new_price.as_deref() {
        Some(price) if !price.is_empty() => price,
        _ => return Err(ApiError::validation(MISSING_PRICE_MESSAGE)),
    };

    state
        .cafes
        .update_price(id, new_price)
        .await
        .map_err(cafe_error_to_api)?;

    Ok(Json(SuccessBody {
        success: PRICE_UPDATED_MESSAGE,
    }))
}

pub async fn db_health(State(state): State<ApiState>) -> Response {
    super::db_health_response(state.db.health_check().await)
}

/// The legacy contract serializes "no cafe" as `{}` rather than `null`.
fn cafe_or_empty(cafe: Option<CafeRecord>) -> Response {
    match cafe {
        Some(cafe) => Json(cafe).into_response(),
        None => Json(Value::Object(Map::new())).into_response(),
    }
}

fn require_field(value: Option<String>, field: &'static str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::validation(format!("Form field \"{field}\" is required")))
}

/// Only the exact literal `"True"` counts as set; `"true"`, `"1"`, and a
/// missing field all read as false. Legacy form clients depend on this.
fn parse_form_flag(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some("True"))
}
