//! Conversion endpoint handlers

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CategoryUnitsResponse, ConvertRequestBody, ConvertResponse, Json, UnitsResponse,
};
use crate::domain::UnitCategory;

/// Create the conversion API router
pub fn create_convert_router() -> Router<AppState> {
    Router::new()
        .route("/convert/{category}", post(convert_units))
        .route("/units", get(list_units))
        .route("/units/{category}", get(get_category_units))
}

/// POST /api/convert/{category}
pub async fn convert_units(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(body): Json<ConvertRequestBody>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let category: UnitCategory = category.parse()?;
    debug!(category = %category, "Converting units");

    let outcome = state.conversion_service.convert(category, &body.into())?;

    Ok(Json(ConvertResponse::from(outcome)))
}

/// GET /api/units
pub async fn list_units() -> Json<UnitsResponse> {
    Json(UnitsResponse::all())
}

/// GET /api/units/{category}
pub async fn get_category_units(
    Path(category): Path<String>,
) -> Result<Json<CategoryUnitsResponse>, ApiError> {
    let category: UnitCategory = category.parse()?;
    Ok(Json(CategoryUnitsResponse::for_category(category)))
}
