use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::database::ActivityRegistry;
use crate::error::{ApiError, ApiResult};
use crate::models::{ActivityCatalog, SignupConfirmation};
use crate::services::activities_service;

pub async fn activities_handler(State(registry): State<ActivityRegistry>) -> Json<ActivityCatalog> {
    Json(activities_service::list_activities(&registry).await)
}

/// Last value wins when a key is repeated.
fn last_query_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    State(registry): State<ActivityRegistry>,
) -> ApiResult<Json<SignupConfirmation>> {
    let Path(activity_name) = path.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let Query(pairs) = query.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

    let email = last_query_value(&pairs, "email").ok_or(ApiError::MissingParameter("email"))?;
    let confirmation =
        activities_service::signup_for_activity(&registry, &activity_name, &email).await?;
    Ok(Json(confirmation))
}
