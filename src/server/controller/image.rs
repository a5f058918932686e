use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::api::ErrorDto,
    server::{error::Error, model::app::AppState},
};

pub static IMAGE_TAG: &str = "image";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ImageSizeParams {
    /// Target width in pixels
    pub w: Option<u32>,
    /// Target height in pixels
    pub h: Option<u32>,
}

/// Redirect to the CDN URL of an image asset
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects to the resolved, optionally sized, image URL
/// - 404 (Not Found): The reference is not a well-formed image asset ID, or no image
///   project is configured
#[utoipa::path(
    get,
    path = "/api/images/{asset_ref}",
    tag = IMAGE_TAG,
    params(
        ("asset_ref" = String, Path, description = "Image asset ID, e.g. image-<hash>-2000x3000-jpg"),
        ImageSizeParams,
    ),
    responses(
        (status = 307, description = "Redirect to the image URL"),
        (status = 404, description = "Malformed image asset ID or no image project", body = ErrorDto),
    ),
)]
pub async fn get_image(
    State(state): State<AppState>,
    Path(asset_ref): Path<String>,
    Query(size): Query<ImageSizeParams>,
) -> Result<impl IntoResponse, Error> {
    let Some(url) = state.content.resolve_asset_url(&asset_ref, size.w, size.h) else {
        tracing::warn!("Could not resolve image reference {:?}", asset_ref);

        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: format!("No image asset with ID {:?}", asset_ref),
            }),
        )
            .into_response());
    };

    Ok(Redirect::temporary(&url).into_response())
}
