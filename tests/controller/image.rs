//! Tests for the image redirect endpoint.

use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};
use game_guides::server::{
    config::{Config, ContentSource},
    controller::image::{get_image, ImageSizeParams},
    model::app::AppState,
    startup::build_query_client,
};

use super::*;

/// Expected: 307 Temporary Redirect to the sized CDN URL, with no store request
#[tokio::test]
async fn redirects_to_cdn() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_image(
        State(test.into_app_state()),
        Path("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg".to_string()),
        Query(ImageSizeParams {
            w: Some(400),
            h: Some(300),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
        Some("https://cdn.sanity.io/images/testproject/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg?w=400&h=300")
    );

    Ok(())
}

/// Expected: 404 Not Found for a reference that is not an image asset ID
#[tokio::test]
async fn malformed_reference_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_image(
        State(test.into_app_state()),
        Path("file-abc-pdf".to_string()),
        Query(ImageSizeParams { w: None, h: None }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: 404 Not Found when the fallback source has no image project
#[tokio::test]
async fn fallback_without_project_not_found() {
    let config = Config {
        content_source: ContentSource::Fallback {
            image_project_id: None,
            image_dataset: "production".to_string(),
        },
    };
    let content = build_query_client(&config).expect("Failed to build query client");

    let resp = get_image(
        State(AppState { content }),
        Path("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg".to_string()),
        Query(ImageSizeParams { w: None, h: None }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().get(LOCATION).is_none());
}
