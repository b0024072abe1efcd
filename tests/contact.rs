use axum::http::StatusCode;
use serde_json::json;

mod helpers;

#[tokio::test]
async fn test_contact_page_lists_subjects() -> anyhow::Result<()> {
    let response = helpers::get("/contact").await?;
    assert_eq!(response.status(), StatusCode::OK);

    let html = helpers::body_string(response).await?;

    assert!(html.contains("<option value=\"Event Booking\""));
    assert!(html.contains("Meadowbrook Test Farm"));

    Ok(())
}

#[tokio::test]
async fn test_contact_form_success_shows_reference() -> anyhow::Result<()> {
    let response = helpers::post_form(
        "/contact",
        &[
            ("name", "Jordan"),
            ("email", "jordan@example.com"),
            ("subject", "Farm Stay"),
            ("message", "Is the cabin free the first week of July?"),
        ],
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let html = helpers::body_string(response).await?;

    assert!(html.contains("Thank you, Jordan"));
    assert!(html.contains("Your reference"));

    Ok(())
}

#[tokio::test]
async fn test_contact_form_errors_keep_input() -> anyhow::Result<()> {
    let response = helpers::post_form(
        "/contact",
        &[
            ("name", ""),
            ("email", "jordan@"),
            ("message", "Hello there"),
        ],
    )
    .await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = helpers::body_string(response).await?;

    assert!(html.contains("Please tell us your name"));
    assert!(html.contains("Please enter a valid email address"));
    assert!(html.contains("value=\"jordan@\""));
    assert!(html.contains("Hello there"));

    Ok(())
}

#[tokio::test]
async fn test_contact_api_success() -> anyhow::Result<()> {
    let response = helpers::post_json(
        "/api/contact",
        json!({
            "name": "Jordan",
            "email": "jordan@example.com",
            "phone": "555-0100",
            "subject": "Group Visit",
            "message": "We are a school group of 24.",
        }),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = helpers::body_json(response).await?;

    assert_eq!(body["success"], true);
    assert_eq!(body["reference"].as_str().map(str::len), Some(26));

    Ok(())
}

#[tokio::test]
async fn test_contact_api_reports_field_errors() -> anyhow::Result<()> {
    let response = helpers::post_json(
        "/api/contact",
        json!({
            "name": "Jordan",
            "email": "jordan@example.com",
            "subject": "Free Tractor",
            "message": "",
        }),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = helpers::body_json(response).await?;

    assert_eq!(body["success"], false);
    assert!(body["errors"]["subject"].is_string());
    assert!(body["errors"]["message"].is_string());
    assert!(body["errors"].get("name").is_none());

    Ok(())
}
