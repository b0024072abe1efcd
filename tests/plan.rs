use axum::http::{StatusCode, header};
use serde_json::json;

mod helpers;

#[tokio::test]
async fn test_plan_page_lists_every_interest() -> anyhow::Result<()> {
    let response = helpers::get("/plan").await?;
    assert_eq!(response.status(), StatusCode::OK);

    let html = helpers::body_string(response).await?;

    for field in ["hiking", "swimming", "market", "festiveParty", "relaxedPicnic"] {
        assert!(html.contains(&format!("name=\"{field}\"")), "missing {field}");
    }
    assert!(!html.contains("id=\"recommendations\""));

    Ok(())
}

#[tokio::test]
async fn test_plan_form_renders_recommendations_in_canonical_order() -> anyhow::Result<()> {
    let response = helpers::post_form(
        "/plan",
        &[
            ("name", "Casey"),
            ("vibe", "adventurous"),
            ("group", "friends"),
            ("swimming", "on"),
            ("hiking", "on"),
        ],
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let html = helpers::body_string(response).await?;

    assert!(html.contains("A adventurous day for friends, including Hiking, Swimming."));

    let trail = html.find("Trail Head").expect("trail head rendered");
    let pool = html.find("Swimming Pool").expect("pool rendered");
    assert!(trail < pool);

    // the form keeps the visitor's answers
    assert!(html.contains("value=\"Casey\""));
    assert!(html.contains("<option value=\"adventurous\" selected>"));

    Ok(())
}

#[tokio::test]
async fn test_plan_form_tolerates_tampered_values() -> anyhow::Result<()> {
    let response = helpers::post_form(
        "/plan",
        &[("vibe", "ecstatic"), ("group", "1 OR 1=1"), ("unknown", "on")],
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let html = helpers::body_string(response).await?;

    assert!(html.contains("A relaxing day for family, including a mix of activities."));

    Ok(())
}

#[tokio::test]
async fn test_plan_form_keeps_first_of_repeated_fields() -> anyhow::Result<()> {
    let response = helpers::post_form(
        "/plan",
        &[("vibe", "celebratory"), ("vibe", "bogus"), ("hiking", "on")],
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let html = helpers::body_string(response).await?;

    assert!(html.contains("A celebratory day for family, including Hiking."));

    Ok(())
}

#[tokio::test]
async fn test_plan_api_tolerates_wrong_json_types() -> anyhow::Result<()> {
    let response = helpers::post_json(
        "/api/plan",
        json!({ "vibe": 7, "group": null, "interests": ["hiking", 3] }),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = helpers::body_json(response).await?;

    assert_eq!(
        body["summary"],
        "A relaxing day for family, including Hiking."
    );

    let response = helpers::post_json("/api/plan", json!({ "interests": "hiking" })).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = helpers::body_json(response).await?;

    assert_eq!(body["recommendations"][0]["title"], "Trail Head");

    let response = helpers::post_json("/api/plan", json!("celebratory")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = helpers::body_json(response).await?;

    assert_eq!(
        body["summary"],
        "A relaxing day for family, including a mix of activities."
    );

    Ok(())
}

#[tokio::test]
async fn test_plan_api_returns_bonus_then_fallback() -> anyhow::Result<()> {
    let response = helpers::post_json(
        "/api/plan",
        json!({ "name": "Casey", "vibe": "celebratory", "group": "friends" }),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
        Some(&b"no-store, no-cache, must-revalidate"[..])
    );

    let body = helpers::body_json(response).await?;

    assert_eq!(
        body["summary"],
        "A celebratory day for friends, including a mix of activities."
    );

    let titles = body["recommendations"]
        .as_array()
        .expect("recommendations array")
        .iter()
        .map(|r| r["title"].as_str().unwrap_or_default().to_owned())
        .collect::<Vec<_>>();

    assert_eq!(
        titles,
        [
            "Party-Ready Spaces",
            "Celebration Lawn",
            "Trail Head",
            "Picnic Spots"
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_plan_api_ignores_unknown_interests() -> anyhow::Result<()> {
    let response = helpers::post_json(
        "/api/plan",
        json!({ "interests": ["market", "bungee", "market"] }),
    )
    .await?;

    let body = helpers::body_json(response).await?;

    assert_eq!(
        body["summary"],
        "A relaxing day for family, including Market."
    );
    assert_eq!(body["recommendations"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["recommendations"][0]["link"], "/#market");

    Ok(())
}
