use axum::http::{StatusCode, header};

use crate::tests::common::{
    body_json, body_string, create_test_app, create_test_app_with, get, header_str, location,
    test_config, test_config_with_static,
};

#[tokio::test]
async fn test_root_without_cookie_redirects_to_default() {
    let app = create_test_app();

    let response = get(&app, "/", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/en"));
}

#[tokio::test]
async fn test_root_with_cookie_redirects_to_preference() {
    let app = create_test_app();

    let response = get(&app, "/", Some("NEXT_LOCALE=ar")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/ar"));
}

#[tokio::test]
async fn test_path_with_cookie_redirects_under_preference() {
    let app = create_test_app();

    let response = get(&app, "/about", Some("theme=dark; NEXT_LOCALE=ar")).await;
    assert_eq!(location(&response), Some("/ar/about"));

    let response = get(&app, "/foo/bar", Some("NEXT_LOCALE=ar")).await;
    assert_eq!(location(&response), Some("/ar/foo/bar"));
}

#[tokio::test]
async fn test_invalid_cookie_is_treated_as_no_preference() {
    let app = create_test_app();

    let response = get(&app, "/foo", Some("NEXT_LOCALE=klingon")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/en/foo"));
}

#[tokio::test]
async fn test_redirect_preserves_query_and_writes_no_cookie() {
    let app = create_test_app();

    let response = get(&app, "/brands/rest-2?utm=mail", Some("NEXT_LOCALE=ar")).await;
    assert_eq!(location(&response), Some("/ar/brands/rest-2?utm=mail"));
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_locale_prefixed_path_passes_through() {
    let app = create_test_app();

    let response = get(&app, "/ar/brands/rest-1", Some("NEXT_LOCALE=en")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
}

#[tokio::test]
async fn test_unknown_page_under_locale_is_not_redirected() {
    let app = create_test_app();

    let response = get(&app, "/ar/about", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(location(&response).is_none());

    // Error text is in the request's locale.
    let body = body_json(response).await;
    assert_eq!(body["code"], 3001);
    assert!(body["message"].as_str().unwrap().contains("الصفحة"));
}

#[tokio::test]
async fn test_following_redirect_reaches_page() {
    let app = create_test_app();

    let first = get(&app, "/", Some("NEXT_LOCALE=ar")).await;
    let target = location(&first).unwrap().to_string();

    let second = get(&app, &target, Some("NEXT_LOCALE=ar")).await;
    assert_eq!(second.status(), StatusCode::OK);

    // A second pass through the gatekeeper takes no action.
    let third = get(&app, &target, None).await;
    assert_eq!(third.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_api_paths_are_never_redirected() {
    let app = create_test_app();

    for cookie in [None, Some("NEXT_LOCALE=ar"), Some("NEXT_LOCALE=xx")] {
        let response = get(&app, "/api/mock-data", cookie).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(location(&response).is_none());
    }
}

#[tokio::test]
async fn test_static_assets_are_never_redirected() {
    let app = create_test_app_with(test_config_with_static());

    let response = get(&app, "/_static/site.css", Some("NEXT_LOCALE=ar")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header_str(&response, header::CONTENT_TYPE).unwrap().starts_with("text/css"));

    let response = get(&app, "/_static/missing.png", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&app, "/favicon.ico", None).await;
    assert!(location(&response).is_none());
}

#[tokio::test]
async fn test_configured_default_locale() {
    let mut config = test_config();
    config.locale.default_locale = crate::models::Locale::Ar;
    let app = create_test_app_with(config);

    let response = get(&app, "/", None).await;
    assert_eq!(location(&response), Some("/ar"));

    let response = get(&app, "/", Some("NEXT_LOCALE=en")).await;
    assert_eq!(location(&response), Some("/en"));
}

#[tokio::test]
async fn test_api_error_messages_follow_cookie_locale() {
    let app = create_test_app();

    let response = get(&app, "/api/locale/switch?to=fr", Some("NEXT_LOCALE=ar")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 4003);
    assert!(body["message"].as_str().unwrap().contains("لغة"));

    let response = get(&app, "/api/locale/switch?to=fr", None).await;
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().starts_with("Unsupported language"));
}
