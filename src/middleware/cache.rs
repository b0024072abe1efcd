use axum::{
    body::Body,
    http::{HeaderValue, Method, Request, Response, header},
    middleware::Next,
};

/// Pages that render the same for every visitor
const CACHEABLE_PAGES: &[&str] = &["/", "/plan", "/contact"];

/// Middleware to set cache control headers
/// - Static pages fetched with GET: short public caching
/// - Form results, API responses and everything else: never cached
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let cacheable = req.method() == Method::GET && CACHEABLE_PAGES.contains(&req.uri().path());
    let mut response = next.run(req).await;

    let success = response.status().is_success();
    let headers = response.headers_mut();

    if cacheable && success {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=300"),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    }

    response
}
