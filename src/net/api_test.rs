use std::future::Future;

use super::*;

// =============================================================
// api_path prefixing
// =============================================================

#[test]
fn api_path_prefixes_relative_paths() {
    assert_eq!(api_path("/products"), "/api/products");
    assert_eq!(api_path("/cart/items/7"), "/api/cart/items/7");
}

#[test]
fn api_path_passes_through_prefixed_paths() {
    assert_eq!(api_path("/api/products"), "/api/products");
}

#[test]
fn api_path_is_idempotent() {
    let once = api_path("/auth/login");
    assert_eq!(api_path(&once), once);
}

// =============================================================
// status_error mapping
// =============================================================

#[test]
fn status_error_uses_server_message() {
    let body = serde_json::json!({ "success": false, "message": "Invalid credentials" });
    let err = status_error(401, &body);
    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            message: "Invalid credentials".to_owned()
        }
    );
}

#[test]
fn status_error_falls_back_to_generic_message() {
    let err = status_error(500, &serde_json::Value::Null);
    assert_eq!(err.message(), "HTTP error: 500");
}

#[test]
fn status_error_ignores_empty_server_message() {
    let body = serde_json::json!({ "message": "" });
    assert_eq!(status_error(400, &body).message(), "HTTP error: 400");
}

#[test]
fn status_error_ignores_non_string_message() {
    let body = serde_json::json!({ "message": 42 });
    assert_eq!(status_error(400, &body).message(), "HTTP error: 400");
}

// =============================================================
// ApiError display
// =============================================================

#[test]
fn api_error_display_matches_message() {
    let err = ApiError::Api {
        message: "Checkout failed".to_owned(),
    };
    assert_eq!(err.to_string(), "Checkout failed");
    assert_eq!(err.message(), "Checkout failed");

    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "connection refused");
}

// =============================================================
// Method
// =============================================================

#[test]
fn method_names_match_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

// =============================================================
// SSR stubs
// =============================================================

// Without the hydrate feature every endpoint resolves to a transport
// error instead of panicking, mirroring how pages degrade during SSR.
#[test]
fn call_is_stubbed_off_browser() {
    let result = futures_executor_block_on(call("/products", Method::Get, None));
    assert!(matches!(result, Err(ApiError::Network(_))));
}

// Minimal single-future executor so the stub can be driven without an
// async runtime dependency in dev-dependencies.
fn futures_executor_block_on<F: Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    struct Noop;
    impl Wake for Noop {
        fn wake(self: Arc<Self>) {}
    }

    let waker = Waker::from(Arc::new(Noop));
    let mut cx = Context::from_waker(&waker);
    let mut fut = pin!(fut);
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
