//! Route registration that remembers what it registered.
//!
//! Every route added through [`Sitemap`] is also recorded as an
//! [`Endpoint`], and `GET /` serves the recorded list for discovery.

use std::sync::Arc;

use axum::handler::Handler;
use axum::routing::{self, MethodRouter};
use axum::{Json, Router};
use serde::Serialize;

/// A registered method + path pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
struct Listing {
    endpoints: Vec<Endpoint>,
}

/// A [`Router`] under construction plus the endpoints registered on it.
pub struct Sitemap<S> {
    router: Router<S>,
    endpoints: Vec<Endpoint>,
}

impl<S> Default for Sitemap<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self {
            router: Router::new(),
            endpoints: Vec::new(),
        }
    }
}

impl<S> Sitemap<S>
where
    S: Clone + Send + Sync + 'static,
{
    #[must_use]
    pub fn get<H, T>(self, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.add("GET", path, routing::get(handler))
    }

    #[must_use]
    pub fn post<H, T>(self, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.add("POST", path, routing::post(handler))
    }

    #[must_use]
    pub fn delete<H, T>(self, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.add("DELETE", path, routing::delete(handler))
    }

    /// Endpoints registered so far, in registration order.
    #[must_use]
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Register `GET /` serving the listing and return the finished router.
    ///
    /// The listing is frozen at this point and includes `/` itself.
    #[must_use]
    pub fn into_router(self) -> Router<S> {
        let mut endpoints = self.endpoints;
        endpoints.insert(0, Endpoint { method: "GET", path: "/" });
        let listing = Arc::new(Listing { endpoints });

        self.router.route(
            "/",
            routing::get(move || {
                let listing = Arc::clone(&listing);
                async move { Json(listing.as_ref().clone()) }
            }),
        )
    }

    // Same-path registrations are merged by axum, so `get` and `post` on one
    // path can be added separately.
    fn add(mut self, method: &'static str, path: &'static str, route: MethodRouter<S>) -> Self {
        self.router = self.router.route(path, route);
        self.endpoints.push(Endpoint { method, path });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn ok() -> &'static str {
        "ok"
    }

    #[test]
    fn should_record_endpoints_in_registration_order() {
        let sitemap = Sitemap::<()>::default()
            .get("/people", ok)
            .post("/people", ok)
            .delete("/favorite/planet/{planet_id}", ok);

        assert_eq!(
            sitemap.endpoints(),
            [
                Endpoint { method: "GET", path: "/people" },
                Endpoint { method: "POST", path: "/people" },
                Endpoint { method: "DELETE", path: "/favorite/planet/{planet_id}" },
            ]
        );
    }

    #[tokio::test]
    async fn should_serve_listing_at_root() {
        let app = Sitemap::<()>::default()
            .get("/planet", ok)
            .into_router();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"endpoints": [
                {"method": "GET", "path": "/"},
                {"method": "GET", "path": "/planet"},
            ]})
        );
    }

    #[tokio::test]
    async fn should_serve_both_methods_registered_on_one_path() {
        let app = Sitemap::<()>::default()
            .get("/people", ok)
            .post("/people", ok)
            .into_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/people")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
