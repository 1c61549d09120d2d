use std::net::SocketAddr;

use axum::{routing::get, Json, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    app::{shell, App},
    content::{audit, snapshot, Snapshot, PROJECTS, SOCIAL_LINKS},
};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("couldn't load leptos configuration: {0}")]
    Config(String),
    #[error("couldn't bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// `RUST_LOG` wins over the built-in filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio=info,tower_http=info,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

async fn content_json() -> Json<Snapshot> {
    Json(snapshot())
}

/// Non-page routes, merged ahead of the Leptos routes.
fn api_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/content.json", get(content_json))
}

pub async fn serve() -> Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    for warning in audit(SOCIAL_LINKS, PROJECTS) {
        tracing::warn!(%warning, "content check");
    }

    let app = api_routes()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_content_json() {
        let res = api_routes::<()>()
            .oneshot(
                Request::get("/content.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["profile"]["name"], "Subhash Chandra");
        assert_eq!(value["projects"][2]["tags"][0], "Python");
    }
}
