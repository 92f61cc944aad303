#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use brightline::app::*;
    use brightline::core::config::Config;
    use brightline::core::demo::{DemoApiState, demo_api_router};
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load application config from environment variables
    let config = Config::from_env();

    tracing::info!(
        "Config loaded: demo_webhook={}, webhook_timeout={:?}",
        config.has_demo_webhook(),
        config.demo_webhook_timeout
    );

    let demo_state = match DemoApiState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to set up demo request handling: {}", e);
            std::process::exit(1);
        }
    };

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    // Serves .br (brotli) and .gz (gzip) files automatically
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = Router::new()
        // POST /api/schedule-demo
        .merge(demo_api_router(demo_state))
        // Leptos routes (merged last so API routes take precedence)
        .merge(leptos_router)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);
    log!("Demo API: http://{}/api/schedule-demo", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
