use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request, header},
    middleware::{self, Next},
    response::Response,
    routing,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
};

const DEFAULT_PORT: &str = "8080";
const DEFAULT_DIST_DIR: &str = "../dist";

async fn healthz() -> &'static str {
    "ok"
}

fn app(dist_dir: &str) -> Router {
    // Unknown paths get the gadget page; yay.html is served as a plain file
    let static_files = ServeDir::new(dist_dir)
        .not_found_service(ServeFile::new(format!("{dist_dir}/index.html")));

    Router::new()
        .route("/healthz", routing::get(healthz))
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new().br(true).gzip(true))
                .layer(middleware::from_fn(cache_control)),
        )
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let dist_dir = std::env::var("DIST_DIR").unwrap_or_else(|_| DEFAULT_DIST_DIR.to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
    let addr = format!("0.0.0.0:{port}");
    tracing::info!("Serving {dist_dir} on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(&dist_dir)).await
}

async fn cache_control(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path().to_owned(); // <- avoid borrowing req
    let mut res = next.run(req).await;

    res.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_policy(&path)),
    );
    res
}

fn cache_policy(path: &str) -> &'static str {
    // HTML (index and the success page): always revalidate
    if path == "/" || path.ends_with(".html") {
        return "no-cache, must-revalidate";
    }

    // Assets:
    //    - If fingerprinted: cache "forever"
    //    - Otherwise: cache, but always revalidate
    if is_fingerprinted_asset(path) {
        "public, max-age=31536000, immutable"
    } else {
        "public, max-age=0, must-revalidate"
    }
}

// Heuristic: treat "foo.<hash>.wasm/js/css" as fingerprinted.
fn is_fingerprinted_asset(path: &str) -> bool {
    let file = path.rsplit('/').next().unwrap_or(path);
    let mut parts = file.split('.');

    // need at least name.hash.ext  => 3 parts minimum
    let (Some(_name), Some(hash), Some(_ext)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    hash.len() >= 8 && hash.chars().all(|c| c.is_ascii_hexdigit())
}
