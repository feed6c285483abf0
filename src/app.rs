use axum::{response::Html, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::{domains::forms::rest::form_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods(Any)
    .allow_headers(Any);

  Router::new()
    .route("/", get(hello_world_handler))
    .nest("/api", form_routes())
    .layer(cors)
    .with_state(state)
}

pub async fn hello_world_handler() -> Html<String> {
  Html("<h1>NEXA form relay is running</h1>".to_string())
}
