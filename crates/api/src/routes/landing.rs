//! Root landing page announcing the service is up.

use axum::extract::State;
use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

/// GET / -- static status card with the listen port and endpoint list.
async fn landing(State(state): State<AppState>) -> Html<String> {
    let port = state.config.port;
    Html(format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>Yapp API - Service Status</title>
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <style>
      body {{ margin: 0; font-family: system-ui, sans-serif; background: #0f172a; color: #e5e7eb;
             display: flex; align-items: center; justify-content: center; min-height: 100vh; }}
      .card {{ background: #111827; border-radius: 1rem; padding: 1.8rem 2rem; max-width: 540px;
              border: 1px solid rgba(148, 163, 184, 0.25); }}
      .badge {{ border-radius: 999px; padding: 0.25rem 0.7rem; font-size: 0.8rem;
               background: rgba(22, 163, 74, 0.18); color: #bbf7d0; border: 1px solid #16a34a; }}
      p {{ color: #9ca3af; }}
      code {{ font-family: ui-monospace, monospace; }}
    </style>
  </head>
  <body>
    <main class="card">
      <span class="badge">API Online</span>
      <h1>Yapp API Service</h1>
      <p>The items backend is running on <code>PORT={port}</code>.</p>
      <p>All API routes live under <code>/api</code>.</p>
      <p>
        Health endpoint: <code>GET /api/health</code><br/>
        Items endpoints: <code>GET /api/items</code>, <code>POST /api/items</code>,
        <code>DELETE /api/items/{{id}}</code>
      </p>
    </main>
  </body>
</html>
"#
    ))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(landing))
}
