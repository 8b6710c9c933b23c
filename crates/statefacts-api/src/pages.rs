//! Static HTML pages and the unmatched-route fallback.
//!
//! Both pages are embedded in the binary, so the server has no runtime
//! dependency on a views directory.

use axum::http::header::ACCEPT;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>US States API</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; margin-bottom: 0.25rem; }
        .subtitle { color: #8b949e; margin-top: 0; }
        a { color: #58a6ff; text-decoration: none; }
        a:hover { text-decoration: underline; }
        ul { list-style: none; padding: 0; }
        li { padding: 0.3rem 0; }
        .verb { color: #7ee787; font-weight: bold; display: inline-block; min-width: 4.5rem; }
        hr { border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }
    </style>
</head>
<body>
    <h1>US States API</h1>
    <p class="subtitle">Reference facts about the 50 states, plus fun facts you can edit</p>

    <hr>

    <h2>Endpoints</h2>
    <ul>
        <li><span class="verb">GET</span><a href="/states">/states</a> -- All states (?contig=true|false)</li>
        <li><span class="verb">GET</span><a href="/states/KS">/states/:state</a> -- One state with its fun facts</li>
        <li><span class="verb">GET</span><a href="/states/KS/capital">/states/:state/capital</a></li>
        <li><span class="verb">GET</span><a href="/states/KS/nickname">/states/:state/nickname</a></li>
        <li><span class="verb">GET</span><a href="/states/KS/population">/states/:state/population</a></li>
        <li><span class="verb">GET</span><a href="/states/KS/admission">/states/:state/admission</a></li>
        <li><span class="verb">GET</span><a href="/states/KS/funfact">/states/:state/funfact</a> -- A random fun fact</li>
        <li><span class="verb">POST</span>/states/:state/funfact -- <code>{"funfacts": ["..."]}</code></li>
        <li><span class="verb">PATCH</span>/states/:state/funfact -- <code>{"index": 1, "funfact": "..."}</code></li>
        <li><span class="verb">DELETE</span>/states/:state/funfact -- <code>{"index": 1}</code></li>
    </ul>
</body>
</html>"#;

const NOT_FOUND_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>404 Not Found</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        h1 { color: #f85149; }
        a { color: #58a6ff; text-decoration: none; }
    </style>
</head>
<body>
    <h1>404 Not Found</h1>
    <p>Nothing lives here. Try the <a href="/">API index</a>.</p>
</body>
</html>"#;

/// Serve the API index page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Fallback for unmatched routes.
///
/// Clients that accept `application/json` get `{"error": "404 Not Found"}`;
/// everyone else gets the HTML page. Both use status 404.
pub async fn not_found(headers: HeaderMap) -> Response {
    let wants_json = headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.contains("application/json"));

    if wants_json {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "404 Not Found" })),
        )
            .into_response()
    } else {
        (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response()
    }
}
