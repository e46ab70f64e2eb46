use axum::{
    extract::{ConnectInfo, State},
    http::header::HeaderMap,
    response::Html,
};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::ip::{extract_candidate_ip, normalize_ip, reverse_octets};
use crate::storage::Storage;

pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

/// Show the caller's IP and its octet-reversed form, recording both.
///
/// A persistence failure is logged and the page is rendered anyway: the
/// response depends only on the computed strings, so the caller still gets
/// a 200 while the failed insert shows up in the logs.
pub async fn show_reversed_ip(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Html<String> {
    let candidate = extract_candidate_ip(&headers, addr);
    let client_ip = normalize_ip(&candidate);
    let reversed_ip = reverse_octets(&client_ip);

    if let Err(err) = state.storage.record(&client_ip, &reversed_ip).await {
        tracing::warn!(ip = %client_ip, error = %err, "failed to record ip observation");
    }

    Html(render_page(&client_ip, &reversed_ip))
}

fn render_page(client_ip: &str, reversed_ip: &str) -> String {
    format!(
        r#"<html>
    <head>
        <title>IP Reverse</title>
        <style>
            body {{
                background-color: #000000;
                color: #008000; /* Deep Green */
                font-family: monospace;
            }}
            .container {{
                display: flex;
                flex-direction: column;
                justify-content: center;
                align-items: center;
                height: 100vh;
            }}
            h1, h2 {{
                margin: 0.5em;
            }}
        </style>
    </head>
    <body>
        <div class="container">
            <h1>Original IP: {client_ip}</h1>
            <h2>Reversed IP: {reversed_ip}</h2>
        </div>
    </body>
</html>
"#
    )
}
