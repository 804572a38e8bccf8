use anyhow::Context;
use axum::{extract::ws::WebSocketUpgrade, response::Html, routing::get, Router};
use dotenvy::dotenv;
use indoc::formatdoc;

use super::app::app;

/// Serves the portal: `/` returns the page shell, `/ws` upgrades to the
/// liveview socket that drives it. `LISTEN_ADDR` picks the bind address;
/// `REACHABLE_ADDR` is what the browser dials back (set it when running
/// behind a proxy) and defaults to the listen address.
pub async fn start_server() -> anyhow::Result<()> {
    dotenv().ok();
    let listen_addr =
        std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:3030".to_string());
    let reachable_addr = std::env::var("REACHABLE_ADDR").unwrap_or_else(|_| listen_addr.clone());

    let addr: std::net::SocketAddr = listen_addr
        .parse()
        .with_context(|| format!("LISTEN_ADDR is not a socket address: {listen_addr}"))?;

    let view = dioxus_liveview::LiveViewPool::new();

    let app = Router::new()
        .route(
            "/",
            get(move || async move { Html(index_page(&reachable_addr)) }),
        )
        .route(
            "/ws",
            get(move |ws: WebSocketUpgrade| async move {
                ws.on_upgrade(move |socket| async move {
                    _ = view.launch(dioxus_liveview::axum_socket(socket), app).await;
                })
            }),
        );

    tracing::info!("Listening on http://{addr}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("server exited")?;

    Ok(())
}

fn index_page(reachable_addr: &str) -> String {
    formatdoc!(
        r#"
        <!DOCTYPE html>
        <html>
            <head>
                <title>CampusAI</title>
                <meta charset="utf-8">
                <meta name="viewport"
                content="width=device-width,
                initial-scale=1,
                minimum-scale=1,
                maximum-scale=1,
                user-scalable=no">
            </head>
            <body> <div id="main"></div> </body>
            {glue}
        </html>
        "#,
        glue = dioxus_liveview::interpreter_glue(&format!("ws://{reachable_addr}/ws"))
    )
}
