//! Message Desk server binary.
//!
//! Wires the in-memory message store into the application handlers and
//! serves the message API.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use message_desk::adapters::http::{cors_layer, message_routes, timeout_layer, MessageHandlers};
use message_desk::adapters::InMemoryMessageStore;
use message_desk::application::handlers::message::{
    CreateMessageHandler, DeleteMessageHandler, GetMessageHandler, ListMessagesHandler,
    UpdateMessageHandler,
};
use message_desk::config::AppConfig;
use message_desk::ports::MessageStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let store: Arc<dyn MessageStore> = Arc::new(InMemoryMessageStore::new());

    let handlers = MessageHandlers::new(
        Arc::new(CreateMessageHandler::new(store.clone())),
        Arc::new(UpdateMessageHandler::new(store.clone())),
        Arc::new(DeleteMessageHandler::new(store.clone())),
        Arc::new(GetMessageHandler::new(store.clone())),
        Arc::new(ListMessagesHandler::new(store)),
    );

    let app = message_routes(handlers)
        .layer(TraceLayer::new_for_http())
        .layer(timeout_layer(&config.server))
        .layer(cors_layer(&config.server)?);

    let addr = config.server.socket_addr()?;
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
