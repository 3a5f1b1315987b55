// Framework bootstrap for the relay runtime.

use crate::frameworks::config;
use crate::interface_adapters::clients::OpenAiClient;
use crate::interface_adapters::credentials::LayeredCredentialSource;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::net::SocketAddr;
use std::{io::Result, sync::Arc};

fn init_runtime() {
    // Load .env files locally; safe to ignore when not present.
    config::load_env_files(&config::ENV_FILES);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn serve(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::new(config::bind_addr(), config::http_port());

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    serve(listener, build_state()).await
}

fn build_state() -> Arc<AppState> {
    let openai_base_url = config::openai_base_url();
    tracing::debug!(openai_base_url = %openai_base_url, "upstream client configured.");

    let credentials = LayeredCredentialSource::new(config::API_KEY_NAME)
        .with_dotenv_values(config::read_env_files(&config::ENV_FILES))
        .with_fallback_values(
            config::fallback_env_file()
                .map(|path| config::read_env_files(&[path]))
                .unwrap_or_default(),
        );

    let allowed_origins = config::allowed_origins();
    tracing::debug!(?allowed_origins, "cors configured.");

    Arc::new(AppState {
        upstream: Arc::new(OpenAiClient::new(openai_base_url)),
        credentials: Arc::new(credentials),
        allowed_origins,
    })
}
