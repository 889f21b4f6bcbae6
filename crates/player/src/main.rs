//! Marquee Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::sync::Arc;

use marquee_player::application::{Api, ClientConfig};
use marquee_player::infrastructure::http_client::ApiAdapter;
use marquee_player::ports::outbound::RawApiPort;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // `.env.local` wins over `.env`; neither overrides the real environment.
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "marquee_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Marquee Player");

    let config = load_config();
    tracing::info!(
        api = %config.api_base_url,
        auth = %config.auth_base_url,
        owner = %config.owner_id,
        "Client configuration loaded"
    );

    // Platform
    let platform = marquee_player::infrastructure::platform::create_platform();

    // HTTP
    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::with_timeout(
        &config.api_base_url,
        config.request_timeout_ms,
    ));
    let raw_auth: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::with_timeout(
        &config.auth_base_url,
        config.request_timeout_ms,
    ));
    let services = marquee_player::presentation::Services::new(
        Api::new(raw_api),
        Api::new(raw_auth),
        config,
    );

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_player_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(services)
        .launch(marquee_player::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> ClientConfig {
    ClientConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %format!("{e:#}"), "Invalid client configuration, using defaults");
        ClientConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> ClientConfig {
    ClientConfig::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/output.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
