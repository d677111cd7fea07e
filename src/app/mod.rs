pub mod serve;

// re-export
pub use serve::serve;

use std::{net::SocketAddr, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{config::AppConfig, templ_manager::TemplateManager, ResendClient, Result};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    pub async fn build_from_config(config: &AppConfig) -> Result<Self> {
        let tm = TemplateManager::init();

        let email_config = &config.email_config;
        let resend = match (
            email_config.api_key.clone(),
            email_config.audience_id.clone(),
        ) {
            (Some(api_key), Some(audience_id)) => Some(ResendClient::new(
                &email_config.url,
                email_config.sender_addr.clone(),
                api_key,
                audience_id,
                email_config.timeout(),
            )?),
            _ => {
                warn!(
                    "RESEND_API_KEY or RESEND_AUDIENCE_ID is not set, \
                     signup requests will be answered with a server-configuration error"
                );
                None
            }
        };

        let app_state = AppState::new(tm, resend);

        let addr = SocketAddr::from((config.net_config.host, config.net_config.app_port));
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let app = App::new(app_state, listener);
        Ok(app)
    }
}

pub struct InternalState {
    pub templ_mgr: TemplateManager,
    /// `None` when the provider secrets were absent at startup.
    pub resend: Option<ResendClient>,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(templ_mgr: TemplateManager, resend: Option<ResendClient>) -> Self {
        AppState(Arc::new(InternalState { templ_mgr, resend }))
    }
}
