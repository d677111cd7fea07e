use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use anyhow::Result;
use flexo_waitlist::{templ_manager::TemplateManager, App, AppState, ResendClient};
use secrecy::SecretString;
use serde_json::Value;
use tokio::net::TcpListener;
use wiremock::MockServer;

pub const TEST_AUDIENCE_ID: &str = "test-audience-id";

/// Trying to bind port 0 will trigger an OS scan for an available port
/// which will then be bound to the application.
const TEST_SOCK_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

pub struct TestApp {
    pub addr: SocketAddr,
    pub http_client: reqwest::Client,
    /// Stands in for the Resend API.
    pub resend_server: MockServer,
}

impl TestApp {
    /// Spawns the app wired to a wiremock server standing in for Resend.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_inner(true).await
    }

    /// Spawns the app with the provider secrets absent, like a deployment
    /// that is missing its environment variables.
    pub async fn spawn_without_provider_config() -> Result<Self> {
        Self::spawn_inner(false).await
    }

    async fn spawn_inner(with_provider_config: bool) -> Result<Self> {
        let resend_server = MockServer::start().await;

        let resend = if with_provider_config {
            Some(ResendClient::new(
                resend_server.uri(),
                "Flexo <bonjour@flexo.app>".to_string(),
                SecretString::from("re_testkey".to_string()),
                TEST_AUDIENCE_ID.to_string(),
                Duration::from_millis(200),
            )?)
        } else {
            None
        };

        let app_state = AppState::new(TemplateManager::init(), resend);

        let listener = TcpListener::bind(&TEST_SOCK_ADDR).await?;
        let addr = listener.local_addr()?;

        tokio::spawn(flexo_waitlist::serve(App::new(app_state, listener)));

        Ok(TestApp {
            addr,
            http_client: reqwest::Client::new(),
            resend_server,
        })
    }

    pub async fn post_waitlist(&self, json_request: &Value) -> Result<reqwest::Response> {
        let res = self
            .http_client
            .post(format!("http://{}/api/waitlist", self.addr))
            .json(json_request)
            .send()
            .await?;
        Ok(res)
    }
}
