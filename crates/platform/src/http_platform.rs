use crate::{AgentPlatform, PlatformError, PlatformResult};
use async_trait::async_trait;
use domain::{AgentResponse, AgentSpec, PlatformSettings, RemoteAgent, RemoteTeam, TeamSpec};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// [`AgentPlatform`] over the platform's JSON/HTTP API
#[derive(Debug, Clone)]
pub struct HttpAgentPlatform {
    api_key: String,
    base_url: String,
    client: Client,
}

impl HttpAgentPlatform {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> PlatformResult<Self> {
        if api_key.is_empty() {
            return Err(PlatformError::MissingApiKey("API key".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PlatformError::Client(e.to_string()))?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build from configuration, reading the key from the configured variable
    pub fn from_settings(settings: &PlatformSettings) -> PlatformResult<Self> {
        let api_key = env::var(&settings.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| PlatformError::MissingApiKey(settings.api_key_env.clone()))?;

        Self::new(
            api_key,
            &settings.base_url,
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send with auth headers; non-2xx answers become [`PlatformError::Http`]
    async fn execute(&self, request: RequestBuilder, operation: &str) -> PlatformResult<Response> {
        let response = request
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                operation = operation,
                status = status.as_u16(),
                "Platform API error: {}",
                body
            );
            return Err(PlatformError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> PlatformResult<T> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| PlatformError::Decode(format!("{e}: {text}")))
    }

    async fn deploy(&self, path: String, id: &str) -> PlatformResult<String> {
        let response = self
            .execute(self.client.post(self.url(&path)), "deploy")
            .await?;
        let text = response.text().await?;
        Ok(deployed_id(&text).unwrap_or_else(|| id.to_string()))
    }

    async fn run(&self, path: String, prompt: &str) -> PlatformResult<AgentResponse> {
        let start_time = Instant::now();

        info!(
            "Sending prompt to platform: {} ({})",
            prompt.chars().take(50).collect::<String>(),
            path
        );
        debug!("Full prompt: {}", prompt);

        let request = self
            .client
            .post(self.url(&path))
            .json(&RunRequest { prompt });
        let response = self.execute(request, "run").await?;
        let text = response.text().await?;

        info!("Received response from platform ({:?})", start_time.elapsed());

        Ok(match serde_json::from_str(&text) {
            Ok(value) => AgentResponse::from_json(value),
            Err(_) => AgentResponse::Text(text),
        })
    }
}

#[async_trait]
impl AgentPlatform for HttpAgentPlatform {
    async fn create_agent(&self, spec: &AgentSpec) -> PlatformResult<RemoteAgent> {
        info!("Creating agent: {}", spec.name);
        let request = self.client.post(self.url("/agents")).json(spec);
        let response = self.execute(request, "create_agent").await?;
        Self::decode(response).await
    }

    async fn get_agent(&self, id: &str) -> PlatformResult<RemoteAgent> {
        let request = self.client.get(self.url(&format!("/agents/{id}")));
        let response = self.execute(request, "get_agent").await?;
        Self::decode(response).await
    }

    async fn update_agent(&self, agent: &RemoteAgent) -> PlatformResult<()> {
        info!("Updating agent: {} ({})", agent.name, agent.id);
        let request = self
            .client
            .put(self.url(&format!("/agents/{}", agent.id)))
            .json(agent);
        self.execute(request, "update_agent").await?;
        Ok(())
    }

    async fn deploy_agent(&self, id: &str) -> PlatformResult<String> {
        self.deploy(format!("/agents/{id}/deploy"), id).await
    }

    async fn create_team(&self, spec: &TeamSpec) -> PlatformResult<RemoteTeam> {
        info!(
            "Creating team: {} ({} agents)",
            spec.name,
            spec.agent_ids.len()
        );
        let request = self.client.post(self.url("/teams")).json(spec);
        let response = self.execute(request, "create_team").await?;
        Self::decode(response).await
    }

    async fn deploy_team(&self, id: &str) -> PlatformResult<String> {
        self.deploy(format!("/teams/{id}/deploy"), id).await
    }

    async fn run_agent(&self, id: &str, prompt: &str) -> PlatformResult<AgentResponse> {
        self.run(format!("/agents/{id}/run"), prompt).await
    }

    async fn run_team(&self, id: &str, prompt: &str) -> PlatformResult<AgentResponse> {
        self.run(format!("/teams/{id}/run"), prompt).await
    }
}

#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct DeployResponse {
    #[serde(default)]
    id: Option<String>,
}

/// Identifier from a deploy answer; `None` when the body carries none
fn deployed_id(body: &str) -> Option<String> {
    serde_json::from_str::<DeployResponse>(body)
        .ok()
        .and_then(|response| response.id)
        .filter(|id| !id.is_empty())
}
