use domain::{AgentSpec, PlatformSettings, RemoteAgent, TeamSpec, ToolBinding, ToolKind};
use mockito::{Matcher, Server};
use platform::{AgentPlatform, HttpAgentPlatform, PlatformError};
use serde_json::json;
use std::time::Duration;

fn platform(server: &Server) -> HttpAgentPlatform {
    HttpAgentPlatform::new("secret".to_string(), &server.url(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_create_agent_posts_spec() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/agents")
        .match_header("authorization", "Bearer secret")
        .match_body(Matcher::PartialJson(json!({
            "name": "Training and Mentorship Agent",
            "llm_id": "llm-1",
            "tools": [{ "model_id": "tts-1" }]
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id": "agent-7", "name": "Training and Mentorship Agent", "description": "d", "llm_id": "llm-1"}"#,
        )
        .create_async()
        .await;

    let spec = AgentSpec {
        name: "Training and Mentorship Agent".to_string(),
        description: "d".to_string(),
        tools: vec![ToolBinding::new(ToolKind::SpeechSynthesis, "tts-1")],
        llm_id: "llm-1".to_string(),
    };

    let agent = platform(&server).create_agent(&spec).await.unwrap();

    assert_eq!(agent.id, "agent-7");
    assert!(agent.tools.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_agent_puts_description() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("PUT", "/agents/agent-3")
        .match_body(Matcher::PartialJson(json!({
            "description": "refreshed"
        })))
        .with_status(200)
        .create_async()
        .await;

    let agent = RemoteAgent {
        id: "agent-3".to_string(),
        name: "Incentive Management Agent".to_string(),
        description: "refreshed".to_string(),
        tools: Vec::new(),
        llm_id: "llm-1".to_string(),
    };

    platform(&server).update_agent(&agent).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_deploy_falls_back_to_own_id() {
    let mut server = Server::new_async().await;

    let with_id = server
        .mock("POST", "/agents/agent-1/deploy")
        .with_status(200)
        .with_body(r#"{"id": "deployed-1"}"#)
        .create_async()
        .await;
    let without_id = server
        .mock("POST", "/teams/team-1/deploy")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let platform = platform(&server);
    assert_eq!(platform.deploy_agent("agent-1").await.unwrap(), "deployed-1");
    assert_eq!(platform.deploy_team("team-1").await.unwrap(), "team-1");

    with_id.assert_async().await;
    without_id.assert_async().await;
}

#[tokio::test]
async fn test_create_team_references_agents() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/teams")
        .match_body(Matcher::PartialJson(json!({
            "agent_ids": ["a1", "a2"]
        })))
        .with_status(200)
        .with_body(r#"{"id": "team-9", "name": "Rural Education Team", "agent_ids": ["a1", "a2"]}"#)
        .create_async()
        .await;

    let team = platform(&server)
        .create_team(&TeamSpec {
            name: "Rural Education Team".to_string(),
            description: "coordinates".to_string(),
            agent_ids: vec!["a1".to_string(), "a2".to_string()],
            llm_id: "llm-1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(team.id, "team-9");
    assert_eq!(team.agent_ids.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_agent_payload() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/agents/agent-1")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = platform(&server).get_agent("agent-1").await.unwrap_err();
    assert!(matches!(err, PlatformError::Decode(_)));
}

#[test]
fn test_from_settings_requires_key() {
    let settings = PlatformSettings {
        api_key_env: "RURAL_EDU_TEST_KEY_THAT_IS_NOT_SET".to_string(),
        ..PlatformSettings::default()
    };

    let err = HttpAgentPlatform::from_settings(&settings).unwrap_err();
    assert_eq!(
        err.to_string(),
        "RURAL_EDU_TEST_KEY_THAT_IS_NOT_SET not set in environment"
    );
}

#[test]
fn test_from_settings_reads_configured_variable() {
    std::env::set_var("RURAL_EDU_TEST_KEY_SET", "k-123");
    let settings = PlatformSettings {
        api_key_env: "RURAL_EDU_TEST_KEY_SET".to_string(),
        base_url: "https://platform.example/".to_string(),
        ..PlatformSettings::default()
    };

    let platform = HttpAgentPlatform::from_settings(&settings).unwrap();
    assert_eq!(platform.base_url(), "https://platform.example");
    std::env::remove_var("RURAL_EDU_TEST_KEY_SET");
}
