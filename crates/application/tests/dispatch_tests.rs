//! Coordinator request routing

mod support;

use application::{AgentRegistry, ApplicationError, Dispatcher};
use domain::{Action, AgentIds, AgentResponse, Role};
use std::sync::Arc;
use support::{Call, RecordingPlatform};

fn dispatcher(platform: Arc<RecordingPlatform>, team: Option<&str>) -> Dispatcher {
    let mut ids = AgentIds::empty();
    ids.set(Role::TeacherRecruitment, "r1");
    ids.set(Role::TrainingMentorship, "t1");
    ids.team = team.map(str::to_string);
    Dispatcher::new(platform, AgentRegistry::new(ids))
}

#[tokio::test]
async fn test_role_action_goes_to_its_agent() {
    let platform = Arc::new(RecordingPlatform::new());
    let response = dispatcher(platform.clone(), Some("team-1"))
        .request(
            "Find qualified female teachers for mathematics education",
            Action::Role(Role::TeacherRecruitment),
            Some("V001"),
            None,
        )
        .await
        .unwrap();

    assert_eq!(response, AgentResponse::Text("agent r1 answered".to_string()));
    assert_eq!(
        platform.calls(),
        vec![Call::RunAgent(
            "r1".to_string(),
            "Find qualified female teachers for mathematics education (for village V001)"
                .to_string()
        )]
    );
}

#[tokio::test]
async fn test_full_cycle_goes_to_team() {
    let platform = Arc::new(RecordingPlatform::new());
    dispatcher(platform.clone(), Some("team-1"))
        .request("Plan the year", Action::FullCycle, None, Some("T003"))
        .await
        .unwrap();

    assert_eq!(
        platform.calls(),
        vec![Call::RunTeam(
            "team-1".to_string(),
            "Plan the year (regarding teacher T003)".to_string()
        )]
    );
}

#[tokio::test]
async fn test_unregistered_action_makes_no_call() {
    let platform = Arc::new(RecordingPlatform::new());
    let err = dispatcher(platform.clone(), None)
        .request("Plan", Action::FullCycle, None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Unregistered(_)));
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_platform_error_is_returned() {
    let platform = Arc::new(RecordingPlatform::failing_on(&["t1"]));
    let err = dispatcher(platform, None)
        .request("Help", Action::Role(Role::TrainingMentorship), None, None)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "HTTP error 500: t1 unavailable");
}

#[tokio::test]
async fn test_smoke_test_reaches_every_registered_target() {
    let platform = Arc::new(RecordingPlatform::failing_on(&["r1"]));
    let report = dispatcher(platform.clone(), Some("team-1"))
        .smoke_test()
        .await;

    let agents: Vec<_> = report.outcomes.iter().map(|outcome| outcome.agent).collect();
    assert_eq!(
        agents,
        vec![
            "Teacher Recruitment Agent",
            "Training and Mentorship Agent",
            "Incentive Management Agent",
            "Community Engagement Agent",
            "Progress Monitoring Agent",
            "Rural Education Team",
        ]
    );
    // r1 fails on the platform, three roles have no id
    assert_eq!(report.failures(), 4);
    assert_eq!(
        report.outcomes[1].result,
        Ok(AgentResponse::Text("agent t1 answered".to_string()))
    );

    let calls = platform.calls();
    assert_eq!(calls.len(), 3);
    assert!(matches!(&calls[1], Call::RunAgent(id, prompt)
        if id == "t1" && prompt.starts_with("Suggest interactive mathematics teaching methods")));
    assert!(matches!(&calls[2], Call::RunTeam(id, prompt)
        if id == "team-1" && prompt.contains("new district with 5 villages")));
}
