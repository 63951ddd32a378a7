//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! `DATABASE_URL`. Each test returns early when it is not set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Duration, Utc};
use hackportal_common::Role;
use hackportal_core::ParticipantId;
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// System Banner Tests
// ============================================================================

#[tokio::test]
async fn test_new_participant_sees_profile_and_team_banners() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let hackathon = unique_hackathon();
    let participant = seed_participant(&server.pool, ParticipantSeed::default())
        .await
        .unwrap();
    let token = server.token(&participant, Role::Participant).unwrap();

    let response = server
        .get_auth(&format!("/hackathons/{hackathon}/banners"), &token)
        .await
        .unwrap();
    let banners: Vec<BannerBody> = assert_json(response, StatusCode::OK).await.unwrap();

    let types: Vec<_> = banners.iter().map(|b| b.banner_type.as_str()).collect();
    assert_eq!(types, vec!["TELEGRAM_PROFILE", "GITHUB_PROFILE", "FIND_TEAM"]);
    assert!(banners.iter().all(|b| b.variant == "warning" || b.variant == "info"));
}

#[tokio::test]
async fn test_dismissal_is_per_hackathon_and_idempotent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let hackathon = unique_hackathon();
    let other = unique_hackathon();
    let participant = seed_participant(&server.pool, ParticipantSeed::default())
        .await
        .unwrap();
    let token = server.token(&participant, Role::Participant).unwrap();

    for _ in 0..2 {
        let response = server
            .post_empty_auth(&format!("/hackathons/{hackathon}/banners/FIND_TEAM/dismiss"), &token)
            .await
            .unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    let response = server
        .get_auth(&format!("/hackathons/{hackathon}/banners"), &token)
        .await
        .unwrap();
    let banners: Vec<BannerBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(banners.iter().all(|b| b.banner_type != "FIND_TEAM"));

    let response = server
        .get_auth(&format!("/hackathons/{other}/banners"), &token)
        .await
        .unwrap();
    let banners: Vec<BannerBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(banners.iter().any(|b| b.banner_type == "FIND_TEAM"));

    let rows: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM dismissed_banners WHERE participant_id = $1 AND hackathon_id = $2",
    )
    .bind(participant.as_str())
    .bind(hackathon.as_str())
    .fetch_one(&server.pool)
    .await
    .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn test_team_leader_banners() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let hackathon = unique_hackathon();
    let (leader, _team) = seed_led_team(&server.pool, &hackathon, None).await.unwrap();
    let token = server.token(&leader, Role::Participant).unwrap();

    let response = server
        .get_auth(&format!("/hackathons/{hackathon}/banners"), &token)
        .await
        .unwrap();
    let banners: Vec<BannerBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let types: Vec<_> = banners.iter().map(|b| b.banner_type.as_str()).collect();
    assert_eq!(types, vec!["TEAM_NEEDS_MEMBERS", "SET_TEAM_LEVEL"]);
}

#[tokio::test]
async fn test_unknown_participant_and_missing_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let hackathon = unique_hackathon();

    let response = server.get(&format!("/hackathons/{hackathon}/banners")).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let ghost = server
        .token(&ParticipantId::new(unique_id("ghost")), Role::Participant)
        .unwrap();
    let response = server
        .get_auth(&format!("/hackathons/{hackathon}/banners"), &ghost)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_PARTICIPANT");
}

// ============================================================================
// Custom Banner Tests
// ============================================================================

#[tokio::test]
async fn test_custom_banner_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let hackathon = unique_hackathon();
    let organizer = server
        .token(&ParticipantId::new(unique_id("org")), Role::Organizer)
        .unwrap();
    let participant = seed_participant(&server.pool, ParticipantSeed::complete())
        .await
        .unwrap();
    let token = server.token(&participant, Role::Participant).unwrap();

    // Participants cannot author banners
    let response = server
        .post_auth(
            &format!("/hackathons/{hackathon}/custom-banners"),
            &token,
            &CreateCustomBanner::current(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth(
            &format!("/hackathons/{hackathon}/custom-banners"),
            &organizer,
            &CreateCustomBanner::current(),
        )
        .await
        .unwrap();
    let created: CustomBannerBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.banner_type, "INFO");
    assert!(created.is_active);
    assert!(created.allow_dismiss);

    let response = server
        .put_auth(
            &format!("/custom-banners/{}", created.id),
            &organizer,
            &serde_json::json!({ "title": "Mentor hours moved", "action_url": "/space/mentors" }),
        )
        .await
        .unwrap();
    let updated: CustomBannerBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Mentor hours moved");
    assert_eq!(updated.action_url.as_deref(), Some("/space/mentors"));

    let response = server
        .get_auth(
            &format!("/hackathons/{hackathon}/custom-banners?active_only=true"),
            &organizer,
        )
        .await
        .unwrap();
    let listed: Vec<CustomBannerBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);

    // Participant sees it in the feed until dismissing it
    let response = server
        .get_auth(&format!("/hackathons/{hackathon}/notifications"), &token)
        .await
        .unwrap();
    let feed: FeedBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.custom_banners.len(), 1);

    let response = server
        .post_empty_auth(
            &format!("/hackathons/{hackathon}/custom-banners/{}/dismiss", created.id),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/hackathons/{hackathon}/notifications"), &token)
        .await
        .unwrap();
    let feed: FeedBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.custom_banners.is_empty());

    let response = server
        .delete_auth(&format!("/custom-banners/{}", created.id), &organizer)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/custom-banners/{}", created.id), &organizer)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_custom_banner_rejects_inverted_window() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let hackathon = unique_hackathon();
    let organizer = server
        .token(&ParticipantId::new(unique_id("org")), Role::Organizer)
        .unwrap();

    let mut request = CreateCustomBanner::current();
    request.display_end = request.display_start - Duration::minutes(1);

    let response = server
        .post_auth(&format!("/hackathons/{hackathon}/custom-banners"), &organizer, &request)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_DISPLAY_WINDOW");
}

#[tokio::test]
async fn test_non_dismissible_custom_banner() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let hackathon = unique_hackathon();
    let organizer = server
        .token(&ParticipantId::new(unique_id("org")), Role::Organizer)
        .unwrap();
    let participant = seed_participant(&server.pool, ParticipantSeed::complete())
        .await
        .unwrap();
    let token = server.token(&participant, Role::Participant).unwrap();

    let mut request = CreateCustomBanner::current();
    request.allow_dismiss = false;
    let response = server
        .post_auth(&format!("/hackathons/{hackathon}/custom-banners"), &organizer, &request)
        .await
        .unwrap();
    let created: CustomBannerBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_empty_auth(
            &format!("/hackathons/{hackathon}/custom-banners/{}/dismiss", created.id),
            &token,
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "BANNER_NOT_DISMISSIBLE");
}

// ============================================================================
// Calendar Tests
// ============================================================================

#[tokio::test]
async fn test_calendar_events_dismiss_and_restore() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let hackathon = unique_hackathon();
    let (leader, team) = seed_led_team(&server.pool, &hackathon, Some("ADVANCED"))
        .await
        .unwrap();
    let token = server.token(&leader, Role::Participant).unwrap();
    let now = Utc::now();

    let team_event = seed_event(&server.pool, &hackathon, now + Duration::hours(3), Some(&team))
        .await
        .unwrap();
    let global_event = seed_event(&server.pool, &hackathon, now + Duration::days(1), None)
        .await
        .unwrap();
    let foreign = seed_led_team(&server.pool, &hackathon, None).await.unwrap().1;
    seed_event(&server.pool, &hackathon, now + Duration::hours(1), Some(&foreign))
        .await
        .unwrap();

    let response = server
        .get_auth(&format!("/hackathons/{hackathon}/calendar-events"), &token)
        .await
        .unwrap();
    let events: Vec<CalendarEventBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec![team_event.as_str(), global_event.as_str()]);
    assert_eq!(events[0].team_id.as_deref(), Some(team.as_str()));
    assert_eq!(events[0].event_type, "DEADLINE");

    let dismiss_path = format!("/hackathons/{hackathon}/calendar-events/{team_event}/dismiss");
    let response = server.post_empty_auth(&dismiss_path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/hackathons/{hackathon}/notifications"), &token)
        .await
        .unwrap();
    let feed: FeedBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        feed.next_event.as_ref().map(|e| e.id.as_str()),
        Some(global_event.as_str())
    );
    let types: Vec<_> = feed.banners.iter().map(|b| b.banner_type.as_str()).collect();
    assert_eq!(types, vec!["TEAM_NEEDS_MEMBERS"]);

    let response = server.delete_auth(&dismiss_path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/hackathons/{hackathon}/calendar-events"), &token)
        .await
        .unwrap();
    let events: Vec<CalendarEventBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(events.iter().all(|e| !e.is_dismissed));

    let response = server
        .post_empty_auth(
            &format!("/hackathons/{hackathon}/calendar-events/{}/dismiss", unique_id("e")),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_calendar_event_authoring() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let hackathon = unique_hackathon();
    let organizer = server
        .token(&ParticipantId::new(unique_id("org")), Role::Organizer)
        .unwrap();
    let (leader, team) = seed_led_team(&server.pool, &hackathon, Some("BEGINNER"))
        .await
        .unwrap();
    let token = server.token(&leader, Role::Participant).unwrap();
    let events_path = format!("/hackathons/{hackathon}/calendar-events");

    let response = server
        .post_auth(&events_path, &token, &CreateCalendarEvent::in_hours(2, None))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth(&events_path, &organizer, &CreateCalendarEvent::in_hours(2, Some(&team)))
        .await
        .unwrap();
    let team_event: ManagedEventBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(team_event.hackathon_id, hackathon.as_str());
    assert_eq!(team_event.team_id.as_deref(), Some(team.as_str()));
    assert_eq!(team_event.event_type, "DEADLINE");

    let mut draft = CreateCalendarEvent::in_hours(1, None);
    draft.is_active = false;
    let response = server.post_auth(&events_path, &organizer, &draft).await.unwrap();
    let draft: ManagedEventBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!draft.is_active);

    let mut inverted = CreateCalendarEvent::in_hours(3, None);
    inverted.event_end_date = Some(Utc::now());
    let response = server.post_auth(&events_path, &organizer, &inverted).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_EVENT_RANGE");

    // Inactive drafts only show up on request
    let manage_path = format!("/hackathons/{hackathon}/calendar-events/manage");
    let response = server.get_auth(&manage_path, &organizer).await.unwrap();
    let listed: Vec<ManagedEventBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    let response = server
        .get_auth(&format!("{manage_path}?include_inactive=true"), &organizer)
        .await
        .unwrap();
    let listed: Vec<ManagedEventBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec![draft.id.as_str(), team_event.id.as_str()]);

    let response = server
        .get_auth(&format!("/hackathons/{hackathon}/notifications"), &token)
        .await
        .unwrap();
    let feed: FeedBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.next_event.as_ref().map(|e| e.id.as_str()), Some(team_event.id.as_str()));

    // Publishing the earlier draft makes it the next event
    let response = server
        .put_auth(
            &format!("/calendar-events/{}", draft.id),
            &organizer,
            &serde_json::json!({ "is_active": true, "title": "Mentor check-in" }),
        )
        .await
        .unwrap();
    let published: ManagedEventBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(published.title, "Mentor check-in");
    assert!(published.is_active);

    let response = server
        .get_auth(&format!("/hackathons/{hackathon}/notifications"), &token)
        .await
        .unwrap();
    let feed: FeedBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.next_event.as_ref().map(|e| e.id.as_str()), Some(draft.id.as_str()));

    let response = server
        .delete_auth(&format!("/calendar-events/{}", draft.id), &organizer)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/calendar-events/{}", draft.id), &organizer)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get_auth(&format!("/calendar-events/{}", team_event.id), &organizer)
        .await
        .unwrap();
    let fetched: ManagedEventBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, team_event.id);
}
