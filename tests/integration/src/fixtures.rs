//! Test fixtures and data generators
//!
//! Rows for the portal-owned tables are inserted directly; everything else
//! goes through the API.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use hackportal_core::{CalendarEventId, HackathonId, ParticipantId, TeamId};
use hackportal_db::PgPool;
use serde::{Deserialize, Serialize};

/// Unique identifier so runs never collide
pub fn unique_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}

pub fn unique_hackathon() -> HackathonId {
    HackathonId::new(unique_id("hack"))
}

/// Profile fields of a seeded participant
#[derive(Debug, Default)]
pub struct ParticipantSeed<'a> {
    pub telegram: Option<&'a str>,
    pub github_url: Option<&'a str>,
    pub team_id: Option<&'a TeamId>,
}

impl ParticipantSeed<'_> {
    /// Both profile links filled, no team
    pub fn complete() -> Self {
        Self {
            telegram: Some("@crab"),
            github_url: Some("https://github.com/crab"),
            team_id: None,
        }
    }
}

pub async fn seed_participant(pool: &PgPool, seed: ParticipantSeed<'_>) -> Result<ParticipantId> {
    let id = ParticipantId::new(unique_id("p"));
    sqlx::query("INSERT INTO participants (id, telegram, github_url, team_id) VALUES ($1, $2, $3, $4)")
        .bind(id.as_str())
        .bind(seed.telegram)
        .bind(seed.github_url)
        .bind(seed.team_id.map(TeamId::as_str))
        .execute(pool)
        .await?;
    Ok(id)
}

/// Team led by a freshly seeded participant with complete profile
pub async fn seed_led_team(
    pool: &PgPool,
    hackathon_id: &HackathonId,
    level: Option<&str>,
) -> Result<(ParticipantId, TeamId)> {
    let team_id = TeamId::new(unique_id("t"));
    sqlx::query("INSERT INTO teams (id, hackathon_id, name, level, leader_id) VALUES ($1, $2, 'Crabs', $3, NULL)")
        .bind(team_id.as_str())
        .bind(hackathon_id.as_str())
        .bind(level)
        .execute(pool)
        .await?;

    let leader = seed_participant(
        pool,
        ParticipantSeed {
            team_id: Some(&team_id),
            ..ParticipantSeed::complete()
        },
    )
    .await?;

    sqlx::query("UPDATE teams SET leader_id = $1 WHERE id = $2")
        .bind(leader.as_str())
        .bind(team_id.as_str())
        .execute(pool)
        .await?;

    Ok((leader, team_id))
}

pub async fn seed_event(
    pool: &PgPool,
    hackathon_id: &HackathonId,
    event_date: DateTime<Utc>,
    team_id: Option<&TeamId>,
) -> Result<CalendarEventId> {
    let id = CalendarEventId::new(unique_id("e"));
    sqlx::query(
        r#"
        INSERT INTO calendar_events (id, hackathon_id, title, description, event_date, event_type, team_id)
        VALUES ($1, $2, 'Checkpoint', '<p>Show progress</p>', $3, 'DEADLINE', $4)
        "#,
    )
    .bind(id.as_str())
    .bind(hackathon_id.as_str())
    .bind(event_date)
    .bind(team_id.map(TeamId::as_str))
    .execute(pool)
    .await?;
    Ok(id)
}

/// Create custom banner body
#[derive(Debug, Serialize)]
pub struct CreateCustomBanner {
    pub title: String,
    pub description: String,
    pub banner_type: String,
    pub display_start: DateTime<Utc>,
    pub display_end: DateTime<Utc>,
    pub allow_dismiss: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}

impl CreateCustomBanner {
    /// Visible for the next hour
    pub fn current() -> Self {
        let now = Utc::now();
        Self {
            title: "Mentor hours".to_string(),
            description: "Mentors are in room 204".to_string(),
            banner_type: "INFO".to_string(),
            display_start: now - Duration::minutes(5),
            display_end: now + Duration::hours(1),
            allow_dismiss: true,
            action_url: None,
        }
    }
}

/// Create calendar event body
#[derive(Debug, Serialize)]
pub struct CreateCalendarEvent {
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_end_date: Option<DateTime<Utc>>,
    pub event_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    pub is_active: bool,
}

impl CreateCalendarEvent {
    /// Active deadline starting `hours` from now
    pub fn in_hours(hours: i64, team_id: Option<&TeamId>) -> Self {
        Self {
            title: "Submission deadline".to_string(),
            description: "Upload your demo video".to_string(),
            event_date: Utc::now() + Duration::hours(hours),
            event_end_date: None,
            event_type: "DEADLINE".to_string(),
            team_id: team_id.map(|t| t.as_str().to_string()),
            is_active: true,
        }
    }
}

/// System banner as returned by the API
#[derive(Debug, Deserialize)]
pub struct BannerBody {
    #[serde(rename = "type")]
    pub banner_type: String,
    pub title: String,
    pub variant: String,
}

/// Custom banner as returned by the API
#[derive(Debug, Deserialize)]
pub struct CustomBannerBody {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub banner_type: String,
    pub allow_dismiss: bool,
    pub is_active: bool,
    pub action_url: Option<String>,
}

/// Calendar event as returned by the API
#[derive(Debug, Deserialize)]
pub struct CalendarEventBody {
    pub id: String,
    pub event_type: String,
    pub team_id: Option<String>,
    pub is_dismissed: bool,
}

/// Calendar event as returned to organizers
#[derive(Debug, Deserialize)]
pub struct ManagedEventBody {
    pub id: String,
    pub hackathon_id: String,
    pub title: String,
    pub event_type: String,
    pub team_id: Option<String>,
    pub is_active: bool,
}

/// Notification feed as returned by the API
#[derive(Debug, Deserialize)]
pub struct FeedBody {
    pub banners: Vec<BannerBody>,
    pub custom_banners: Vec<CustomBannerBody>,
    pub next_event: Option<CalendarEventBody>,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
