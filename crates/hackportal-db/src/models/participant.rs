//! Participant and team read models

use sqlx::FromRow;

/// Row from the participants table
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantModel {
    pub id: String,
    pub telegram: Option<String>,
    pub github_url: Option<String>,
    pub team_id: Option<String>,
}

/// Row from the teams table
#[derive(Debug, Clone, FromRow)]
pub struct TeamModel {
    pub id: String,
    pub name: String,
    pub level: Option<String>,
}
