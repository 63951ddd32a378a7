//! Participant and team rows -> snapshot mappers

use hackportal_core::{DomainError, ParticipantId, TeamId, TeamLevel, TeamSnapshot};

use super::corrupt_column;
use crate::models::TeamModel;

/// Assemble a team snapshot from its row and member IDs
///
/// # Errors
/// Returns a storage error if the level column holds an unknown value
pub fn team_snapshot(model: TeamModel, members: Vec<String>) -> Result<TeamSnapshot, DomainError> {
    let level = model
        .level
        .as_deref()
        .map(str::parse::<TeamLevel>)
        .transpose()
        .map_err(corrupt_column)?;

    Ok(TeamSnapshot {
        id: TeamId::new(model.id),
        name: model.name,
        level,
        members: members.into_iter().map(ParticipantId::new).collect(),
    })
}
