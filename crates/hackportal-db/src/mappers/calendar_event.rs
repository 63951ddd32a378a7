//! Calendar event row -> entity mapper

use hackportal_core::{CalendarEvent, CalendarEventId, DomainError, HackathonId, TeamId};

use super::corrupt_column;
use crate::models::CalendarEventModel;

impl TryFrom<CalendarEventModel> for CalendarEvent {
    type Error = DomainError;

    fn try_from(model: CalendarEventModel) -> Result<Self, Self::Error> {
        Ok(CalendarEvent {
            id: CalendarEventId::new(model.id),
            hackathon_id: HackathonId::new(model.hackathon_id),
            title: model.title,
            description: model.description,
            event_date: model.event_date,
            event_end_date: model.event_end_date,
            link: model.link,
            event_type: model.event_type.parse().map_err(corrupt_column)?,
            team_id: model.team_id.map(TeamId::new),
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}
