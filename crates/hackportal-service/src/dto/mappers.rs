//! Domain value to DTO mappers
//!
//! Implements `From` conversions from domain values to response DTOs.

use hackportal_core::{Banner, CalendarEvent, CustomBanner};

use super::responses::{
    BannerResponse, CalendarEventDetailResponse, CalendarEventResponse, CustomBannerResponse,
    NotificationFeedResponse,
};
use crate::services::{CalendarEntry, NotificationFeed};

impl From<Banner> for BannerResponse {
    fn from(banner: Banner) -> Self {
        Self {
            banner_type: banner.banner_type,
            title: banner.title,
            message: banner.message,
            action_text: banner.action_text,
            action_url: banner.action_url,
            variant: banner.variant,
        }
    }
}

impl From<CustomBanner> for CustomBannerResponse {
    fn from(banner: CustomBanner) -> Self {
        Self {
            id: banner.id.into_inner(),
            hackathon_id: banner.hackathon_id.into_inner(),
            title: banner.title,
            description: banner.description,
            banner_type: banner.banner_type,
            display_start: banner.display_start,
            display_end: banner.display_end,
            allow_dismiss: banner.allow_dismiss,
            action_text: banner.action_text,
            action_url: banner.action_url,
            is_active: banner.is_active,
            created_at: banner.created_at,
            updated_at: banner.updated_at,
        }
    }
}

impl From<CalendarEntry> for CalendarEventResponse {
    fn from(entry: CalendarEntry) -> Self {
        let event = entry.event;
        Self {
            id: event.id.into_inner(),
            title: event.title,
            description: event.description,
            event_date: event.event_date,
            event_end_date: event.event_end_date,
            link: event.link,
            event_type: event.event_type,
            team_id: event.team_id.map(|t| t.into_inner()),
            is_dismissed: entry.is_dismissed,
        }
    }
}

impl From<CalendarEvent> for CalendarEventDetailResponse {
    fn from(event: CalendarEvent) -> Self {
        Self {
            id: event.id.into_inner(),
            hackathon_id: event.hackathon_id.into_inner(),
            title: event.title,
            description: event.description,
            event_date: event.event_date,
            event_end_date: event.event_end_date,
            link: event.link,
            event_type: event.event_type,
            team_id: event.team_id.map(|t| t.into_inner()),
            is_active: event.is_active,
            created_at: event.created_at,
        }
    }
}

impl From<NotificationFeed> for NotificationFeedResponse {
    fn from(feed: NotificationFeed) -> Self {
        Self {
            banners: feed.banners.into_iter().map(BannerResponse::from).collect(),
            custom_banners: feed
                .custom_banners
                .into_iter()
                .map(CustomBannerResponse::from)
                .collect(),
            next_event: feed.next_event.map(CalendarEventResponse::from),
        }
    }
}
