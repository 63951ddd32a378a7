//! Custom banner row -> entity mapper

use hackportal_core::{CustomBanner, CustomBannerId, DomainError, HackathonId};

use super::corrupt_column;
use crate::models::CustomBannerModel;

impl TryFrom<CustomBannerModel> for CustomBanner {
    type Error = DomainError;

    fn try_from(model: CustomBannerModel) -> Result<Self, Self::Error> {
        Ok(CustomBanner {
            id: CustomBannerId::new(model.id),
            hackathon_id: HackathonId::new(model.hackathon_id),
            title: model.title,
            description: model.description,
            banner_type: model.banner_type.parse().map_err(corrupt_column)?,
            display_start: model.display_start,
            display_end: model.display_end,
            allow_dismiss: model.allow_dismiss,
            action_text: model.action_text,
            action_url: model.action_url,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
