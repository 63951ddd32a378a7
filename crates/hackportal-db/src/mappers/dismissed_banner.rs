//! Dismissed banner row -> entity mapper

use hackportal_core::{BannerType, DismissedBanner, HackathonId, ParticipantId};

use crate::models::DismissedBannerModel;

impl From<DismissedBannerModel> for DismissedBanner {
    fn from(model: DismissedBannerModel) -> Self {
        DismissedBanner {
            participant_id: ParticipantId::new(model.participant_id),
            hackathon_id: HackathonId::new(model.hackathon_id),
            banner_type: BannerType::from(model.banner_type),
            dismissed_at: model.dismissed_at,
        }
    }
}
