//! Banner rule evaluator
//!
//! Maps a participant snapshot to the ordered list of system banners that
//! currently apply. Each rule is checked independently; the output order is
//! the rule order:
//!
//! | # | Type               | Fires when                                   |
//! |---|--------------------|----------------------------------------------|
//! | 1 | TELEGRAM_PROFILE   | telegram handle absent or empty              |
//! | 2 | GITHUB_PROFILE     | GitHub URL absent or empty                   |
//! | 3 | FIND_TEAM          | neither member nor leader of a team          |
//! | 4 | TEAM_NEEDS_MEMBERS | leads a team with fewer than 3 members       |
//! | 5 | SET_TEAM_LEVEL     | leads a team with no level set               |

use crate::entities::{Banner, BannerType, BannerVariant, ParticipantSnapshot};

/// Smallest team allowed to compete
pub const MIN_TEAM_SIZE: usize = 3;

/// Compute the candidate banners for a participant.
///
/// Deterministic: depends only on `participant`, never on time or request
/// context. If a snapshot carries both `team` and `led_team`, member and
/// leader rules are evaluated independently.
pub fn evaluate(participant: &ParticipantSnapshot) -> Vec<Banner> {
    let mut fired = Vec::with_capacity(BannerType::KNOWN.len());

    if !participant.has_telegram() {
        fired.push(BannerType::TelegramProfile);
    }

    if !participant.has_github() {
        fired.push(BannerType::GithubProfile);
    }

    if participant.is_teamless() {
        fired.push(BannerType::FindTeam);
    }

    if let Some(led_team) = &participant.led_team {
        if led_team.member_count() < MIN_TEAM_SIZE {
            fired.push(BannerType::TeamNeedsMembers);
        }
        if !led_team.has_level() {
            fired.push(BannerType::SetTeamLevel);
        }
    }

    fired.iter().filter_map(template).collect()
}

/// Display content for a system banner type; `None` for unknown types
pub fn template(banner_type: &BannerType) -> Option<Banner> {
    let (title, message, action_text, action_url, variant) = match banner_type {
        BannerType::TelegramProfile => (
            "Заполните профиль Telegram",
            "Укажите свой Telegram для связи с администраторами и участниками хакатона",
            "Заполнить профиль",
            "/space/info/edit",
            BannerVariant::Warning,
        ),
        BannerType::GithubProfile => (
            "Добавьте GitHub профиль",
            "GitHub профиль обязателен для участия. Все решения команд должны храниться в GitHub",
            "Добавить GitHub",
            "/space/info/edit",
            BannerVariant::Error,
        ),
        BannerType::FindTeam => (
            "Найдите команду",
            "Только участники в составе команд допускаются к хакатону. Максимальный размер команды 4 человека, минимальный 3. Читайте FAQ для получения дополнительной информации.",
            "Найти команду",
            "/space/teams",
            BannerVariant::Info,
        ),
        BannerType::TeamNeedsMembers => (
            "Найдите участников для команды",
            "Вашей команде нужно минимум 3 участника для участия в хакатоне. Читайте FAQ для получения дополнительной информации.",
            "Найти участников",
            "/space/participants",
            BannerVariant::Warning,
        ),
        BannerType::SetTeamLevel => (
            "Укажите уровень команды",
            "Установите уровень сложности для вашей команды, чтобы получить доступ к соответствующим заданиям хакатона. Это важно для квалификации на участие.",
            "Установить уровень",
            "/space/team",
            BannerVariant::Info,
        ),
        BannerType::Other(_) => return None,
    };

    Some(Banner {
        banner_type: banner_type.clone(),
        title: title.to_string(),
        message: message.to_string(),
        action_text: action_text.to_string(),
        action_url: action_url.to_string(),
        variant,
    })
}
