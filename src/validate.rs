// SPDX-License-Identifier: PMPL-1.0-or-later

//! Input validators for note fields.
//!
//! Every validator is a pure function returning [`ValidationResult`]. The
//! re-prompt loop that acts on a rejection lives in `menu::input`.
//!
//! Rules are checked in a fixed order and the first failure wins.

use crate::i18n::TranslationStore;
use crate::types::Config;
use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

/// Shortest accepted title or content, in characters.
pub const MIN_TEXT_LENGTH: usize = 3;

pub const MIN_YEAR: i32 = 1900;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TitleEmpty,
    TitleSpace,
    TitleTooShort,
    TitleTooLong { max: usize },
    ContentEmpty,
    ContentSpace,
    ContentTooShort,
    ContentTooLong { max: usize },
    ForbiddenCharacter,
    DateFormat,
    DayRange,
    MonthRange,
    HourRange,
    MinuteRange,
    YearRange,
    HourInFuture,
    MinuteInFuture,
    DayInFuture,
    MonthInFuture,
    NoteLimitReached { max: usize },
}

impl Rejection {
    /// Translation key of the user-facing reason.
    pub fn key(self) -> &'static str {
        match self {
            Rejection::TitleEmpty => "titleEmpty",
            Rejection::TitleSpace => "titleSpace",
            Rejection::TitleTooShort => "titleTooShort",
            Rejection::TitleTooLong { .. } => "titleTooLong",
            Rejection::ContentEmpty => "contentEmpty",
            Rejection::ContentSpace => "contentSpace",
            Rejection::ContentTooShort => "contentTooShort",
            Rejection::ContentTooLong { .. } => "contentTooLong",
            Rejection::ForbiddenCharacter => "forbiddenCharacter",
            Rejection::DateFormat => "dateFormat",
            Rejection::DayRange => "dayRange",
            Rejection::MonthRange => "monthRange",
            Rejection::HourRange => "hourRange",
            Rejection::MinuteRange => "minuteRange",
            Rejection::YearRange => "yearRange",
            Rejection::HourInFuture => "hourInFuture",
            Rejection::MinuteInFuture => "minuteInFuture",
            Rejection::DayInFuture => "dayInFuture",
            Rejection::MonthInFuture => "monthInFuture",
            Rejection::NoteLimitReached { .. } => "noteLimitReached",
        }
    }

    fn template_value(self) -> Option<usize> {
        match self {
            Rejection::TitleTooShort | Rejection::ContentTooShort => Some(MIN_TEXT_LENGTH),
            Rejection::TitleTooLong { max }
            | Rejection::ContentTooLong { max }
            | Rejection::NoteLimitReached { max } => Some(max),
            _ => None,
        }
    }

    /// The reason in the active locale, newline-terminated.
    pub fn localize(self, translations: &TranslationStore) -> String {
        match self.template_value() {
            Some(value) => translations.resolve_with(self.key(), &value.to_string(), true),
            None => translations.resolve(self.key(), true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    Rejected(Rejection),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ValidationResult::Accepted => None,
            ValidationResult::Rejected(reason) => Some(*reason),
        }
    }
}

impl From<Option<Rejection>> for ValidationResult {
    fn from(rejection: Option<Rejection>) -> Self {
        match rejection {
            Some(reason) => ValidationResult::Rejected(reason),
            None => ValidationResult::Accepted,
        }
    }
}

pub fn validate_title(candidate: &str, config: &Config) -> ValidationResult {
    title_rejection(candidate, config).into()
}

fn title_rejection(candidate: &str, config: &Config) -> Option<Rejection> {
    if candidate.is_empty() {
        return Some(Rejection::TitleEmpty);
    }
    if candidate == " " {
        return Some(Rejection::TitleSpace);
    }
    if has_forbidden_character(candidate) {
        return Some(Rejection::ForbiddenCharacter);
    }
    let length = candidate.chars().count();
    if length < MIN_TEXT_LENGTH {
        return Some(Rejection::TitleTooShort);
    }
    if length > config.max_title_length {
        return Some(Rejection::TitleTooLong {
            max: config.max_title_length,
        });
    }
    None
}

pub fn validate_content(candidate: &str, config: &Config) -> ValidationResult {
    content_rejection(candidate, config).into()
}

fn content_rejection(candidate: &str, config: &Config) -> Option<Rejection> {
    if candidate.is_empty() {
        return Some(Rejection::ContentEmpty);
    }
    if candidate.starts_with(' ') {
        return Some(Rejection::ContentSpace);
    }
    if has_forbidden_character(candidate) {
        return Some(Rejection::ForbiddenCharacter);
    }
    let length = candidate.chars().count();
    if length < MIN_TEXT_LENGTH {
        return Some(Rejection::ContentTooShort);
    }
    if length > config.max_content_length {
        return Some(Rejection::ContentTooLong {
            max: config.max_content_length,
        });
    }
    None
}

/// Validate a `dd.mm.yyyy hh:mm` string against calendar bounds and `now`.
///
/// Day-of-month is only checked against 1-31; 31.02 passes.
pub fn validate_date(candidate: &str, config: &Config, now: &NaiveDateTime) -> ValidationResult {
    date_rejection(candidate, config, now).into()
}

fn date_rejection(candidate: &str, config: &Config, now: &NaiveDateTime) -> Option<Rejection> {
    if candidate.chars().count() != config.max_date_length {
        return Some(Rejection::DateFormat);
    }
    let Some(captures) = date_pattern().captures(candidate) else {
        return Some(Rejection::DateFormat);
    };
    let field = |index: usize| -> Option<u32> { captures.get(index)?.as_str().parse().ok() };
    let (Some(day), Some(month), Some(year), Some(hour), Some(minute)) =
        (field(1), field(2), field(3), field(4), field(5))
    else {
        return Some(Rejection::DateFormat);
    };
    let year = year as i32;

    if !(1..=31).contains(&day) {
        return Some(Rejection::DayRange);
    }
    if !(1..=12).contains(&month) {
        return Some(Rejection::MonthRange);
    }
    if hour > 23 {
        return Some(Rejection::HourRange);
    }
    if minute > 59 {
        return Some(Rejection::MinuteRange);
    }
    if year < MIN_YEAR || year > now.year() {
        return Some(Rejection::YearRange);
    }

    let this_year = year == now.year();
    let this_month = this_year && month == now.month();
    let today = this_month && day == now.day();

    if today && hour > now.hour() {
        return Some(Rejection::HourInFuture);
    }
    if today && hour == now.hour() && minute > now.minute() {
        return Some(Rejection::MinuteInFuture);
    }
    if this_month && day > now.day() {
        return Some(Rejection::DayInFuture);
    }
    if this_year && month > now.month() {
        return Some(Rejection::MonthInFuture);
    }
    None
}

/// Reject adding another note once `count` reaches the configured maximum.
pub fn check_capacity(count: usize, config: &Config) -> ValidationResult {
    if count >= config.max_notes_count {
        ValidationResult::Rejected(Rejection::NoteLimitReached {
            max: config.max_notes_count,
        })
    } else {
        ValidationResult::Accepted
    }
}

fn has_forbidden_character(candidate: &str) -> bool {
    candidate.contains(['|', '\n', '\r'])
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4}) (\d{2}):(\d{2})$").expect("date pattern compiles")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 20)
            .and_then(|d| d.and_hms_opt(14, 30, 0))
            .unwrap()
    }

    fn date(text: &str) -> Option<Rejection> {
        validate_date(text, &Config::default(), &now()).rejection()
    }

    #[test]
    fn day_range_wins_over_later_rules() {
        assert_eq!(date("32.13.1800 25:61"), Some(Rejection::DayRange));
        assert_eq!(date("10.13.1800 25:61"), Some(Rejection::MonthRange));
        assert_eq!(date("10.12.1800 25:61"), Some(Rejection::HourRange));
        assert_eq!(date("10.12.1800 20:61"), Some(Rejection::MinuteRange));
        assert_eq!(date("10.12.1800 20:10"), Some(Rejection::YearRange));
    }

    #[test]
    fn today_rejects_later_clock_time() {
        assert_eq!(date("20.06.2024 15:00"), Some(Rejection::HourInFuture));
        assert_eq!(date("20.06.2024 14:31"), Some(Rejection::MinuteInFuture));
        assert_eq!(date("20.06.2024 14:30"), None);
    }

    #[test]
    fn current_month_rejects_later_day() {
        assert_eq!(date("21.06.2024 00:00"), Some(Rejection::DayInFuture));
        assert_eq!(date("01.07.2024 00:00"), Some(Rejection::MonthInFuture));
    }

    #[test]
    fn earlier_year_skips_clock_checks() {
        assert_eq!(date("31.12.2023 23:59"), None);
    }

    #[test]
    fn length_mismatch_is_a_format_error() {
        assert_eq!(date("1.6.2024 10:00"), Some(Rejection::DateFormat));
        assert_eq!(date("01/06/2024 10:00"), Some(Rejection::DateFormat));
        assert_eq!(date(""), Some(Rejection::DateFormat));
    }

    #[test]
    fn capacity_rejects_at_limit() {
        let config = Config {
            max_notes_count: 2,
            ..Config::default()
        };
        assert!(check_capacity(1, &config).is_accepted());
        assert_eq!(
            check_capacity(2, &config).rejection(),
            Some(Rejection::NoteLimitReached { max: 2 })
        );
    }

    #[test]
    fn every_rejection_has_a_bundled_translation() {
        let keys: Vec<String> = crate::i18n::default_table()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        let all = [
            Rejection::TitleEmpty,
            Rejection::TitleSpace,
            Rejection::TitleTooShort,
            Rejection::TitleTooLong { max: 1 },
            Rejection::ContentEmpty,
            Rejection::ContentSpace,
            Rejection::ContentTooShort,
            Rejection::ContentTooLong { max: 1 },
            Rejection::ForbiddenCharacter,
            Rejection::DateFormat,
            Rejection::DayRange,
            Rejection::MonthRange,
            Rejection::HourRange,
            Rejection::MinuteRange,
            Rejection::YearRange,
            Rejection::HourInFuture,
            Rejection::MinuteInFuture,
            Rejection::DayInFuture,
            Rejection::MonthInFuture,
            Rejection::NoteLimitReached { max: 1 },
        ];
        for rejection in all {
            assert!(
                keys.iter().any(|key| key == rejection.key()),
                "missing translation for {:?}",
                rejection
            );
        }
    }
}
