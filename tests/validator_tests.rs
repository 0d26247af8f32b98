// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for title, content, date and capacity validation

use chrono::{NaiveDate, NaiveDateTime};
use notedeck::i18n::{Locale, TranslationStore};
use notedeck::storage::MemoryStore;
use notedeck::types::Config;
use notedeck::validate::{
    check_capacity, validate_content, validate_date, validate_title, Rejection, ValidationResult,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn now() -> NaiveDateTime {
    at(2024, 6, 20, 14, 30)
}

fn rejected(result: ValidationResult) -> Rejection {
    result.rejection().expect("input should be rejected")
}

#[test]
fn test_title_rules() {
    let config = Config::default();
    assert!(validate_title("Groceries", &config).is_accepted());
    assert!(validate_title("abc", &config).is_accepted());
    assert_eq!(rejected(validate_title("", &config)), Rejection::TitleEmpty);
    assert_eq!(rejected(validate_title(" ", &config)), Rejection::TitleSpace);
    assert_eq!(rejected(validate_title("ab", &config)), Rejection::TitleTooShort);
    assert_eq!(
        rejected(validate_title("a|b|c", &config)),
        Rejection::ForbiddenCharacter
    );
    assert_eq!(
        rejected(validate_title(&"x".repeat(101), &config)),
        Rejection::TitleTooLong { max: 100 }
    );
    assert!(validate_title(&"x".repeat(100), &config).is_accepted());
}

#[test]
fn test_title_limit_follows_config() {
    let config = Config {
        max_title_length: 5,
        ..Config::default()
    };
    assert!(validate_title("Hello", &config).is_accepted());
    assert_eq!(
        rejected(validate_title("Hello!", &config)),
        Rejection::TitleTooLong { max: 5 }
    );
}

#[test]
fn test_content_rules() {
    let config = Config::default();
    assert!(validate_content("Buy milk", &config).is_accepted());
    assert_eq!(rejected(validate_content("", &config)), Rejection::ContentEmpty);
    assert_eq!(
        rejected(validate_content(" Buy milk", &config)),
        Rejection::ContentSpace
    );
    assert_eq!(
        rejected(validate_content("ab", &config)),
        Rejection::ContentTooShort
    );
    assert_eq!(
        rejected(validate_content("line\nbreak", &config)),
        Rejection::ForbiddenCharacter
    );
    assert_eq!(
        rejected(validate_content(&"y".repeat(1001), &config)),
        Rejection::ContentTooLong { max: 1000 }
    );
}

#[test]
fn test_date_accepts_past_and_present() {
    let config = Config::default();
    assert!(validate_date("15.03.2024 10:00", &config, &now()).is_accepted());
    assert!(validate_date("20.06.2024 14:30", &config, &now()).is_accepted());
    assert!(validate_date("31.12.2023 23:59", &config, &now()).is_accepted());
    assert!(validate_date("01.01.1900 00:00", &config, &now()).is_accepted());
}

#[test]
fn test_date_format_errors() {
    let config = Config::default();
    for input in ["", "1.1.2024 10:00", "15/03/2024 10:00", "15.03.2024T10:00", "15.03.24 10:00"] {
        assert_eq!(
            rejected(validate_date(input, &config, &now())),
            Rejection::DateFormat,
            "{}",
            input
        );
    }
}

#[test]
fn test_date_range_errors_in_check_order() {
    let config = Config::default();
    let cases = [
        ("00.05.2024 10:00", Rejection::DayRange),
        ("32.05.2024 10:00", Rejection::DayRange),
        ("10.13.2024 10:00", Rejection::MonthRange),
        ("10.00.2024 10:00", Rejection::MonthRange),
        ("10.05.2024 24:00", Rejection::HourRange),
        ("10.05.2024 10:60", Rejection::MinuteRange),
        ("10.05.1899 10:00", Rejection::YearRange),
        ("10.05.2025 10:00", Rejection::YearRange),
        ("32.13.2025 24:60", Rejection::DayRange),
    ];
    for (input, expected) in cases {
        assert_eq!(rejected(validate_date(input, &config, &now())), expected, "{}", input);
    }
}

#[test]
fn test_date_in_the_future_this_year() {
    let config = Config::default();
    let cases = [
        ("20.06.2024 15:00", Rejection::HourInFuture),
        ("20.06.2024 14:31", Rejection::MinuteInFuture),
        ("21.06.2024 09:00", Rejection::DayInFuture),
        ("01.07.2024 09:00", Rejection::MonthInFuture),
    ];
    for (input, expected) in cases {
        assert_eq!(rejected(validate_date(input, &config, &now())), expected, "{}", input);
    }
}

#[test]
fn test_day_of_month_is_not_cross_checked() {
    let config = Config::default();
    assert!(validate_date("31.02.2024 10:00", &config, &now()).is_accepted());
}

#[test]
fn test_earlier_month_of_current_year_accepts_any_day() {
    let config = Config::default();
    let later = at(2024, 11, 2, 8, 0);
    assert!(validate_date("30.03.2024 23:00", &config, &later).is_accepted());
}

#[test]
fn test_capacity() {
    let config = Config {
        max_notes_count: 2,
        ..Config::default()
    };
    assert!(check_capacity(1, &config).is_accepted());
    assert_eq!(
        rejected(check_capacity(2, &config)),
        Rejection::NoteLimitReached { max: 2 }
    );
}

#[test]
fn test_rejection_reasons_are_localized() {
    let store = MemoryStore::with_default_translations();
    let english = TranslationStore::load(Box::new(store.clone()), Locale::English).unwrap();
    let romanian = TranslationStore::load(Box::new(store), Locale::Romanian).unwrap();

    assert_eq!(
        Rejection::TitleTooLong { max: 100 }.localize(&english),
        "Title must be at most 100 characters!\n"
    );
    assert_eq!(
        Rejection::ContentTooShort.localize(&romanian),
        "Conținutul trebuie să aibă cel puțin 3 caractere!\n"
    );
    assert_eq!(
        Rejection::DateFormat.localize(&english),
        "Invalid date format: must be in format dd.mm.yyyy hh:mm!\n"
    );
}
