//! Behavioural tests for the address book data model.
//!
//! These exercise the public API the way a dispatch layer would: build a
//! record, mutate it through validated operations, store it, query it.

use address_book::domain::{Birthday, Field, Name, Phone, ValidationError};
use address_book::models::{AddressBook, Record};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

fn midnight(day: u32, month: u32, year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut john = Record::new("John").unwrap();
    john.add_phone("1234567890").unwrap();
    john.add_birthday("10.04.1990").unwrap();
    book.add_record(john);

    let mut jane = Record::new("Jane").unwrap();
    jane.add_phone("9876543210").unwrap();
    jane.add_birthday("05.04.1992").unwrap();
    book.add_record(jane);

    book
}

#[test]
fn test_every_ten_digit_string_is_a_phone() {
    for n in [0u64, 1, 42, 1_234_567_890, 5_555_555_555, 9_999_999_999] {
        let raw = format!("{:010}", n);
        let phone = Phone::new(raw.as_str()).unwrap();
        assert_eq!(phone.render(), raw);
    }
}

#[test]
fn test_wrong_length_or_non_digit_phone_fails() {
    for raw in ["", "1", "123456789", "12345678901", "12345abcde", "1234 67890"] {
        assert_eq!(
            Phone::new(raw),
            Err(ValidationError::InvalidPhone(raw.to_string())),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn test_birthday_round_trips_every_day_of_a_leap_year() {
    let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    while date.year() == 2024 {
        let raw = date.format("%d.%m.%Y").to_string();
        assert_eq!(Birthday::new(&raw).unwrap().render(), raw);
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn test_name_rules() {
    assert_eq!(Name::new(""), Err(ValidationError::EmptyName));
    assert!(Name::new("J").is_ok());
}

#[test]
fn test_find_scenario() {
    let book = sample_book();
    let john = book.find("John").expect("John should be stored");
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 1234567890, Birthday: 10.04.1990"
    );
}

#[test]
fn test_edit_phone_scenario() {
    let mut book = sample_book();
    let john = book.find_mut("John").unwrap();

    assert_eq!(john.edit_phone("1234567890", "1112223333"), Ok(true));
    assert_eq!(
        book.find("John").unwrap().to_string(),
        "Contact name: John, phones: 1112223333, Birthday: 10.04.1990"
    );
}

#[test]
fn test_invalid_add_phone_scenario() {
    let mut book = sample_book();
    let john = book.find_mut("John").unwrap();

    assert!(john.add_phone("12345").is_err());
    assert_eq!(john.phones().len(), 1);
    assert_eq!(john.phones()[0].as_str(), "1234567890");
}

#[test]
fn test_edit_phone_is_atomic() {
    let mut book = sample_book();
    let john = book.find_mut("John").unwrap();
    let before: Vec<Phone> = john.phones().to_vec();

    assert!(john.edit_phone("1234567890", "not-a-phone").is_err());
    assert_eq!(john.phones(), before.as_slice());
}

#[test]
fn test_re_adding_a_name_replaces_the_record() {
    let mut book = sample_book();
    book.add_record(Record::new("John").unwrap());

    let john = book.find("John").unwrap();
    assert!(john.phones().is_empty());
    assert!(john.birthday().is_none());
    assert_eq!(book.len(), 2);
}

#[test]
fn test_delete_missing_is_a_no_op() {
    let mut book = sample_book();
    book.delete("Nobody");
    assert_eq!(book.len(), 2);

    book.delete("Jane");
    assert!(book.find("Jane").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_upcoming_birthday_window_boundary() {
    let now = midnight(1, 6, 2030);
    let mut book = AddressBook::new();

    let mut seven = Record::new("Seven").unwrap();
    seven.add_birthday("08.06.2030").unwrap();
    book.add_record(seven);

    let mut eight = Record::new("Eight").unwrap();
    eight.add_birthday("09.06.2030").unwrap();
    book.add_record(eight);

    let upcoming = book.upcoming_birthdays_at(now, Duration::days(7));
    let names: Vec<&str> = upcoming.iter().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["Seven"]);
}

#[test]
fn test_upcoming_birthdays_follow_reading_order() {
    let book = sample_book();
    let upcoming = book.upcoming_birthdays_at(midnight(4, 4, 1990), Duration::days(7));
    let names: Vec<&str> = upcoming.iter().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["John"]);

    let none = book.upcoming_birthdays_at(midnight(4, 4, 2024), Duration::days(7));
    assert!(none.is_empty());
}
