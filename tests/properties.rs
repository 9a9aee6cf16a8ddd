use civil_date::{
    Date, DateError, Duration, Locale, MAX_DAY_SPAN, MAX_YEAR, MIN_YEAR, Month, ParseError,
    PatternError, RangeError, days_in_month, is_leap_year,
};
use std::cmp::Ordering;
use std::collections::HashMap;

fn date(year: i32, month: u8, day: u8) -> Date {
    Date::make(year, month, day).unwrap()
}

fn days(n: i64) -> Duration {
    Duration::from_days(n).unwrap()
}

#[test]
fn every_supported_date_roundtrips_through_text() {
    let mut current = date(MIN_YEAR, 0, 1);
    let mut seen = 1_i64;

    for year in MIN_YEAR..=MAX_YEAR {
        for month in 0..12 {
            for day in 1..=days_in_month(year, month) {
                let made = date(year, month, day);
                assert_eq!(made, current, "walk diverged at {made}");

                let text = made.to_iso();
                assert_eq!(text.len(), 10);
                assert_eq!(Date::from_iso(&text), Ok(made));
                assert_eq!(text.parse::<Date>().map(|d| d.to_string()), Ok(text));

                if let Ok(next) = current.plus_days(1) {
                    current = next;
                    seen += 1;
                }
            }
        }
    }

    assert_eq!(seen, MAX_DAY_SPAN + 1);
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
}

#[test]
fn parse_reference_date() {
    let d = Date::from_iso("2009-01-10").unwrap();
    assert_eq!(d.year(), 2009);
    assert_eq!(d.month().ordinal(), 0);
    assert_eq!(d.day(), 10);
    assert_eq!(d.to_iso(), "2009-01-10");
}

#[test]
fn strict_versus_lenient_parse() {
    assert_eq!(
        civil_date::iso::parse("2009-13-01", true),
        Err(ParseError {
            type_name: "Date",
            text:      "2009-13-01".to_owned(),
        })
    );
    assert_eq!(civil_date::iso::parse("2009-13-01", false), Ok(None));
    assert_eq!(Date::try_from_iso("2009-13-01"), None);
}

#[test]
fn day_arithmetic_reference_cases() {
    let one_day = days(1);

    assert_eq!(date(2000, 0, 1).plus(days(0)), Ok(date(2000, 0, 1)));
    assert_eq!(date(2000, 1, 28).plus(one_day), Ok(date(2000, 1, 29)));
    assert_eq!(date(2000, 1, 29).plus(one_day), Ok(date(2000, 2, 1)));
    assert_eq!(date(2001, 1, 28).plus(one_day), Ok(date(2001, 2, 1)));
    assert_eq!(date(2001, 0, 1) - date(2000, 0, 1), days(366));
}

#[test]
fn arithmetic_errors_are_typed() {
    let half_day = Duration::from_ticks(civil_date::TICKS_PER_DAY / 2);
    assert!(matches!(date(2000, 0, 1).plus(half_day), Err(DateError::Argument(_))));
    assert!(matches!(
        date(MAX_YEAR, 11, 31).plus(days(1)),
        Err(DateError::Range(RangeError::Overflow { days: 1 }))
    ));
    assert_eq!(
        Duration::from_days(20_000_000)
            .map_err(DateError::from)
            .and_then(|huge| date(2000, 0, 1).plus(huge)),
        Err(DateError::Range(RangeError::Overflow { days: 20_000_000 }))
    );
}

#[test]
fn ordering_is_total_and_consistent_with_equality_and_hash() {
    let dates = [
        date(1999, 11, 31),
        date(2000, 0, 1),
        date(2000, 0, 2),
        date(2000, 1, 1),
        date(2000, 1, 29),
        date(2001, 0, 1),
        "2000-01-01".parse().unwrap(),
    ];

    let mut buckets: HashMap<Date, usize> = HashMap::new();
    for a in dates {
        *buckets.entry(a).or_default() += 1;
        for b in dates {
            let ord = a.cmp(&b);
            assert_eq!(ord, b.cmp(&a).reverse(), "antisymmetry for {a} and {b}");
            assert_eq!(ord == Ordering::Equal, a == b, "consistency for {a} and {b}");
            if a == b {
                assert_eq!(a.hash_code(), b.hash_code());
            }
            assert_eq!(ord, (a.days_since(b)).cmp(&0), "ordering matches day difference");
        }
    }
    assert_eq!(buckets[&date(2000, 0, 1)], 2);
}

#[test]
fn pattern_reference_cases() {
    let d = date(2009, 0, 9);
    assert_eq!(d.format_pattern("YYYY-MM-DD").as_deref(), Ok("2009-01-09"));
    assert_eq!(d.format_pattern("YYYY-Q"), Err(PatternError::UnsupportedChar('Q')));
    assert_eq!(d.format_pattern("D 'MMM"), Err(PatternError::UnterminatedLiteral));
}

#[test]
fn pattern_with_configured_locale() {
    let locale: Locale = serde_json::from_str(
        r#"{
            "tag": "de",
            "props": {
                "sys": {
                    "date": "WWWW, D. MMMM YYYY",
                    "janFull": "Januar",
                    "friFull": "Freitag"
                }
            }
        }"#,
    )
    .unwrap();

    let d = date(2009, 0, 9);
    assert_eq!(d.to_locale(None, &locale).unwrap(), "Freitag, 9. Januar 2009");
    assert_eq!(d.to_locale(Some("MMM"), &locale).unwrap(), "Jan");
    assert_eq!(d.month(), Month::January);
}

#[test]
fn construction_never_yields_invalid_dates() {
    for year in [1, 1600, 1900, 2000, 2023, 9999] {
        for month in 0..=12_u8 {
            for day in 0..=32_u8 {
                match Date::make(year, month, day) {
                    Ok(d) => {
                        assert!(month < 12);
                        assert!(day >= 1 && day <= days_in_month(year, month));
                        assert_eq!((d.year(), d.month().ordinal(), d.day()), (year, month, day));
                    },
                    Err(RangeError::InvalidMonth(m)) => assert_eq!(m, month),
                    Err(RangeError::InvalidDay { .. }) => {
                        assert!(day == 0 || day > days_in_month(year, month));
                    },
                    Err(other) => panic!("unexpected error {other}"),
                }
            }
        }
    }
}
