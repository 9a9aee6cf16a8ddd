//! Pattern formatting of dates.
//!
//! A pattern is scanned left to right:
//!
//! - `'` opens a literal run copied verbatim up to the next `'`.
//! - A run of identical `Y`, `M`, `D` or `W` letters is one field whose
//!   length picks the variant below.
//! - Any other ASCII letter is rejected; every other character is copied.
//!
//! | Field  | Output                                 |
//! |--------|----------------------------------------|
//! | `YY`   | year mod 100, two digits               |
//! | `YYYY` | year, four digits                      |
//! | `M`    | month number                           |
//! | `MM`   | month number, two digits               |
//! | `MMM`  | abbreviated month name from the locale |
//! | `MMMM` | full month name from the locale        |
//! | `D`    | day of month                           |
//! | `DD`   | day of month, two digits               |
//! | `WWW`  | abbreviated weekday name               |
//! | `WWWW` | full weekday name                      |

use crate::consts::{DEFAULT_PATTERN, LOCALE_DATE_KEY, LOCALE_DOMAIN, PATTERN_QUOTE};
use crate::{Date, Locale, LocaleResolver, PatternError};
use std::borrow::Cow;
use std::cell::OnceCell;
use tracing::{debug, trace};

/// Formats `date` with `pattern`, or with the locale's `sys::date` pattern
/// when `pattern` is `None`.
///
/// The resolver is consulted at most once, and only if the pattern needs
/// localized text.
///
/// # Errors
/// Returns `PatternError` for an unterminated literal, an unsupported
/// letter, or an unsupported run length.
pub fn format<R>(date: &Date, pattern: Option<&str>, resolver: &R) -> Result<String, PatternError>
where
    R: LocaleResolver + ?Sized,
{
    let lookups = Lookups::new(date, resolver);
    let pattern = match pattern {
        Some(pattern) => pattern,
        None => {
            let pattern = lookups
                .locale()
                .get(LOCALE_DOMAIN, LOCALE_DATE_KEY, DEFAULT_PATTERN);
            debug!(pattern, "using locale default date pattern");
            pattern
        },
    };
    render(pattern, &lookups)
}

/// Locale-dependent values, each computed on first use within one call.
struct Lookups<'r, R: ?Sized> {
    date:         &'r Date,
    resolver:     &'r R,
    locale:       OnceCell<Cow<'r, Locale>>,
    month_abbr:   OnceCell<String>,
    month_full:   OnceCell<String>,
    weekday_abbr: OnceCell<String>,
    weekday_full: OnceCell<String>,
}

impl<'r, R> Lookups<'r, R>
where
    R: LocaleResolver + ?Sized,
{
    fn new(date: &'r Date, resolver: &'r R) -> Self {
        Self {
            date,
            resolver,
            locale: OnceCell::new(),
            month_abbr: OnceCell::new(),
            month_full: OnceCell::new(),
            weekday_abbr: OnceCell::new(),
            weekday_full: OnceCell::new(),
        }
    }

    fn locale(&self) -> &Locale {
        self.locale.get_or_init(|| {
            let locale = self.resolver.resolve_current();
            trace!(locale = locale.tag(), "resolved current locale");
            locale
        })
    }

    fn month_abbr(&self) -> &str {
        self.month_abbr
            .get_or_init(|| self.date.month().abbr_name(self.locale()).to_owned())
    }

    fn month_full(&self) -> &str {
        self.month_full
            .get_or_init(|| self.date.month().full_name(self.locale()).to_owned())
    }

    fn weekday_abbr(&self) -> &str {
        self.weekday_abbr
            .get_or_init(|| self.date.weekday().abbr_name(self.locale()).to_owned())
    }

    fn weekday_full(&self) -> &str {
        self.weekday_full
            .get_or_init(|| self.date.weekday().full_name(self.locale()).to_owned())
    }
}

fn render<R>(pattern: &str, lookups: &Lookups<'_, R>) -> Result<String, PatternError>
where
    R: LocaleResolver + ?Sized,
{
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            PATTERN_QUOTE => loop {
                match chars.next() {
                    Some(PATTERN_QUOTE) => break,
                    Some(literal) => out.push(literal),
                    None => return Err(PatternError::UnterminatedLiteral),
                }
            },
            'Y' | 'M' | 'D' | 'W' => {
                let mut count = 1;
                while chars.next_if_eq(&c).is_some() {
                    count += 1;
                }
                push_field(&mut out, c, count, lookups)?;
            },
            _ if c.is_ascii_alphabetic() => return Err(PatternError::UnsupportedChar(c)),
            _ => out.push(c),
        }
    }

    Ok(out)
}

fn push_field<R>(
    out: &mut String,
    letter: char,
    count: usize,
    lookups: &Lookups<'_, R>,
) -> Result<(), PatternError>
where
    R: LocaleResolver + ?Sized,
{
    let date = lookups.date;
    match (letter, count) {
        ('Y', 2) => push_padded(out, date.year().rem_euclid(100), 2),
        ('Y', 4) => push_padded(out, date.year(), 4),
        ('M', 1) => push_padded(out, date.month().number().into(), 1),
        ('M', 2) => push_padded(out, date.month().number().into(), 2),
        ('M', 3) => out.push_str(lookups.month_abbr()),
        ('M', 4) => out.push_str(lookups.month_full()),
        ('D', 1) => push_padded(out, date.day().into(), 1),
        ('D', 2) => push_padded(out, date.day().into(), 2),
        ('W', 3) => out.push_str(lookups.weekday_abbr()),
        ('W', 4) => out.push_str(lookups.weekday_full()),
        _ => return Err(PatternError::UnsupportedCount { letter, count }),
    }
    Ok(())
}

fn push_padded(out: &mut String, value: i32, width: usize) {
    out.push_str(&format!("{value:0width$}"));
}
