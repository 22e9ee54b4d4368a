//! ISO-8601 주차 기반 하루 식별자(`YYwWW-D`) 값 객체.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};

use crate::domain::rating::RatingError;

/// `25w08-1`처럼 ISO 연도(두 자리)/주차/요일로 하루를 가리키는 식별자.
///
/// 내부적으로는 달력 날짜 하나만 보관하고, 연도/주차/요일은 항상 그 날짜에서 계산한다.
/// 따라서 `from_date(d).date() == d`가 항상 성립한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayId {
    date: NaiveDate,
}

impl DayId {
    pub fn from_date(date: NaiveDate) -> Self {
        Self { date }
    }

    /// ISO (연도, 주차, 요일) 조합을 날짜로 환산한다.
    /// 해당 연도에 없는 53주차처럼 존재하지 않는 조합은 `InvalidDate`.
    pub fn from_iso(year: i32, week: u32, weekday: u32) -> Result<Self, RatingError> {
        if !(1..=7).contains(&weekday) {
            return Err(RatingError::InvalidDate(format!(
                "ISO weekday must be between 1 and 7 (Monday first), got {weekday}"
            )));
        }
        if !(1..=53).contains(&week) {
            return Err(RatingError::InvalidDate(format!(
                "ISO week must be between 1 and 53, got {week}"
            )));
        }

        let date = iso_week_start(year, week)
            .and_then(|monday| monday.checked_add_days(Days::new(u64::from(weekday - 1))))
            .filter(|date| {
                let iso = date.iso_week();
                iso.year() == year && iso.week() == week
            })
            .ok_or_else(|| RatingError::InvalidDate(format!("{year} has no ISO week {week}")))?;

        Ok(Self { date })
    }

    /// `YYwWW-D` 문자열을 해석한다. 연도는 `2000 + YY`로 본다.
    pub fn parse(input: &str) -> Result<Self, RatingError> {
        let raw = input.trim();
        let bytes = raw.as_bytes();
        if !raw.is_ascii() || bytes.len() != 7 || bytes[2] != b'w' || bytes[5] != b'-' {
            return Err(format_error(raw));
        }

        let year = parse_digits(&raw[0..2]).ok_or_else(|| format_error(raw))?;
        let week = parse_digits(&raw[3..5]).ok_or_else(|| format_error(raw))?;
        let weekday = parse_digits(&raw[6..7]).ok_or_else(|| format_error(raw))?;

        Self::from_iso(2000 + year as i32, week, weekday)
    }

    pub fn date(self) -> NaiveDate {
        self.date
    }

    /// ISO 주차 기준 연도(달력 연도와 다를 수 있음).
    pub fn year(self) -> i32 {
        self.date.iso_week().year()
    }

    pub fn week(self) -> u32 {
        self.date.iso_week().week()
    }

    /// 1=월요일 .. 7=일요일
    pub fn weekday(self) -> u32 {
        self.date.weekday().number_from_monday()
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}w{:02}-{}",
            self.year().rem_euclid(100),
            self.week(),
            self.weekday()
        )
    }
}

impl FromStr for DayId {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// ISO 연도 `year`의 `week`주차 월요일.
/// 1주차는 1월 4일이 속한 주로 정의된다.
pub fn iso_week_start(year: i32, week: u32) -> Option<NaiveDate> {
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4)?;
    let week_one = jan4.checked_sub_days(Days::new(u64::from(
        jan4.weekday().num_days_from_monday(),
    )))?;
    let offset = u64::from(week.checked_sub(1)?) * 7;
    week_one.checked_add_days(Days::new(offset))
}

/// 기준 날짜가 속한 ISO 주에서 지정 요일(1~7)의 날짜를 구한다.
pub fn weekday_in_iso_week(reference: NaiveDate, weekday: u32) -> Result<NaiveDate, RatingError> {
    let id = DayId::from_date(reference);
    DayId::from_iso(id.year(), id.week(), weekday).map(DayId::date)
}

fn parse_digits(raw: &str) -> Option<u32> {
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}

fn format_error(raw: &str) -> RatingError {
    RatingError::InvalidFormat(format!("expected YYwWW-D (e.g. 25w05-3), got '{raw}'"))
}
