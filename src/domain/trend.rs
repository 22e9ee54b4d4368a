//! 주간 요약/추세 집계 규칙.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::domain::rating::DayRating;

/// ISO 한 주의 평가 요약. 기록이 없으면 `day_count == 0`, best/worst는 `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSummary {
    pub year: i32,
    pub week: u32,
    pub average: f64,
    pub best: Option<DayRating>,
    pub worst: Option<DayRating>,
    pub day_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
    NoData,
}

impl TrendDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Flat => "→",
            Self::NoData => " ",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekTrendPoint {
    pub year: i32,
    pub week: u32,
    pub average: Option<f64>,
    pub day_count: usize,
    pub direction: TrendDirection,
}

/// 주간 요약을 계산한다.
/// 날짜순으로 정렬한 뒤 엄격 비교로 훑으므로 동점이면 가장 이른 날짜가 남는다.
pub fn summarize_week(year: i32, week: u32, ratings: &[DayRating]) -> WeekSummary {
    let mut sorted: Vec<&DayRating> = ratings.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let Some(first) = sorted.first().copied() else {
        return WeekSummary {
            year,
            week,
            average: 0.0,
            best: None,
            worst: None,
            day_count: 0,
        };
    };

    let mut best = first;
    let mut worst = first;
    let mut sum = 0u32;
    for r in &sorted {
        sum += u32::from(r.rating.value());
        if r.rating > best.rating {
            best = r;
        }
        if r.rating < worst.rating {
            worst = r;
        }
    }

    WeekSummary {
        year,
        week,
        average: f64::from(sum) / sorted.len() as f64,
        best: Some(best.clone()),
        worst: Some(worst.clone()),
        day_count: sorted.len(),
    }
}

/// `end`가 속한 주를 마지막으로 하는 `weeks`개 ISO 주의 첫 월요일.
pub fn trend_window_start(end: NaiveDate, weeks: u32) -> NaiveDate {
    let back = u64::from(end.weekday().num_days_from_monday())
        + u64::from(weeks.max(1) - 1) * 7;
    end.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
}

/// 주 단위 평균 추세를 오래된 주부터 나열한다.
/// 방향은 직전에 데이터가 있던 주의 평균과 비교한다.
pub fn weekly_trend(end: NaiveDate, weeks: u32, ratings: &[DayRating]) -> Vec<WeekTrendPoint> {
    let mut buckets: BTreeMap<(i32, u32), (u32, usize)> = BTreeMap::new();
    for r in ratings {
        let iso = r.date.iso_week();
        let entry = buckets.entry((iso.year(), iso.week())).or_default();
        entry.0 += u32::from(r.rating.value());
        entry.1 += 1;
    }

    let weeks = weeks.max(1);
    let mut points = Vec::with_capacity(weeks as usize);
    let mut previous: Option<f64> = None;

    for back in (0..weeks).rev() {
        let Some(day) = end.checked_sub_days(Days::new(u64::from(back) * 7)) else {
            continue;
        };
        let iso = day.iso_week();
        let key = (iso.year(), iso.week());

        match buckets.get(&key) {
            Some(&(sum, count)) if count > 0 => {
                let avg = f64::from(sum) / count as f64;
                let direction = match previous {
                    Some(prev) if avg > prev => TrendDirection::Up,
                    Some(prev) if avg < prev => TrendDirection::Down,
                    _ => TrendDirection::Flat,
                };
                previous = Some(avg);
                points.push(WeekTrendPoint {
                    year: key.0,
                    week: key.1,
                    average: Some(avg),
                    day_count: count,
                    direction,
                });
            }
            _ => points.push(WeekTrendPoint {
                year: key.0,
                week: key.1,
                average: None,
                day_count: 0,
                direction: TrendDirection::NoData,
            }),
        }
    }

    points
}
