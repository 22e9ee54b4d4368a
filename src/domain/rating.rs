//! 하루 평가 도메인 엔티티/값 객체.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::day_id::DayId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(i64),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("rating not found: {0}")]
    NotFound(String),
}

/// 1~5 단계 평가 점수. 범위를 벗어난 값으로는 만들 수 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    Bad = 1,
    Poor = 2,
    Fair = 3,
    Good = 4,
    Awesome = 5,
}

impl Rating {
    pub fn new(value: i64) -> Result<Self, RatingError> {
        match value {
            1 => Ok(Self::Bad),
            2 => Ok(Self::Poor),
            3 => Ok(Self::Fair),
            4 => Ok(Self::Good),
            5 => Ok(Self::Awesome),
            other => Err(RatingError::InvalidRating(other)),
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Bad => "Bad",
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Awesome => "Awesome",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Bad => "💩",
            Self::Poor => "😠",
            Self::Fair => "😐",
            Self::Good => "😊",
            Self::Awesome => "🤩",
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    /// CLI 점수 인자(`"4"`)를 해석한다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| {
            RatingError::InvalidFormat(format!("score must be a number between 1 and 5, got '{s}'"))
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 특정 날짜의 평가 기록.
/// `id`는 날짜에서 파생되는 `YYwWW-D` 문자열이며 저장소 키로 쓰인다(하루 한 건).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRating {
    pub id: String,
    pub date: NaiveDate,
    pub rating: Rating,
}

impl DayRating {
    pub fn new(date: NaiveDate, rating: Rating) -> Self {
        Self {
            id: DayId::from_date(date).to_string(),
            date,
            rating,
        }
    }

    pub fn day_id(&self) -> DayId {
        DayId::from_date(self.date)
    }
}

impl fmt::Display for DayRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.id, self.rating, self.rating.emoji())
    }
}
