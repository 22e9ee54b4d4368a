//! 시계 포트 구현 어댑터.

use chrono::{Local, NaiveDate};

use crate::application::ports::Clock;

/// 로컬 시간대 기준 오늘 날짜를 돌려준다.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
