//! 이번 주 요약 + 일별 목록 + 다주 추세를 묶은 report 유스케이스.

use anyhow::{Context, Result};

use crate::application::ports::{Clock, RatingRepository};
use crate::application::usecases::rating::RatingService;
use crate::domain::day_id::DayId;
use crate::domain::rating::DayRating;
use crate::domain::trend::{WeekSummary, WeekTrendPoint};

#[derive(Debug, Clone)]
pub struct WeekReport {
    pub summary: WeekSummary,
    pub days: Vec<DayRating>,
    pub trend: Vec<WeekTrendPoint>,
}

pub struct WeekReportUseCase<'a> {
    pub repo: &'a dyn RatingRepository,
    pub clock: &'a dyn Clock,
    pub trend_weeks: u32,
}

impl<'a> WeekReportUseCase<'a> {
    /// 시계 기준 현재 ISO 주의 report를 만든다.
    pub fn execute(&self) -> Result<WeekReport> {
        let service = RatingService {
            repo: self.repo,
            clock: self.clock,
        };
        let today = service.today();
        let current = DayId::from_date(today);

        let summary = service
            .get_week_summary(current.year(), current.week())
            .context("getting week summary")?;
        let days = service
            .get_week_ratings(current.year(), current.week())
            .context("getting week ratings")?;
        let trend = service.get_week_trend(today, self.trend_weeks)?;

        Ok(WeekReport {
            summary,
            days,
            trend,
        })
    }
}
