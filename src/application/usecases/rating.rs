//! 하루 평가 기록/조회 유스케이스.

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};

use crate::application::ports::{Clock, RatingRepository};
use crate::domain::day_id::{DayId, weekday_in_iso_week};
use crate::domain::rating::{DayRating, Rating, RatingError};
use crate::domain::trend::{WeekSummary, WeekTrendPoint, summarize_week, trend_window_start, weekly_trend};

/// 직전 기록을 찾을 때 되돌아보는 최대 일수.
pub const LOOKBACK_DAYS: u64 = 30;

/// `day set` 실행 결과(저장한 기록 + 빈 날 채우기 결과).
#[derive(Debug, Clone)]
pub struct SetOutcome {
    pub rating: DayRating,
    pub filled: Vec<DayRating>,
}

/// 평가 저장소와 시계를 주입받아 평가 업무 규칙을 수행한다.
pub struct RatingService<'a> {
    pub repo: &'a dyn RatingRepository,
    pub clock: &'a dyn Clock,
}

impl<'a> RatingService<'a> {
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// 날짜에 평가를 기록한다. 같은 날의 기존 기록은 덮어쓴다.
    pub fn add_day_rating(&self, date: NaiveDate, rating: Rating) -> Result<DayRating> {
        let day_rating = DayRating::new(date, rating);
        self.repo
            .save(&day_rating)
            .with_context(|| format!("saving day rating {}", day_rating.id))?;
        tracing::info!(id = %day_rating.id, rating = rating.value(), "day rating saved");
        Ok(day_rating)
    }

    /// 정수 점수를 검증한 뒤 기록한다.
    pub fn add_day_rating_value(&self, date: NaiveDate, value: i64) -> Result<DayRating> {
        let rating = Rating::new(value)?;
        self.add_day_rating(date, rating)
    }

    pub fn get_rating(&self, id: &DayId) -> Result<DayRating> {
        self.repo
            .get_by_id(id)?
            .ok_or_else(|| RatingError::NotFound(id.to_string()).into())
    }

    pub fn get_today_rating(&self) -> Result<DayRating> {
        self.get_rating(&DayId::from_date(self.today()))
    }

    pub fn update_today_rating(&self, rating: Rating) -> Result<DayRating> {
        self.add_day_rating(self.today(), rating)
    }

    /// ISO 연도/주차에 속한 기록을 날짜순으로 반환한다.
    pub fn get_week_ratings(&self, year: i32, week: u32) -> Result<Vec<DayRating>> {
        let mut ratings = self.repo.get_by_week(year, week)?;
        ratings.sort_by_key(|r| r.date);
        Ok(ratings)
    }

    pub fn get_current_week_ratings(&self) -> Result<Vec<DayRating>> {
        let id = DayId::from_date(self.today());
        self.get_week_ratings(id.year(), id.week())
    }

    /// 양 끝을 포함하는 날짜 범위의 기록을 날짜순으로 반환한다.
    pub fn get_date_range_ratings(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DayRating>> {
        if end < start {
            return Err(RatingError::InvalidDate(format!(
                "end date {end} is before start date {start}"
            ))
            .into());
        }

        let mut ratings = self.repo.get_by_date_range(start, end)?;
        ratings.sort_by_key(|r| r.date);
        Ok(ratings)
    }

    pub fn get_week_summary(&self, year: i32, week: u32) -> Result<WeekSummary> {
        let ratings = self
            .repo
            .get_by_week(year, week)
            .context("getting week ratings")?;
        Ok(summarize_week(year, week, &ratings))
    }

    /// `end`가 속한 주까지 `weeks`주 동안의 주간 평균 추세.
    pub fn get_week_trend(&self, end: NaiveDate, weeks: u32) -> Result<Vec<WeekTrendPoint>> {
        let start = trend_window_start(end, weeks);
        let ratings = self
            .get_date_range_ratings(start, end)
            .context("getting trend data")?;
        Ok(weekly_trend(end, weeks, &ratings))
    }

    /// `start`와 `end` 사이(양 끝 제외)의 기록 없는 날을 `rating`으로 채운다.
    /// 채운 기록을 날짜순으로 반환한다.
    pub fn fill_missing_ratings(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        rating: Rating,
    ) -> Result<Vec<DayRating>> {
        let mut filled = Vec::new();
        let mut current = start.checked_add_days(Days::new(1));

        while let Some(day) = current.filter(|day| *day < end) {
            if self.repo.get_by_id(&DayId::from_date(day))?.is_none() {
                filled.push(self.add_day_rating(day, rating)?);
            }
            current = day.checked_add_days(Days::new(1));
        }

        Ok(filled)
    }

    /// `date` 이전(당일 제외) 가장 최근 기록. 최근 30일 안에서만 찾는다.
    pub fn get_last_rating_before(&self, date: NaiveDate) -> Result<Option<DayRating>> {
        let start = date
            .checked_sub_days(Days::new(LOOKBACK_DAYS))
            .unwrap_or(NaiveDate::MIN);
        let ratings = self.repo.get_by_date_range(start, date)?;

        Ok(ratings
            .into_iter()
            .filter(|r| r.date < date)
            .max_by_key(|r| r.date))
    }

    /// `day set` 흐름: 기록 후, 요청 시 직전 기록과의 빈 날을 같은 점수로 채운다.
    pub fn set_day_rating(&self, date: NaiveDate, rating: Rating, fill_gaps: bool) -> Result<SetOutcome> {
        let saved = self.add_day_rating(date, rating)?;

        let mut filled = Vec::new();
        if fill_gaps
            && let Some(last) = self
                .get_last_rating_before(date)
                .context("getting last rating")?
        {
            filled = self
                .fill_missing_ratings(last.date, date, rating)
                .context("filling gaps")?;
        }

        Ok(SetOutcome {
            rating: saved,
            filled,
        })
    }

    /// 기준 날짜의 ISO 주 안에서 요일(1~7)에 해당하는 날짜.
    pub fn weekday_in_week_of(&self, reference: NaiveDate, weekday: u32) -> Result<NaiveDate> {
        Ok(weekday_in_iso_week(reference, weekday)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::testing::{FixedClock, MemoryRatingRepository};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service<'a>(repo: &'a MemoryRatingRepository, clock: &'a FixedClock) -> RatingService<'a> {
        RatingService { repo, clock }
    }

    #[test]
    fn adding_twice_on_one_day_keeps_latest_value() {
        let repo = MemoryRatingRepository::default();
        let clock = FixedClock(ymd(2025, 2, 19));
        let svc = service(&repo, &clock);

        svc.add_day_rating(ymd(2025, 2, 17), Rating::Poor).unwrap();
        svc.add_day_rating(ymd(2025, 2, 17), Rating::Awesome).unwrap();

        let week = svc.get_week_ratings(2025, 8).unwrap();
        assert_eq!(week.len(), 1);
        assert_eq!(week[0].rating, Rating::Awesome);
        assert_eq!(week[0].id, "25w08-1");
    }

    #[test]
    fn invalid_score_is_rejected_before_saving() {
        let repo = MemoryRatingRepository::default();
        let clock = FixedClock(ymd(2025, 2, 19));
        let svc = service(&repo, &clock);

        let err = svc.add_day_rating_value(ymd(2025, 2, 17), 6).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RatingError>(),
            Some(&RatingError::InvalidRating(6))
        );
        assert!(repo.is_empty());
    }

    #[test]
    fn fill_missing_skips_endpoints_and_existing_days() {
        let repo = MemoryRatingRepository::default();
        let clock = FixedClock(ymd(2025, 2, 21));
        let svc = service(&repo, &clock);

        let filled = svc
            .fill_missing_ratings(ymd(2025, 2, 17), ymd(2025, 2, 21), Rating::Good)
            .unwrap();
        let ids: Vec<_> = filled.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["25w08-2", "25w08-3", "25w08-4"]);

        svc.add_day_rating(ymd(2025, 2, 24), Rating::Bad).unwrap();
        let filled = svc
            .fill_missing_ratings(ymd(2025, 2, 19), ymd(2025, 2, 26), Rating::Fair)
            .unwrap();
        let ids: Vec<_> = filled.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["25w08-5", "25w08-6", "25w08-7", "25w09-2"]);
    }

    #[test]
    fn last_rating_lookup_is_bounded_to_thirty_days() {
        let repo = MemoryRatingRepository::default();
        let clock = FixedClock(ymd(2025, 3, 31));
        let svc = service(&repo, &clock);

        svc.add_day_rating(ymd(2025, 2, 28), Rating::Good).unwrap();
        assert!(svc.get_last_rating_before(ymd(2025, 3, 31)).unwrap().is_none());

        svc.add_day_rating(ymd(2025, 3, 1), Rating::Fair).unwrap();
        svc.add_day_rating(ymd(2025, 3, 31), Rating::Bad).unwrap();
        let last = svc.get_last_rating_before(ymd(2025, 3, 31)).unwrap().unwrap();
        assert_eq!(last.date, ymd(2025, 3, 1));
    }

    #[test]
    fn set_with_fill_closes_gap_since_last_rating() {
        let repo = MemoryRatingRepository::default();
        let clock = FixedClock(ymd(2025, 2, 21));
        let svc = service(&repo, &clock);

        svc.add_day_rating(ymd(2025, 2, 17), Rating::Fair).unwrap();
        let outcome = svc.set_day_rating(ymd(2025, 2, 20), Rating::Good, true).unwrap();

        assert_eq!(outcome.rating.id, "25w08-4");
        assert_eq!(outcome.filled.len(), 2);
        assert_eq!(svc.get_week_ratings(2025, 8).unwrap().len(), 4);

        let outcome = svc.set_day_rating(ymd(2025, 2, 23), Rating::Bad, false).unwrap();
        assert!(outcome.filled.is_empty());
    }

    #[test]
    fn date_range_rejects_reversed_bounds() {
        let repo = MemoryRatingRepository::default();
        let clock = FixedClock(ymd(2025, 2, 21));
        let svc = service(&repo, &clock);

        let err = svc
            .get_date_range_ratings(ymd(2025, 2, 21), ymd(2025, 2, 20))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RatingError>(),
            Some(RatingError::InvalidDate(_))
        ));
        assert!(svc
            .get_date_range_ratings(ymd(2025, 2, 21), ymd(2025, 2, 21))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn today_helpers_follow_clock() {
        let repo = MemoryRatingRepository::default();
        let clock = FixedClock(ymd(2025, 2, 19));
        let svc = service(&repo, &clock);

        let err = svc.get_today_rating().unwrap_err();
        assert_eq!(
            err.downcast_ref::<RatingError>(),
            Some(&RatingError::NotFound("25w08-3".into()))
        );

        svc.update_today_rating(Rating::Good).unwrap();
        assert_eq!(svc.get_today_rating().unwrap().rating, Rating::Good);
        assert_eq!(svc.get_current_week_ratings().unwrap().len(), 1);
    }

    #[test]
    fn empty_week_summary_is_zero_valued() {
        let repo = MemoryRatingRepository::default();
        let clock = FixedClock(ymd(2025, 2, 19));
        let svc = service(&repo, &clock);

        let summary = svc.get_week_summary(2025, 8).unwrap();
        assert_eq!(summary.day_count, 0);
        assert!(summary.best.is_none() && summary.worst.is_none());
    }
}
