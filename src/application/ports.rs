//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use chrono::NaiveDate;

use crate::application::config::Config;
use crate::domain::day_id::DayId;
use crate::domain::rating::DayRating;
use crate::domain::shortlist::ShortList;

/// 하루 평가 기록 저장소 포트.
/// 반환 순서는 보장하지 않는다(정렬은 서비스에서 수행).
pub trait RatingRepository: Send + Sync {
    /// 같은 식별자의 기존 기록은 덮어쓴다.
    fn save(&self, rating: &DayRating) -> Result<()>;
    fn get_by_id(&self, id: &DayId) -> Result<Option<DayRating>>;
    /// `start..=end` 범위의 기록.
    fn get_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DayRating>>;
    fn get_by_week(&self, year: i32, week: u32) -> Result<Vec<DayRating>>;
}

/// shortlist 문서 저장소 포트. 목록 단위로 통째로 읽고 쓴다.
pub trait ListStorage: Send + Sync {
    fn exists(&self, name: &str) -> Result<bool>;
    /// 없는 목록은 기본 설정의 빈 목록으로 돌려준다.
    fn load(&self, name: &str) -> Result<ShortList>;
    fn save(&self, list: &ShortList) -> Result<()>;
}

/// "오늘" 날짜 공급 포트.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}
