//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/경로 해석은 `infrastructure`에서만 수행한다.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::shortlist::{LimitHandling, ListConfig, ShortListError};

pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_TREND_WEEKS: u32 = 13;
pub const DEFAULT_RATINGS_PATH: &str = "~/.track.rating.json";
pub const DEFAULT_SHORTLIST_DIR: &str = "~/.shortlist";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 공통 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// 하루 평가(track) 설정
    #[serde(default)]
    pub track: TrackConfig,
    /// shortlist(short) 설정
    #[serde(default)]
    pub short: ShortConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 명령 하나에 허용하는 최대 실행 시간(초)
    pub command_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct TrackConfig {
    /// 평가 JSON 파일 경로(`~` 허용)
    pub ratings_path: Option<String>,
    /// report 추세 구간(주)
    pub trend_weeks: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ShortConfig {
    /// 목록 저장 기준 디렉터리(`<base>/.short/<name>.md`)
    pub base_dir: Option<String>,
    /// add-list 기본 최대 open 개수
    pub max_count: Option<usize>,
    /// add-list 기본 overflow 정책(moveLastToClosed/pushFront)
    pub limit_handling: Option<String>,
}

impl Config {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(
            self.defaults
                .command_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_COMMAND_TIMEOUT_SECS),
        )
    }

    pub fn ratings_path(&self) -> String {
        self.track
            .ratings_path
            .clone()
            .unwrap_or_else(|| DEFAULT_RATINGS_PATH.to_string())
    }

    pub fn trend_weeks(&self) -> u32 {
        self.track
            .trend_weeks
            .filter(|weeks| *weeks > 0)
            .unwrap_or(DEFAULT_TREND_WEEKS)
    }

    pub fn shortlist_base_dir(&self) -> String {
        self.short
            .base_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_SHORTLIST_DIR.to_string())
    }

    /// 새 목록의 기본 설정을 해석한다. 잘못된 값은 무시하지 않고 오류로 알린다.
    pub fn list_defaults(&self) -> Result<ListConfig, ShortListError> {
        let fallback = ListConfig::default();
        let limit_handling = match self.short.limit_handling.as_deref() {
            Some(raw) => raw.parse::<LimitHandling>()?,
            None => fallback.limit_handling,
        };
        ListConfig::new(
            self.short.max_count.unwrap_or(fallback.max_count),
            limit_handling,
        )
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
        self.track.merge_from(other.track);
        self.short.merge_from(other.short);
    }
}

impl DefaultsConfig {
    pub fn merge_from(&mut self, other: DefaultsConfig) {
        if other.command_timeout_secs.is_some() {
            self.command_timeout_secs = other.command_timeout_secs;
        }
    }
}

impl TrackConfig {
    pub fn merge_from(&mut self, other: TrackConfig) {
        if other.ratings_path.is_some() {
            self.ratings_path = other.ratings_path;
        }
        if other.trend_weeks.is_some() {
            self.trend_weeks = other.trend_weeks;
        }
    }
}

impl ShortConfig {
    pub fn merge_from(&mut self, other: ShortConfig) {
        if other.base_dir.is_some() {
            self.base_dir = other.base_dir;
        }
        if other.max_count.is_some() {
            self.max_count = other.max_count;
        }
        if other.limit_handling.is_some() {
            self.limit_handling = other.limit_handling;
        }
    }
}
