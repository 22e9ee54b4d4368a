//! 애플리케이션 조립(composition root) 모듈.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::Clock;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::rating::RatingService;
use crate::application::usecases::shortlist::ListService;
use crate::application::usecases::week_report::WeekReportUseCase;
use crate::domain::shortlist::ListConfig;
use crate::infrastructure::adapters::{
    JsonConfigRepository, JsonRatingRepository, MarkdownListStorage, SystemClock,
};
use crate::infrastructure::config::expand_path;

/// `track` 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct TrackComposition {
    config: Config,
    config_repo: JsonConfigRepository,
    ratings: JsonRatingRepository,
    clock: Box<dyn Clock>,
}

impl TrackComposition {
    /// 설정의 평가 파일 경로로 저장소를 연다.
    pub fn new(config_repo: JsonConfigRepository, config: Config) -> Result<Self> {
        Self::with_clock(config_repo, config, Box::new(SystemClock))
    }

    /// 시계 어댑터를 외부에서 주입한다.
    pub fn with_clock(
        config_repo: JsonConfigRepository,
        config: Config,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        let ratings = JsonRatingRepository::open(expand_path(&config.ratings_path()))?;
        Ok(Self {
            config,
            config_repo,
            ratings,
            clock,
        })
    }

    pub fn rating_service(&self) -> RatingService<'_> {
        RatingService {
            repo: &self.ratings,
            clock: self.clock.as_ref(),
        }
    }

    pub fn week_report_usecase(&self) -> WeekReportUseCase<'_> {
        WeekReportUseCase {
            repo: &self.ratings,
            clock: self.clock.as_ref(),
            trend_weeks: self.config.trend_weeks(),
        }
    }

    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }
}

/// `short` 실행 시점 의존성 컨테이너.
pub struct ShortComposition {
    config: Config,
    storage: MarkdownListStorage,
}

impl ShortComposition {
    /// `--path`가 주어지면 설정의 기준 디렉터리보다 우선한다.
    pub fn new(config: Config, path_override: Option<&str>) -> Self {
        let base_dir = match path_override.filter(|p| !p.trim().is_empty()) {
            Some(path) => expand_path(path),
            None => expand_path(&config.shortlist_base_dir()),
        };
        Self::with_base_dir(config, base_dir)
    }

    pub fn with_base_dir(config: Config, base_dir: PathBuf) -> Self {
        Self {
            config,
            storage: MarkdownListStorage::new(base_dir),
        }
    }

    pub fn storage(&self) -> &MarkdownListStorage {
        &self.storage
    }

    pub fn list_defaults(&self) -> Result<ListConfig> {
        Ok(self.config.list_defaults()?)
    }

    pub fn list_service(&self) -> ListService<'_> {
        ListService {
            storage: &self.storage,
        }
    }
}
