//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::utils::expand_path;
use crate::application::config::{DefaultsConfig, ShortConfig, TrackConfig};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub track: TrackConfig,
    pub short: ShortConfig,
    pub effective: EffectiveConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    pub command_timeout_secs: u64,
    pub ratings_path: String,
    pub trend_weeks: u32,
    pub shortlist_dir: String,
    /// 잘못된 값이면 오류 메시지를 그대로 보여준다.
    pub list_defaults: Result<ListDefaultsInspection, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListDefaultsInspection {
    pub max_count: usize,
    pub limit_handling: String,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = &loaded.config;
        let effective = EffectiveConfig {
            command_timeout_secs: config.command_timeout().as_secs(),
            ratings_path: expand_path(&config.ratings_path()).display().to_string(),
            trend_weeks: config.trend_weeks(),
            shortlist_dir: expand_path(&config.shortlist_base_dir())
                .join(".short")
                .display()
                .to_string(),
            list_defaults: config
                .list_defaults()
                .map(|defaults| ListDefaultsInspection {
                    max_count: defaults.max_count,
                    limit_handling: defaults.limit_handling.to_string(),
                })
                .map_err(|err| err.to_string()),
        };

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: config.defaults.clone(),
            track: config.track.clone(),
            short: config.short.clone(),
            effective,
        }
    }
}
