//! 설정 저장소 포트 구현 어댑터.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigRepository;
use crate::infrastructure::config::{self, Config};

/// 우선순위 경로 목록을 병합해 읽는 JSON 설정 저장소.
pub struct JsonConfigRepository {
    paths: Vec<PathBuf>,
}

impl Default for JsonConfigRepository {
    fn default() -> Self {
        Self::with_paths(config::config_paths())
    }
}

impl JsonConfigRepository {
    /// 탐색 경로를 직접 지정한다(낮은 우선순위 -> 높은 우선순위).
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<Config> {
        Config::load_from(self.paths.clone())
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Config::inspect_from(
            self.paths.clone(),
        )?)?)
    }
}
