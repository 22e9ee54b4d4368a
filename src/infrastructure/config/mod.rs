//! 사용자 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합하고, 진단용 정보를 함께 제공한다.

mod inspection;
mod loader;
mod utils;

use std::path::PathBuf;

use anyhow::Result;

pub use crate::application::config::Config;
pub use inspection::{ConfigInspection, EffectiveConfig, ListDefaultsInspection};
pub use loader::{CONFIG_ENV, config_paths};
pub use utils::expand_path;

impl Config {
    /// 주어진 경로들(낮은 우선순위 먼저)을 병합해 로딩한다.
    pub fn load_from(paths: Vec<PathBuf>) -> Result<Self> {
        Ok(loader::load_from_paths(paths)?.config)
    }

    /// 디버깅/진단용 설정 정보를 구성한다.
    pub fn inspect_from(paths: Vec<PathBuf>) -> Result<ConfigInspection> {
        let loaded = loader::load_from_paths(paths)?;
        Ok(ConfigInspection::from_loaded(loaded))
    }
}
