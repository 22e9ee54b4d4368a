//! 평가 저장소 포트 구현 어댑터(단일 JSON 파일).

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, NaiveDate};

use crate::application::ports::RatingRepository;
use crate::domain::day_id::DayId;
use crate::domain::rating::DayRating;

/// 식별자 -> 기록 맵을 JSON 문서 하나로 보관하는 저장소.
///
/// 생성 시 한 번 읽어 메모리에 두고, 저장할 때마다 문서 전체를 다시 쓴다.
/// 인스턴스 전체가 mutex 하나로 직렬화된다(프로세스 간 잠금은 없음).
pub struct JsonRatingRepository {
    path: PathBuf,
    ratings: Mutex<BTreeMap<String, DayRating>>,
}

impl JsonRatingRepository {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let ratings = load_ratings(&path)?;
        tracing::debug!(path = %path.display(), count = ratings.len(), "ratings loaded");

        Ok(Self {
            path,
            ratings: Mutex::new(ratings),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, DayRating>>> {
        self.ratings
            .lock()
            .map_err(|_| anyhow!("rating store lock poisoned"))
    }

    fn select<F>(&self, keep: F) -> Result<Vec<DayRating>>
    where
        F: Fn(&DayRating) -> bool,
    {
        Ok(self.lock()?.values().filter(|r| keep(r)).cloned().collect())
    }
}

impl RatingRepository for JsonRatingRepository {
    fn save(&self, rating: &DayRating) -> Result<()> {
        let mut ratings = self.lock()?;
        let previous = ratings.insert(rating.id.clone(), rating.clone());

        if let Err(err) = write_ratings(&self.path, &ratings) {
            // 파일 쓰기에 실패하면 메모리 상태도 되돌린다.
            match previous {
                Some(prev) => ratings.insert(rating.id.clone(), prev),
                None => ratings.remove(&rating.id),
            };
            return Err(err);
        }
        Ok(())
    }

    fn get_by_id(&self, id: &DayId) -> Result<Option<DayRating>> {
        Ok(self.lock()?.get(&id.to_string()).cloned())
    }

    fn get_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DayRating>> {
        self.select(|r| r.date >= start && r.date <= end)
    }

    fn get_by_week(&self, year: i32, week: u32) -> Result<Vec<DayRating>> {
        self.select(|r| {
            let iso = r.date.iso_week();
            iso.year() == year && iso.week() == week
        })
    }
}

fn load_ratings(path: &Path) -> Result<BTreeMap<String, DayRating>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read ratings at {}", path.display()));
        }
    };

    if raw.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse JSON in {}", path.display()))
}

/// 임시 파일에 쓴 뒤 rename 해서 문서를 통째로 교체한다.
fn write_ratings(path: &Path, ratings: &BTreeMap<String, DayRating>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(ratings).context("serializing ratings")?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, format!("{rendered}\n"))
        .with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("failed to replace ratings at {}", path.display()))?;

    tracing::debug!(path = %path.display(), count = ratings.len(), "ratings written");
    Ok(())
}
