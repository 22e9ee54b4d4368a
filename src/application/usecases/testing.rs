//! 유스케이스 단위 테스트용 인메모리 포트 구현.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use crate::application::ports::{Clock, ListStorage, RatingRepository};
use crate::domain::day_id::DayId;
use crate::domain::rating::DayRating;
use crate::domain::shortlist::{ListConfig, ShortList};

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Default)]
pub struct MemoryRatingRepository {
    ratings: Mutex<HashMap<String, DayRating>>,
}

impl MemoryRatingRepository {
    pub fn is_empty(&self) -> bool {
        self.ratings.lock().unwrap().is_empty()
    }
}

impl RatingRepository for MemoryRatingRepository {
    fn save(&self, rating: &DayRating) -> Result<()> {
        self.ratings
            .lock()
            .unwrap()
            .insert(rating.id.clone(), rating.clone());
        Ok(())
    }

    fn get_by_id(&self, id: &DayId) -> Result<Option<DayRating>> {
        Ok(self.ratings.lock().unwrap().get(&id.to_string()).cloned())
    }

    fn get_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<DayRating>> {
        Ok(self
            .ratings
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect())
    }

    fn get_by_week(&self, year: i32, week: u32) -> Result<Vec<DayRating>> {
        Ok(self
            .ratings
            .lock()
            .unwrap()
            .values()
            .filter(|r| {
                let iso = r.date.iso_week();
                iso.year() == year && iso.week() == week
            })
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryListStorage {
    lists: Mutex<HashMap<String, ShortList>>,
}

impl MemoryListStorage {
    pub fn saved(&self, name: &str) -> Option<ShortList> {
        self.lists.lock().unwrap().get(name).cloned()
    }
}

impl ListStorage for MemoryListStorage {
    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.lists.lock().unwrap().contains_key(name))
    }

    fn load(&self, name: &str) -> Result<ShortList> {
        Ok(self
            .lists
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .unwrap_or_else(|| ShortList::new(name, ListConfig::default())))
    }

    fn save(&self, list: &ShortList) -> Result<()> {
        self.lists
            .lock()
            .unwrap()
            .insert(list.name.clone(), list.clone());
        Ok(())
    }
}
