//! 애플리케이션 유스케이스 모음.

pub mod inspect_config;
pub mod rating;
pub mod shortlist;
pub mod week_report;

#[cfg(test)]
pub(crate) mod testing;
