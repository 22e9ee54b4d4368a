//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod json_rating_repository;
mod markdown_list_storage;
mod system_clock;

pub use config_repository::JsonConfigRepository;
pub use json_rating_repository::JsonRatingRepository;
pub use markdown_list_storage::MarkdownListStorage;
pub use system_clock::SystemClock;
