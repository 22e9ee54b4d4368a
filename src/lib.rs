//! act library root.
//! `track`(하루 평가)와 `short`(유한 목록) 두 CLI가 공유하는
//! Clean Architecture + DDD 계층을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;
