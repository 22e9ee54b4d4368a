//! Domain layer
//! 평가/주차/목록 규칙을 외부 의존성(파일, CLI) 없이 표현한다.

pub mod day_id;
pub mod rating;
pub mod shortlist;
pub mod trend;
