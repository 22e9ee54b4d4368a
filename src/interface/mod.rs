//! Interface layer
//! CLI 파싱, 의존성 조립, 실행 시간 제한, 로그 초기화를 담당한다.

pub mod cli;
pub mod composition;
pub mod logging;
pub mod runtime;
