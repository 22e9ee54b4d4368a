//! CLI 인터페이스 모듈 묶음.
//! 두 바이너리(`track`, `short`)의 입력 파싱과 명령 실행을 담당한다.

pub mod short;
pub mod track;

pub use short::{ShortAction, ShortCli, ShortInvocation};
pub use track::{TrackAction, TrackCli};
