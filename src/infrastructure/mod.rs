//! Infrastructure layer
//! 파일시스템/설정/콘솔 출력과 직접 맞닿는 구현체 집합.

pub mod adapters;
pub mod config;
pub mod list_document;
pub mod render;
