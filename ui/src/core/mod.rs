//! Platform-agnostic behavior behind the landing page.

pub mod platform;
pub mod reveal;
pub mod scroll;
pub mod storage;
