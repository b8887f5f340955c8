//! macOS-specific dependency installation via Homebrew

pub mod homebrew;
