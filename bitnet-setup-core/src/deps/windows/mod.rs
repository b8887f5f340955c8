//! Windows-specific dependency installation via Chocolatey

pub mod chocolatey;
