//! Host platform classification

use std::fmt;

/// Platform family that decides which package manager applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    Other,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Linux => "linux",
            Platform::MacOs => "macOS",
            Platform::Windows => "windows",
            Platform::Other => "other",
        };
        f.write_str(name)
    }
}

/// Identifier prefixes, matched case-insensitively in order
const PREFIXES: &[(&str, Platform)] = &[
    ("linux", Platform::Linux),
    ("darwin", Platform::MacOs),
    ("win", Platform::Windows),
];

/// Classifies a host identifier such as `linux`, `darwin` or `win32`
pub fn resolve_platform(host_id: &str) -> Platform {
    let host_id = host_id.to_ascii_lowercase();
    PREFIXES
        .iter()
        .find(|(prefix, _)| host_id.starts_with(prefix))
        .map(|(_, platform)| *platform)
        .unwrap_or(Platform::Other)
}

/// Identifier of the running host, in the `linux` / `darwin` / `win32` vocabulary
pub fn host_identifier() -> &'static str {
    match std::env::consts::OS {
        "linux" => "linux",
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}
