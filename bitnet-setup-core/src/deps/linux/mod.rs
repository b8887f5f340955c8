//! Linux-specific dependency installation
//!
//! Only apt-get based distributions (Debian, Ubuntu) are handled.

pub mod apt;
