use std::path::PathBuf;

/// A tool the Bitnet build needs on PATH
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tool {
    Go,
    CCompiler,
}

/// Every tool the build needs
pub const TOOLS: &[Tool] = &[Tool::Go, Tool::CCompiler];

impl Tool {
    pub fn name(&self) -> &str {
        match self {
            Tool::Go => "Go",
            Tool::CCompiler => "GCC",
        }
    }

    /// Executable looked up on PATH
    pub fn command(&self) -> &str {
        match self {
            Tool::Go => "go",
            Tool::CCompiler => "gcc",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Tool::Go => "Build driver and compiler for the Bitnet sources",
            Tool::CCompiler => "C compiler for cgo packages",
        }
    }

    pub fn locate(&self) -> Option<PathBuf> {
        which::which(self.command()).ok()
    }
}

/// Availability of each tool, in [`TOOLS`] order
pub fn check_toolchain() -> Vec<(Tool, Option<PathBuf>)> {
    TOOLS.iter().map(|tool| (*tool, tool.locate())).collect()
}

/// Prints toolchain status in a formatted table
pub fn print_toolchain_status() {
    println!("\n==================================================");
    println!("  Toolchain Status");
    println!("==================================================\n");

    let statuses = check_toolchain();

    for (tool, location) in &statuses {
        match location {
            Some(path) => println!("✓ {} ({})", tool.name(), path.display()),
            None => println!("✗ {}", tool.name()),
        }
        println!("   {}", tool.description());
        println!();
    }

    println!("==================================================\n");

    if statuses.iter().any(|(_, location)| location.is_none()) {
        println!("⚠ WARNING: Some build tools are missing!");
        println!("Run 'bitnet-prepare' to install them.\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_commands() {
        assert_eq!(Tool::Go.command(), "go");
        assert_eq!(Tool::CCompiler.command(), "gcc");
    }

    #[test]
    fn test_tools_have_descriptions() {
        for tool in TOOLS {
            assert!(!tool.name().is_empty());
            assert!(!tool.description().is_empty());
        }
    }

    #[test]
    fn test_check_toolchain_covers_every_tool() {
        let statuses = check_toolchain();
        assert_eq!(statuses.len(), TOOLS.len());
        assert_eq!(statuses[0].0, Tool::Go);
    }

    #[test]
    fn test_located_tool_exists() {
        for (_, location) in check_toolchain() {
            if let Some(path) = location {
                assert!(path.exists());
            }
        }
    }
}
