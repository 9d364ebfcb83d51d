//! Platform-specific Go installation instructions.

use zeroapi_core::{OsFamily, PlatformInfo};

const GO_DOWNLOAD_URL: &str = "https://go.dev/dl/";

/// Build the message carried by `ToolchainUnavailable`.
///
/// Names the detected OS and architecture, then lists the installation
/// routes for that OS family.
pub fn install_guidance(platform: &PlatformInfo) -> String {
    let mut message =
        String::from("No usable API parser was found. Install the Go toolchain and try again.\n\n");
    message.push_str(&format!("Current system: {} {}\n\n", platform.os, platform.arch));
    message.push_str("Go installation guide:\n");

    match platform.family() {
        OsFamily::MacOs => {
            message.push_str("macOS:\n");
            message.push_str("  1. Homebrew: brew install go\n");
            message.push_str(&format!("  2. Download: {GO_DOWNLOAD_URL}\n"));
            message.push_str("  3. MacPorts: sudo port install go\n");
        }
        OsFamily::Linux => {
            message.push_str("Linux:\n");
            message.push_str("  1. Ubuntu/Debian: sudo apt-get install golang\n");
            message.push_str("  2. CentOS/RHEL: sudo yum install golang (or sudo dnf install golang)\n");
            message.push_str("  3. Arch Linux: sudo pacman -S go\n");
            message.push_str(&format!("  4. Download: {GO_DOWNLOAD_URL}\n"));
        }
        OsFamily::Windows => {
            message.push_str("Windows:\n");
            message.push_str(&format!("  1. Installer: {GO_DOWNLOAD_URL}\n"));
            message.push_str("  2. Chocolatey: choco install golang\n");
            message.push_str("  3. Scoop: scoop install go\n");
        }
        OsFamily::Other => {
            message.push_str(&format!(
                "  Download a release for your system from {GO_DOWNLOAD_URL}\n"
            ));
        }
    }

    message.push_str("\nAfter installing, run the program again.");
    message
}
