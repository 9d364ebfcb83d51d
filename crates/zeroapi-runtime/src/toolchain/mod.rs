//! Go toolchain adapter: detection, version checks, on-demand builds and
//! installation guidance.

mod go;
mod guidance;
mod version;

pub use go::GoToolchain;
pub use guidance::install_guidance;
pub use version::{MIN_GO_VERSION, is_compatible, parse_go_version};
