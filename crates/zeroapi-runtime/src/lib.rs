//! Process runtime for zeroapi.
//!
//! Resolves the API parser executable (prebuilt, previously compiled, or
//! built on demand with the Go toolchain), runs it with merged output capture
//! and decodes the result.
//!
//! ```rust,ignore
//! use zeroapi_runtime::ApiParser;
//!
//! let parser = ApiParser::auto_detect()?;
//! let doc = parser.parse_file("doc/admin.api")?;
//! println!("{:?}", doc.info());
//! ```

mod executor;
mod parser;
pub mod process;
pub mod resolver;
pub mod toolchain;

pub use executor::Executor;
pub use parser::ApiParser;
pub use resolver::{
    AttemptOutcome, ExecutableResolver, FsExecutableProbe, ProbeSource, ResolutionAttempt,
    ResolveDebugInfo, SystemInfo, is_executable_file, validate_executable,
};
pub use toolchain::{GoToolchain, MIN_GO_VERSION, install_guidance, parse_go_version};
