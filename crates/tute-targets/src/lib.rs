//! Platform and tutorial tables for the seL4 tutorial builder.
//!
//! Two static tables drive every build:
//! - **Platforms:** each target board maps to the ordered list of flags
//!   handed to the build-file generator.
//! - **Tutorials:** each exercise declares the platforms it can be built for.
//!
//! Both are closed enums, so adding a platform or tutorial forces every
//! `match` over them to be revisited.

pub mod error;
pub mod parse;
pub mod platform;
pub mod tutorial;

pub use error::{Result, TargetError};
pub use parse::validate_selection;
pub use platform::Platform;
pub use tutorial::Tutorial;
