//! opengv-dist-lib: packaging core for the pyopengv Python binding
//!
//! This crate builds the installable wheel for a package whose native
//! extension is compiled elsewhere and dropped into the package directory:
//! - `metadata`: the package descriptor and its `METADATA` rendering
//! - `extension`: prebuilt/compiled extension registration
//! - `package_data`: glob selection of bundled files
//! - `tag`: purity and compatibility tags, including the platform override
//! - `build`: the staged build run behind both entry points
//! - `wheel`: archive emission with `RECORD` bookkeeping

pub mod build;
pub mod config;
pub mod consts;
pub mod extension;
pub mod metadata;
pub mod package_data;
pub mod platform;
pub mod tag;
pub mod util;
pub mod warning;
pub mod wheel;

pub use build::{BuildError, BuildReport, BuildRun, BuildState, EntryPoint, build};
pub use config::{BuildConfig, TargetConfig};
