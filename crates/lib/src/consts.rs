//! Fixed project values and packaging constants.

/// Name of the tool, used in the `WHEEL` generator line and log output.
pub const APP_NAME: &str = "opengv-dist";

/// Version of the tool, recorded in the `WHEEL` generator line.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PROJECT_NAME: &str = "opengv";
pub const PROJECT_VERSION: &str = "0.0.0a0";
pub const PROJECT_DESCRIPTION: &str = "A collection of computer vision methods for solving geometric vision problems";
pub const PROJECT_URL: &str = "https://github.com/laurentkneip/opengv";
pub const PROJECT_DOCUMENTATION_URL: &str = "http://laurentkneip.github.io/opengv/";
pub const PROJECT_AUTHOR: &str = "Laurent Kneip";
pub const PROJECT_LICENSE: &str = "BSD";

/// The single Python package shipped by the project.
pub const PACKAGE_NAME: &str = "pyopengv";

/// Dotted module path of the externally built extension.
pub const EXTENSION_NAME: &str = "pyopengv.pyopengv";

/// Package-data pattern selecting the extension binary on every platform.
pub const EXTENSION_DATA_PATTERN: &str = "pyopengv.*";

/// Default long-description resource, relative to the project directory.
pub const README_FILENAME: &str = "README.txt";

/// Default output directory, relative to the project directory.
pub const DIST_DIR: &str = "dist";

pub const METADATA_VERSION: &str = "2.1";
pub const WHEEL_VERSION: &str = "1.0";

/// Interpreter tag of a pure wheel.
pub const PURE_PYTHON_TAG: &str = "py3";
pub const PURE_ABI_TAG: &str = "none";
pub const PURE_PLATFORM_TAG: &str = "any";
