//! Compile-time build information, shown by `dasher --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string: `dasher <date> (<commit>)`.
pub fn version_line() -> String {
    format!("dasher {} ({})", BUILD_DATE, BUILD_COMMIT)
}
