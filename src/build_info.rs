//! Compile-time build information, shown by `mofdin --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line_names_package_date_and_commit() {
        assert_eq!(
            VERSION_LINE,
            format!(
                "{} ({} {})",
                env!("CARGO_PKG_VERSION"),
                BUILD_DATE,
                BUILD_COMMIT
            )
        );
    }

    #[test]
    fn test_commit_is_never_blank() {
        assert!(!BUILD_COMMIT.trim().is_empty());
        assert!(!BUILD_COMMIT.contains(char::is_whitespace));
    }
}
