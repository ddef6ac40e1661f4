//! Version and usage text.

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("healthdesk {}", VERSION)
}

pub fn usage_text() -> String {
    format!(
        "{}\n\
         Terminal client for the healthcare records service.\n\
         \n\
         USAGE:\n    healthdesk [OPTIONS] [SCREEN]\n\
         \n\
         SCREEN:\n    /               Patient dashboard (default)\n    \
         /session/<id>   Session detail\n    /feedback       Session feedback\n\
         \n\
         OPTIONS:\n    -h, --help       Print this help\n    -V, --version    Print version\n\
         \n\
         ENVIRONMENT:\n    HEALTHDESK_ENV   'production' selects the production API\n    \
         RUST_LOG         Log filter (default healthdesk=info)",
        version_text()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_text().starts_with("healthdesk "));
    }

    #[test]
    fn test_usage_mentions_screens() {
        let usage = usage_text();
        assert!(usage.contains("/session/<id>"));
        assert!(usage.contains("HEALTHDESK_ENV"));
    }
}
