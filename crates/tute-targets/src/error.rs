//! Error types for table lookups.

/// Errors that can occur while resolving platforms and tutorials.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// No platform with this identifier exists.
    #[error("unknown platform '{name}'")]
    UnknownPlatform {
        /// The identifier that was looked up.
        name: String,
    },

    /// No tutorial with this identifier exists.
    #[error("unknown tutorial '{name}'")]
    UnknownTutorial {
        /// The identifier that was looked up.
        name: String,
    },

    /// The tutorial exists but cannot be built for the platform.
    #[error("tutorial '{tutorial}' does not support platform '{platform}' (supported: {supported})")]
    Unsupported {
        tutorial: String,
        platform: String,
        /// Comma-separated list of the platforms the tutorial does support.
        supported: String,
    },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TargetError>;
