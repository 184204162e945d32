use thiserror::Error;

/// Fatal generation failures.
///
/// These surface through `eyre::Report`; callers that need to branch on the
/// kind use `report.downcast_ref::<GenerateError>()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// An action binds more than one parameter from the request body.
    #[error(
        "only one complex type may be bound from the request body, but action '{action}' ({url}) binds more than one"
    )]
    InvalidBinding { action: String, url: String },

    /// No generator is registered under the requested name.
    #[error("unknown generator '{name}' (available: {})", .available.join(", "))]
    UnknownGenerator {
        name: String,
        available: Vec<String>,
    },
}
