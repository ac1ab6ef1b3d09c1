use thiserror::Error;

/// Which of the two dashboard requests an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Accounts,
    Profile,
}

impl Endpoint {
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Accounts => "accounts",
            Endpoint::Profile => "profile",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum DashboardError {
    /// At least one of the two requests came back with a non-2xx status.
    ///
    /// The statuses are kept for logging only; the user sees one message for both.
    #[error("failed to fetch data")]
    FetchFailed {
        accounts_status: u16,
        profile_status: u16,
    },

    #[error("{endpoint} request failed: {message}")]
    Transport { endpoint: Endpoint, message: String },

    #[error("{endpoint} response was not valid JSON: {source}")]
    MalformedBody {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    #[error("dom: {0}")]
    Dom(String),

    #[error("invalid dashboard config: {0}")]
    Config(#[from] serde_json::Error),
}
