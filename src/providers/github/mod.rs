mod client;
mod core;
mod types;

pub use self::client::DEFAULT_API_URL;
pub use self::core::GitHubProvider;
pub use self::types::ContributionHistory;
