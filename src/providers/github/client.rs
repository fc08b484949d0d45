mod contributions;
mod core;

pub use self::core::{GitHubClient, DEFAULT_API_URL};
