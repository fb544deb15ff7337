mod repository_error;
mod tweet_repo;

pub use repository_error::*;
pub use tweet_repo::*;
