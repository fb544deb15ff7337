mod collection_service;
mod tweet_service;
mod wordcloud_service;

pub use collection_service::*;
pub use tweet_service::*;
pub use wordcloud_service::*;
