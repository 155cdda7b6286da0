pub mod fetcher;
pub mod newsapi;

pub use fetcher::HttpArticleFetcher;
pub use newsapi::NewsApiSource;

pub mod prelude {
    pub use crate::{HttpArticleFetcher, NewsApiSource};
    pub use ns_core::{ArticleFetcher, NewsSource, RawArticle, Result};
}
