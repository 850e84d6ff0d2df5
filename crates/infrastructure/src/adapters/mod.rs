//! Port adapters

mod reqwest_client;
mod spec_fetcher;

pub use reqwest_client::ReqwestHttpClient;
pub use spec_fetcher::ReqwestSpecFetcher;
