pub mod fetcher;
pub mod utils;
pub mod yahoo;
pub mod yahoo_dto;

pub use fetcher::SeriesFetcher;
pub use yahoo::YahooApi;
