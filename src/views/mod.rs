pub mod examples;
pub mod header;
pub mod history;
pub mod query;
pub mod response;
pub mod shared;

pub use examples::ExamplesPanel;
pub use header::Header;
pub use history::HistoryPanel;
pub use query::QueryForm;
pub use response::{ErrorBanner, ResponsePanel};
