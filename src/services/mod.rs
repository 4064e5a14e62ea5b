pub mod csv_writer;
pub mod movie_extractor;
pub mod page_renderer;

pub use csv_writer::{CsvWriter, WriteOutcome};
pub use movie_extractor::MovieExtractor;
pub use page_renderer::{ChromeRenderer, PageRenderer};
