//! Link-graph corpus model and anchor extraction

mod corpus;
mod link_extractor;

pub use corpus::{Corpus, CorpusBuilder};
pub use link_extractor::extract_links;
