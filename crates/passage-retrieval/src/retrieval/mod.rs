//! Two-stage relevance resolution

mod resolver;
mod sentence;

pub use resolver::Resolver;
pub use sentence::split_sentences;
