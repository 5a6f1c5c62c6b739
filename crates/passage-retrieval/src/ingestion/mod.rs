//! Document ingestion: splitting raw text into bounded chunks

mod chunker;

pub use chunker::TextChunker;
