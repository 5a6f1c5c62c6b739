//! Ask questions about a small product manual, offline.
//!
//! Uses the hashing embedder so it runs without an embedding server. Point
//! the resolver at an `OllamaEmbedder` instead for semantic matching.

use std::sync::Arc;

use passage_retrieval::{HashingEmbedder, Resolver, RetrievalConfig, SessionContext};

const MANUAL: &str = "\
    The kettle switches off automatically once the water reaches a rolling boil. \
    To descale the kettle, fill it halfway with equal parts water and white vinegar. \
    Leave the descaling mixture to stand for thirty minutes before rinsing. \
    The warranty covers manufacturing defects for a period of two years. \
    Never immerse the base unit in water";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Lexical-overlap scores run lower than semantic models, so relax the
    // gate a little for the hashing embedder
    let mut config = RetrievalConfig::default();
    config.resolver.threshold = 0.25;
    let resolver = Resolver::new(Arc::new(HashingEmbedder::default()), &config);

    let mut session = SessionContext::new();
    let document = session.load_document(&resolver, MANUAL)?;
    println!(
        "loaded document {} ({} chunks)\n",
        document.id, document.total_chunks
    );

    let questions = [
        "How do I descale this kettle with vinegar",
        "How long is the warranty period",
        "Can it connect to my phone over bluetooth",
    ];

    for question in questions {
        let answer = session.ask(&resolver, question)?;
        println!("Q: {question}");
        println!("A: {answer}\n");
    }

    Ok(())
}
