//! Per-conversation session state
//!
//! One [`SessionContext`] per independent conversation: it owns the active
//! corpus and the message transcript, and nothing is shared implicitly
//! between sessions. The resolver (and its embedder handle) is passed in
//! by the caller, so a single provider can back many sessions.

use crate::error::{Error, Result};
use crate::retrieval::Resolver;
use crate::types::{Answer, ChatRole, ChatTurn, Document, DocumentCorpus};

/// Conversation-scoped document corpus and history
#[derive(Default)]
pub struct SessionContext {
    corpus: Option<DocumentCorpus>,
    history: Vec<ChatTurn>,
}

impl SessionContext {
    /// Create an empty session with no document loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document, replacing any previously active corpus.
    ///
    /// The new corpus is built completely before the swap, so a failure
    /// during chunking or embedding leaves the previous corpus untouched
    /// and queryable.
    pub fn load_document(&mut self, resolver: &Resolver, text: &str) -> Result<Document> {
        let corpus = resolver.load(text)?;
        let document = corpus.document.clone();
        self.corpus = Some(corpus);
        Ok(document)
    }

    /// Answer a question about the loaded document and record both turns
    /// in the transcript.
    ///
    /// A query-time failure aborts this query only; corpus and history
    /// stay as they were.
    pub fn ask(&mut self, resolver: &Resolver, query: &str) -> Result<Answer> {
        let corpus = self.corpus.as_ref().ok_or(Error::NoDocumentLoaded)?;
        let answer = resolver.ask(query, corpus)?;

        self.history.push(ChatTurn::new(ChatRole::User, query));
        self.history
            .push(ChatTurn::new(ChatRole::Assistant, answer.message()));

        Ok(answer)
    }

    /// The active corpus, if a document is loaded
    pub fn corpus(&self) -> Option<&DocumentCorpus> {
        self.corpus.as_ref()
    }

    /// Conversation transcript, oldest first
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    /// Forget the transcript, keeping the corpus
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Drop the corpus and transcript
    pub fn reset(&mut self) {
        self.corpus = None;
        self.history.clear();
    }
}
