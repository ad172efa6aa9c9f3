use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};
use tracing::debug;
use uuid::Uuid;

use crate::chunker::{Chunk, chunk_text};
use crate::error::VoiceLoopError;
use crate::llm_client::ChatClient;

static WORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Descriptive fields attached to an uploaded document.
#[derive(Debug, Clone, Default)]
pub struct DocumentMetadata {
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// A chunk stored in the knowledge base together with its embedding.
#[derive(Debug, Clone)]
pub struct StoredChunk {
    pub id: String,
    pub document_id: Uuid,
    pub chunk_index: usize,
    pub chunk: Chunk,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    embedding: Vec<f32>,
}

/// Strategy used by [`KnowledgeBase::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Cosine similarity over chunk embeddings.
    Semantic,
    /// Stop-word-filtered term overlap.
    Keyword,
    /// Union of both, deduplicated and re-ranked.
    Hybrid,
}

/// One search result.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub chunk_id: String,
    pub document_id: Uuid,
    pub text: String,
    pub score: f32,
}

/// In-memory chunk-and-embed document index.
///
/// Documents are chunked, embedded via the attached [`ChatClient`] and held
/// in process memory. A content hash deduplicates re-uploads of the same
/// text. This is deliberately a flat scan, not a vector database.
pub struct KnowledgeBase {
    client: Arc<dyn ChatClient>,
    chunks: Vec<StoredChunk>,
    hashes: HashMap<String, Uuid>,
}

impl KnowledgeBase {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            chunks: Vec::new(),
            hashes: HashMap::new(),
        }
    }

    /// Number of chunks currently indexed.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Every indexed chunk, in insertion order.
    pub fn chunks(&self) -> &[StoredChunk] {
        &self.chunks
    }

    /// Chunk, embed and index a document, returning its id.
    ///
    /// Re-adding byte-identical text returns the existing document id
    /// without re-embedding.
    pub async fn add_document(
        &mut self,
        text: &str,
        metadata: DocumentMetadata,
    ) -> Result<Uuid, VoiceLoopError> {
        let hash = format!("{:x}", Sha256::digest(text.as_bytes()));
        if let Some(existing) = self.hashes.get(&hash) {
            debug!(document_id = %existing, "duplicate upload, skipping");
            return Ok(*existing);
        }

        let document_id = Uuid::new_v4();
        for (i, chunk) in chunk_text(text).into_iter().enumerate() {
            let embedding = self.client.embed(&chunk.text).await?;
            self.chunks.push(StoredChunk {
                id: format!("{document_id}_chunk_{i}"),
                document_id,
                chunk_index: i,
                chunk,
                title: metadata.title.clone(),
                category: metadata.category.clone(),
                tags: metadata.tags.clone(),
                embedding,
            });
        }
        self.hashes.insert(hash, document_id);
        debug!(%document_id, chunks = self.chunks.len(), "document indexed");
        Ok(document_id)
    }

    /// Search the index with the requested strategy.
    pub async fn search(
        &self,
        query: &str,
        top_k: usize,
        mode: SearchMode,
    ) -> Result<Vec<SearchHit>, VoiceLoopError> {
        match mode {
            SearchMode::Semantic => self.semantic_search(query, top_k).await,
            SearchMode::Keyword => Ok(self.keyword_search(query, top_k)),
            SearchMode::Hybrid => {
                let half = (top_k / 2).max(1);
                let mut hits = self.semantic_search(query, half).await?;
                hits.extend(self.keyword_search(query, half));
                // Keep the best score per chunk, then re-rank.
                let mut best: HashMap<String, SearchHit> = HashMap::new();
                for hit in hits {
                    let keep = best
                        .get(&hit.chunk_id)
                        .is_none_or(|existing| hit.score > existing.score);
                    if keep {
                        best.insert(hit.chunk_id.clone(), hit);
                    }
                }
                let mut merged: Vec<SearchHit> = best.into_values().collect();
                merged.sort_by(|a, b| b.score.total_cmp(&a.score));
                merged.truncate(top_k);
                Ok(merged)
            }
        }
    }

    async fn semantic_search(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchHit>, VoiceLoopError> {
        if self.chunks.is_empty() {
            return Ok(Vec::new());
        }
        let query_embedding = self.client.embed(query).await?;
        let mut hits: Vec<SearchHit> = self
            .chunks
            .iter()
            .map(|c| SearchHit {
                chunk_id: c.id.clone(),
                document_id: c.document_id,
                text: c.chunk.text.clone(),
                score: cosine_similarity(&query_embedding, &c.embedding),
            })
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(top_k);
        Ok(hits)
    }

    fn keyword_search(&self, query: &str, top_k: usize) -> Vec<SearchHit> {
        let terms = extract_key_terms(query);
        if terms.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<SearchHit> = self
            .chunks
            .iter()
            .filter_map(|c| {
                let text = c.chunk.text.to_lowercase();
                let overlap = terms.iter().filter(|t| text.contains(t.as_str())).count();
                if overlap == 0 {
                    return None;
                }
                Some(SearchHit {
                    chunk_id: c.id.clone(),
                    document_id: c.document_id,
                    text: c.chunk.text.clone(),
                    score: overlap as f32 / terms.len() as f32,
                })
            })
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(top_k);
        hits
    }
}

/// Lowercased query terms with stop words and short tokens removed, capped
/// at five.
pub fn extract_key_terms(query: &str) -> Vec<String> {
    WORDS
        .find_iter(&query.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|t| t.len() > 2 && !STOP_WORDS.contains(&t.as_str()))
        .take(5)
        .collect()
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_terms_drop_stop_words_and_short_tokens() {
        let terms = extract_key_terms("What is the policy for parental leave at the company?");
        assert!(terms.contains(&"policy".to_string()));
        assert!(terms.contains(&"parental".to_string()));
        assert!(!terms.contains(&"the".to_string()));
        assert!(!terms.contains(&"is".to_string()));
        assert!(terms.len() <= 5);
    }

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let v = vec![0.5, 0.2, 0.8];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_handles_mismatched_or_zero_vectors() {
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }
}
