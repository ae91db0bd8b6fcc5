use std::collections::HashMap;

/// Split text into lowercase alphanumeric tokens of length >= 2.
/// Punctuation, symbols, and whitespace are separators.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// Vocabulary over a document set: term → column index, terms in sorted
/// order so indices are deterministic for a given corpus.
fn build_vocabulary(documents: &[String]) -> HashMap<String, usize> {
    let mut terms: Vec<String> = documents.iter().flat_map(|d| tokenize(d)).collect();
    terms.sort();
    terms.dedup();
    terms
        .into_iter()
        .enumerate()
        .map(|(idx, term)| (term, idx))
        .collect()
}

/// Plain term-count vectorizer.
///
/// The vocabulary is derived fresh on every fit and never persisted or grown
/// incrementally; a new corpus means a new fit.
#[derive(Debug, Default)]
pub struct CountVectorizer {
    vocabulary: HashMap<String, usize>,
}

impl CountVectorizer {
    pub fn fit(documents: &[String]) -> Self {
        Self {
            vocabulary: build_vocabulary(documents),
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Raw term counts over the fitted vocabulary. Terms unseen at fit time
    /// are ignored; a document with no known terms yields a zero vector.
    pub fn transform(&self, document: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.vocabulary.len()];
        for token in tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                vector[idx] += 1.0;
            }
        }
        vector
    }

    pub fn fit_transform(documents: &[String]) -> (Self, Vec<Vec<f32>>) {
        let fitted = Self::fit(documents);
        let matrix = documents.iter().map(|d| fitted.transform(d)).collect();
        (fitted, matrix)
    }
}

/// TF-IDF vectorizer with smoothed idf and L2-normalized rows.
///
/// Per-term weight is `count * idf` with
/// `idf = ln((1 + n_docs) / (1 + df)) + 1`; each document vector is then
/// scaled to unit length.
#[derive(Debug, Default)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Derive the vocabulary and per-term idf from `documents`.
    pub fn fit(documents: &[String]) -> Self {
        let vocabulary = build_vocabulary(documents);

        let mut df = vec![0usize; vocabulary.len()];
        for document in documents {
            let mut seen = tokenize(document);
            seen.sort();
            seen.dedup();
            for token in seen {
                if let Some(&idx) = vocabulary.get(&token) {
                    df[idx] += 1;
                }
            }
        }

        let n_docs = documents.len() as f32;
        let idf = df
            .iter()
            .map(|&d| ((1.0 + n_docs) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Term counts weighted by idf, normalized to unit length. A document
    /// with no known terms yields a zero vector, not an error.
    pub fn transform(&self, document: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.vocabulary.len()];
        for token in tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                vector[idx] += 1.0;
            }
        }

        for (weight, idf) in vector.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for weight in &mut vector {
                *weight /= norm;
            }
        }
        vector
    }

    pub fn fit_transform(documents: &[String]) -> (Self, Vec<Vec<f32>>) {
        let fitted = Self::fit(documents);
        let matrix = documents.iter().map(|d| fitted.transform(d)).collect();
        (fitted, matrix)
    }
}
