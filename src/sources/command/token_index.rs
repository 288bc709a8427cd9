//! Token → command-file index.
//!
//! A token matches a corpus file when the lower-cased token occurs anywhere in
//! the file's lower-cased text. Tokens are compiled into literal regex sets so
//! each corpus file is scanned once per chunk instead of once per token.

use crate::runtime::text_source::TextSource;
use crate::sources::common::{
    dedupe_preserving_order, directory_of, file_name_of, normalize_token,
};
use rayon::prelude::*;
use regex::{RegexSet, RegexSetBuilder};
use std::collections::HashMap;
use std::path::PathBuf;

/// Tokens compiled into one automaton.
const TOKENS_PER_SET: usize = 500;
const SET_SIZE_LIMIT: usize = 256 * (1 << 20);

/// A corpus file a token was found in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandMatch {
    pub file_name: String,
    pub directory: String,
}

struct MatcherChunk {
    /// `None` when the set could not be compiled; the chunk is then scanned token by token.
    set: Option<RegexSet>,
    first_token: usize,
    tokens: Vec<String>,
}

/// Multi-pattern substring matcher over a fixed token list.
pub struct TokenMatcher {
    chunks: Vec<MatcherChunk>,
}

impl TokenMatcher {
    /// `tokens` must already be lower-cased and non-empty.
    pub fn new(tokens: &[String]) -> Self {
        Self::with_limits(tokens, TOKENS_PER_SET, SET_SIZE_LIMIT)
    }

    /// Compiles `tokens_per_set` tokens per set, each capped at `size_limit` bytes.
    pub fn with_limits(tokens: &[String], tokens_per_set: usize, size_limit: usize) -> Self {
        let tokens_per_set = tokens_per_set.max(1);
        let chunks = tokens
            .chunks(tokens_per_set)
            .enumerate()
            .map(|(chunk_index, chunk)| {
                let set = RegexSetBuilder::new(chunk.iter().map(|token| regex::escape(token)))
                    .size_limit(size_limit)
                    .dfa_size_limit(size_limit)
                    .build();
                let set = match set {
                    Ok(set) => Some(set),
                    Err(err) => {
                        tracing::warn!(
                            "[Index] Falling back to plain scan for {} tokens: {}",
                            chunk.len(),
                            err
                        );
                        None
                    }
                };
                MatcherChunk {
                    set,
                    first_token: chunk_index * tokens_per_set,
                    tokens: chunk.to_vec(),
                }
            })
            .collect();
        Self { chunks }
    }

    /// Chunks whose set failed to compile.
    pub fn plain_chunks(&self) -> usize {
        self.chunks.iter().filter(|chunk| chunk.set.is_none()).count()
    }

    /// Ids (positions in the token list) of every token contained in `text`, ascending.
    pub fn matching_ids(&self, text: &str) -> Vec<usize> {
        let mut ids = Vec::new();
        for chunk in &self.chunks {
            match &chunk.set {
                Some(set) => ids.extend(set.matches(text).iter().map(|id| chunk.first_token + id)),
                None => ids.extend(
                    chunk
                        .tokens
                        .iter()
                        .enumerate()
                        .filter(|(_, token)| text.contains(token.as_str()))
                        .map(|(id, _)| chunk.first_token + id),
                ),
            }
        }
        ids
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenIndex {
    matches: HashMap<String, Vec<CommandMatch>>,
}

pub struct TokenScan {
    pub index: TokenIndex,
    pub files_scanned: usize,
    pub skipped: Vec<(PathBuf, String)>,
}

impl TokenIndex {
    /// Scans every corpus file for every token. Per-token matches follow the
    /// order of `files`.
    pub fn build(tokens: &[String], files: &[PathBuf], source: &dyn TextSource) -> TokenScan {
        let tokens =
            dedupe_preserving_order(tokens.iter().filter_map(|token| normalize_token(token)));

        if tokens.is_empty() || files.is_empty() {
            return TokenScan {
                index: TokenIndex::default(),
                files_scanned: 0,
                skipped: Vec::new(),
            };
        }

        let matcher = TokenMatcher::new(&tokens);
        let scanned = files
            .par_iter()
            .map(|path| {
                source
                    .read(path)
                    .map(|text| matcher.matching_ids(&text.to_lowercase()))
            })
            .collect::<Vec<_>>();

        let mut index = TokenIndex::default();
        let mut skipped = Vec::new();
        let mut files_scanned = 0;
        for (path, result) in files.iter().zip(scanned) {
            let ids = match result {
                Ok(ids) => ids,
                Err(err) => {
                    skipped.push((path.clone(), err));
                    continue;
                }
            };
            files_scanned += 1;
            let found = CommandMatch {
                file_name: file_name_of(path),
                directory: directory_of(path),
            };
            for id in ids {
                index
                    .matches
                    .entry(tokens[id].clone())
                    .or_default()
                    .push(found.clone());
            }
        }

        TokenScan {
            index,
            files_scanned,
            skipped,
        }
    }

    pub fn lookup(&self, token: &str) -> &[CommandMatch] {
        self.matches
            .get(token)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of tokens with at least one match.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
