//! Outline addressing derived purely from indentation.
//!
//! Every line is assigned one counter per indentation bucket (0, 2, ..., 40
//! leading characters). A line landing exactly on a bucket bumps that bucket's
//! counter; shallower buckets contribute their current value and deeper
//! buckets stay at zero. Counters run for the whole document, so a fresh
//! [`OutlineCounters`] must be used per file.

use crate::types::{Address, BUCKET_COUNT, BUCKET_STEP};

#[derive(Debug, Clone, Default)]
pub struct OutlineCounters {
    counters: [u32; BUCKET_COUNT],
}

impl OutlineCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encode(&mut self, leading_space_count: usize) -> Address {
        let mut address = Address::default();

        for (bucket, counter) in self.counters.iter_mut().enumerate() {
            let depth = bucket * BUCKET_STEP;
            if leading_space_count == depth {
                *counter += 1;
                address.ranks[bucket] = *counter;
                break;
            } else if leading_space_count > depth {
                address.ranks[bucket] = *counter;
            }
            // Shallower than this bucket: leave it at zero. Odd depths never
            // match a bucket exactly, so nothing is incremented for them.
        }

        address
    }

    pub fn current(&self) -> &[u32; BUCKET_COUNT] {
        &self.counters
    }
}

/// Leading whitespace in characters, terminator included when the line is
/// entirely whitespace.
pub fn count_leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_depth_increments_only_its_bucket() {
        let mut counters = OutlineCounters::new();
        assert_eq!(counters.encode(0).ranks[..3], [1, 0, 0]);
        assert_eq!(counters.encode(2).ranks[..3], [1, 1, 0]);
        assert_eq!(counters.encode(4).ranks[..3], [1, 1, 1]);
        assert_eq!(counters.encode(2).ranks[..3], [1, 2, 0]);
        assert_eq!(counters.encode(4).ranks[..3], [1, 2, 2]);
        assert_eq!(counters.current()[..3], [1, 2, 2]);
    }

    #[test]
    fn counts_unicode_whitespace_as_characters() {
        assert_eq!(count_leading_whitespace("  \tx"), 3);
        assert_eq!(count_leading_whitespace("x  "), 0);
        assert_eq!(count_leading_whitespace("    "), 4);
        assert_eq!(count_leading_whitespace("\n"), 1);
        assert_eq!(count_leading_whitespace("    \n"), 5);
        assert_eq!(count_leading_whitespace("  <a>\n"), 2);
    }
}
