//! String similarity via the Ratcliff–Obershelp "gestalt pattern matching" ratio.
//!
//! The ratio is `2*M / T`, where `T` is the total number of characters in both
//! strings and `M` is the number of characters in matching blocks. Blocks are
//! found by taking the longest common contiguous substring, then recursing on
//! the unmatched pieces to its left and right.

use std::collections::HashMap;

/// Sequences at least this long get the popular-character heuristic
const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity ratio in `[0.0, 1.0]` between two strings.
///
/// Returns 0.0 when both strings are empty, so two blank fields never look
/// like a perfect match. Any other pair gets the plain ratio, so identical
/// non-empty strings always score 1.0 whatever their length.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    SequenceMatcher::new(&a, &b).ratio()
}

#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// A contiguous run where `a[a_start..a_start+len] == b[b_start..b_start+len]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Matching-block finder over two char sequences.
pub struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each char in `b`, ascending. Popular chars are left out.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    #[must_use]
    pub fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        // A char that makes up more than ~1% of a long `b` does not seed blocks.
        // Blocks can still be extended across it once found.
        if b.len() >= AUTOJUNK_MIN_LEN {
            let popular_limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= popular_limit);
        }

        Self { a, b, b2j }
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    /// A zero-length block means there is no common character.
    #[must_use]
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0usize);

        // j2len[j] = length of the longest match ending at a[i-1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best_len {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_len = k;
                    }
                }
            }
            j2len = next;
        }

        // Grow the block over equal chars the index skipped (popular chars)
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_len += 1;
        }
        while best_i + best_len < ahi
            && best_j + best_len < bhi
            && self.a[best_i + best_len] == self.b[best_j + best_len]
        {
            best_len += 1;
        }

        MatchingBlock {
            a_start: best_i,
            b_start: best_j,
            len: best_len,
        }
    }

    /// All matching blocks, sorted by position
    #[must_use]
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut blocks = Vec::new();
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.len == 0 {
                continue;
            }
            let (i, j, k) = (block.a_start, block.b_start, block.len);
            blocks.push(block);
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        blocks.sort_by_key(|b| (b.a_start, b.b_start));
        blocks
    }

    /// `2*M / (len(a) + len(b))`; 1.0 when both sequences are empty
    #[must_use]
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matches: usize = self.matching_blocks().iter().map(|b| b.len).sum();
        2.0 * count_to_f64(matches) / count_to_f64(total)
    }
}
