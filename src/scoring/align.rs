use super::distance::is_close;

/// Token alignment produced by the fuzzy longest-common-subsequence search.
#[derive(Debug, Clone, Default)]
pub struct Alignment {
    /// Matched `(reference, candidate)` index pairs in reference order.
    pub pairs: Vec<(usize, usize)>,
}

impl Alignment {
    /// Number of matched token pairs, equal to the LCS length.
    pub fn matched_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn matched_reference(&self) -> impl Iterator<Item = usize> + '_ {
        self.pairs.iter().map(|&(reference, _)| reference)
    }

    pub fn matched_candidate(&self) -> impl Iterator<Item = usize> + '_ {
        self.pairs.iter().map(|&(_, candidate)| candidate)
    }
}

/// Aligns two token sequences with [`is_close`] as the equality test.
///
/// Standard LCS dynamic program over `(m+1) x (n+1)` cells. The backtrack
/// moves diagonally whenever the current tokens are close; on equal neighbor
/// values it steps through the reference ("up") — different tie-breaks
/// produce different close/missed classifications on tied inputs, so this
/// choice is pinned by test vectors.
pub fn align_tokens(reference: &[String], candidate: &[String]) -> Alignment {
    let m = reference.len();
    let n = candidate.len();
    if m == 0 || n == 0 {
        return Alignment::default();
    }

    let mut lcs = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            lcs[i][j] = if is_close(&reference[i - 1], &candidate[j - 1]) {
                lcs[i - 1][j - 1] + 1
            } else {
                lcs[i - 1][j].max(lcs[i][j - 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(lcs[m][n]);
    let mut i = m;
    let mut j = n;
    while i > 0 && j > 0 {
        if is_close(&reference[i - 1], &candidate[j - 1]) {
            pairs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if lcs[i - 1][j] >= lcs[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    pairs.reverse();
    Alignment { pairs }
}
