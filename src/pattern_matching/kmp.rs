//! Knuth-Morris-Pratt failure-function construction and scanning (C3).
//!
//! spec.md §4.3 describes four distinct failure-function *builders* that all feed the same
//! scanner. Internally every builder works over a 1-indexed `sp`/`spprime` table (index 0
//! held as an unused padding slot, never touched) because the recurrences in spec.md are
//! stated in 1-based terms and a direct transliteration is far easier to get right than
//! juggling an extra `-1` at every access; the public [`Failure`] type then hands back a
//! plain 0-indexed table, so the 1-based bookkeeping never leaks past this module.

use crate::error::{Result, StringMatchError};
use crate::pattern_matching::zarray::ZArray;

/// The KMP failure table `F[1..=M+1]` of a pattern, stored 0-indexed (`as_slice()[0]` is
/// spec.md's `F[1]`).
#[derive(Clone, Debug)]
pub struct Failure {
    /// `f[i]` is `F[i + 1]` in spec.md's 1-based numbering.
    f: Vec<usize>,
}

impl Failure {
    /// Build `F` from the Z-array-derived `sp` table (variant a).
    pub fn from_z_sp(pattern: &[u8]) -> Result<Self> {
        if pattern.is_empty() {
            return Err(StringMatchError::invalid_argument("pattern must not be empty"));
        }
        let m = pattern.len();
        let spprime = spprime_from_z(pattern);
        // sp[M] = spprime[M]; sp[i] = max(spprime[i], sp[i+1]-1) for i = M-1 downto 1.
        let mut sp = vec![0usize; m + 1];
        sp[m] = spprime[m];
        for i in (1..m).rev() {
            let candidate = if sp[i + 1] > 0 { sp[i + 1] - 1 } else { 0 };
            sp[i] = spprime[i].max(candidate);
        }
        Ok(Failure::from_sp(&sp, m))
    }

    /// Build `F` from the Z-array-derived strict `sp'` table directly (variant b).
    pub fn from_z_sp_prime(pattern: &[u8]) -> Result<Self> {
        if pattern.is_empty() {
            return Err(StringMatchError::invalid_argument("pattern must not be empty"));
        }
        let m = pattern.len();
        let spprime = spprime_from_z(pattern);
        Ok(Failure::from_sp(&spprime, m))
    }

    /// Build `F` via the classical incremental prefix-function recurrence (variant c).
    pub fn from_incremental_sp(pattern: &[u8]) -> Result<Self> {
        if pattern.is_empty() {
            return Err(StringMatchError::invalid_argument("pattern must not be empty"));
        }
        let m = pattern.len();
        let sp = incremental_sp(pattern, m);
        Ok(Failure::from_sp(&sp, m))
    }

    /// Build `F` via the incremental recurrence followed by the strict `sp'` correction
    /// (variant d).
    pub fn from_incremental_sp_prime(pattern: &[u8]) -> Result<Self> {
        if pattern.is_empty() {
            return Err(StringMatchError::invalid_argument("pattern must not be empty"));
        }
        let m = pattern.len();
        let sp = incremental_sp(pattern, m);
        let mut spprime = vec![0usize; m + 1];
        for i in 1..=m {
            if i == m {
                // S[sp[i]+1] is "S[M+1]", past the end; the strict constraint never
                // applies at the final position, so spprime[M] = sp[M].
                spprime[i] = sp[i];
                continue;
            }
            let next_after_border = sp[i] + 1;
            if next_after_border <= m && pattern[next_after_border - 1] != pattern[i] {
                spprime[i] = sp[i];
            } else {
                spprime[i] = spprime[sp[i]];
            }
        }
        Ok(Failure::from_sp(&spprime, m))
    }

    fn from_sp(sp: &[usize], m: usize) -> Self {
        // F[1] = 1; F[i] = sp[i-1] + 1 for i = 2..=M+1.
        let mut f = vec![0usize; m + 1];
        f[0] = 1;
        for i in 2..=m + 1 {
            f[i - 1] = sp[i - 1] + 1;
        }
        Failure { f }
    }

    /// `F[i]` using spec.md's 1-based numbering (`i` ranges `1..=pattern.len() + 1`).
    pub fn at(&self, i: usize) -> usize {
        self.f[i - 1]
    }

    /// The raw table, 0-indexed, of length `pattern.len() + 1`.
    pub fn as_slice(&self) -> &[usize] {
        &self.f
    }
}

/// `spprime[i + Z[i] - 1] = Z[i]` for `i = M downto 2`, the O(n) strict-border
/// construction from the pattern's own Z-array (spec.md §4.3a/b).
fn spprime_from_z(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let z = ZArray::build(pattern);
    let mut spprime = vec![0usize; m + 1];
    for i in (2..=m).rev() {
        let zi = z.get(i - 1); // Z[i] in 1-based == z.get(i-1) in 0-based.
        if zi == 0 {
            continue;
        }
        let pos = i + zi - 1;
        if pos <= m {
            spprime[pos] = zi;
        }
    }
    spprime
}

/// The classical incremental prefix-function recurrence (spec.md §4.3c): `sp[1] = 0`, and
/// for `i = 1..M-1`, `sp[i+1]` is derived from `sp[i]` by following border links until a
/// character matches or the border collapses to empty.
fn incremental_sp(pattern: &[u8], m: usize) -> Vec<usize> {
    let mut sp = vec![0usize; m + 1];
    for i in 1..m {
        let mut v = sp[i];
        while v != 0 && pattern[v] != pattern[i] {
            v = sp[v];
        }
        sp[i + 1] = if pattern[v] == pattern[i] { v + 1 } else { 0 };
    }
    sp
}

/// Scans `text` for occurrences of the pattern whose [`Failure`] table this iterator
/// holds, using the KMP automaton walk of spec.md §4.3.
pub struct KmpSearch<'a> {
    pattern: &'a [u8],
    text: &'a [u8],
    failure: Failure,
    c: usize,
    p: usize,
    finished: bool,
}

impl<'a> KmpSearch<'a> {
    /// Start a scan using a pre-built failure table.
    pub fn new(pattern: &'a [u8], text: &'a [u8], failure: Failure) -> Self {
        Self::new_at(pattern, text, failure, false)
    }

    /// Start a scan, optionally beginning as if a match had just been emitted at the
    /// pattern's own start (`initmatch = true`, spec.md §4.3: "starts with `(c=M+1,
    /// p=F[M+1])`").
    pub fn new_at(pattern: &'a [u8], text: &'a [u8], failure: Failure, initmatch: bool) -> Self {
        let m = pattern.len();
        let (c, p) = if initmatch {
            (m + 1, failure.at(m + 1))
        } else {
            (1, 1)
        };
        let finished = text.is_empty() || m > text.len();
        KmpSearch {
            pattern,
            text,
            failure,
            c,
            p,
            finished,
        }
    }
}

impl<'a> Iterator for KmpSearch<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.finished {
            return None;
        }
        let m = self.pattern.len();
        let n = self.text.len();
        while self.c <= n {
            if self.p == m + 1 {
                let start = self.c - m;
                self.p = self.failure.at(m + 1);
                return Some(start);
            }
            if self.pattern[self.p - 1] == self.text[self.c - 1] {
                self.c += 1;
                self.p += 1;
            } else if self.p == 1 {
                self.c += 1;
            } else {
                self.p = self.failure.at(self.p);
            }
        }
        if self.p == m + 1 {
            let start = self.c - m;
            self.finished = true;
            return Some(start);
        }
        self.finished = true;
        None
    }
}
