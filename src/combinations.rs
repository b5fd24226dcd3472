/// Lazily enumerates every `k`-element subset of a slice.
///
/// Subsets are produced in lexicographic order of their indices and keep the
/// relative order of the underlying items, e.g. for `[a, b, c]` and `k = 2`:
/// `[a, b]`, `[a, c]`, `[b, c]`. Exactly `C(n, k)` subsets are produced; if
/// `k > n` the sequence is empty. Calling [`combinations`] again restarts the
/// enumeration.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    exhausted: bool,
}

/// Returns an iterator over all `k`-element subsets of `items`.
pub fn combinations<T>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: (0..k).collect(),
        exhausted: k > items.len(),
    }
}

impl<'a, T> Combinations<'a, T> {
    /// Moves `indices` to the next combination, or marks the enumeration done.
    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();
        // Rightmost position that can still be incremented.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            self.exhausted = true;
            return;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let subset = self.indices.iter().map(|&i| &self.items[i]).collect();
        self.advance();
        Some(subset)
    }
}
