use super::apply::to_int32;

/// Largest n whose factorial is finite as an `f64`.
pub const MAX_FINITE_FACTORIAL: i32 = 170;

/// Memoized factorials, `cache[n] == n!`.
///
/// The cache only grows; it lives as long as the parser that owns it.
#[derive(Debug, Clone)]
pub struct FactorialCache {
    cache: Vec<f64>,
}

impl FactorialCache {
    pub fn new() -> Self {
        FactorialCache { cache: vec![1.0] }
    }

    /// `n!` after 32-bit truncation of `n`; `1` for anything below `1`.
    pub fn factorial(&mut self, n: f64) -> f64 {
        let n = to_int32(n);
        if n < 1 {
            return 1.0;
        }
        if n > MAX_FINITE_FACTORIAL {
            return f64::INFINITY;
        }

        let n = n as usize;
        if n >= self.cache.len() {
            tracing::trace!(from = self.cache.len(), to = n, "extending factorial cache");
        }
        while self.cache.len() <= n {
            let k = self.cache.len();
            let next = k as f64 * self.cache[k - 1];
            self.cache.push(next);
        }

        self.cache[n]
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for FactorialCache {
    fn default() -> Self {
        Self::new()
    }
}
