//! Optional bounded memoization for repeated analyses.
//!
//! Purely a throughput optimization: the cache never changes results and
//! capacity 0 disables it entirely. Eviction is oldest-first.

use std::collections::{HashMap, VecDeque};

use meikan_core::{FortuneTable, MeikanError};
use meikan_strokes::{ScriptDefaults, StrokeDictionary};

use crate::analysis::{AnalysisResult, Gender, analyze};

type CacheKey = (String, String, Gender);

/// Cache hit/miss counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Bounded FIFO cache over [`analyze`].
#[derive(Debug)]
pub struct AnalysisCache {
    capacity: usize,
    map: HashMap<CacheKey, AnalysisResult>,
    order: VecDeque<CacheKey>,
    hits: u64,
    misses: u64,
}

impl AnalysisCache {
    /// Capacity 0 disables caching; every call computes.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            map: HashMap::with_capacity(capacity.min(1024)),
            order: VecDeque::with_capacity(capacity.min(1024)),
            hits: 0,
            misses: 0,
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.map.len(),
        }
    }

    /// Analyze with memoization. Errors are never cached.
    pub fn get_or_analyze(
        &mut self,
        family: &str,
        given: &str,
        gender: Gender,
        table: &FortuneTable,
        dict: &StrokeDictionary,
        defaults: &ScriptDefaults,
    ) -> Result<AnalysisResult, MeikanError> {
        if self.capacity == 0 {
            return analyze(family, given, gender, table, dict, defaults);
        }
        let key = (family.to_string(), given.to_string(), gender);
        if let Some(cached) = self.map.get(&key) {
            self.hits += 1;
            return Ok(cached.clone());
        }
        let result = analyze(family, given, gender, table, dict, defaults)?;
        self.misses += 1;
        if self.map.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.map.remove(&oldest);
            }
        }
        self.order.push_back(key.clone());
        self.map.insert(key, result.clone());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (FortuneTable, StrokeDictionary, ScriptDefaults) {
        (
            FortuneTable::builtin(),
            StrokeDictionary::builtin(),
            ScriptDefaults::default(),
        )
    }

    #[test]
    fn cached_result_is_identical() {
        let (table, dict, defaults) = setup();
        let mut cache = AnalysisCache::new(16);
        let a = cache
            .get_or_analyze("田中", "太郎", Gender::Male, &table, &dict, &defaults)
            .unwrap();
        let b = cache
            .get_or_analyze("田中", "太郎", Gender::Male, &table, &dict, &defaults)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn gender_is_part_of_the_key() {
        let (table, dict, defaults) = setup();
        let mut cache = AnalysisCache::new(16);
        cache
            .get_or_analyze("田中", "太郎", Gender::Male, &table, &dict, &defaults)
            .unwrap();
        cache
            .get_or_analyze("田中", "太郎", Gender::Female, &table, &dict, &defaults)
            .unwrap();
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn zero_capacity_disables_caching() {
        let (table, dict, defaults) = setup();
        let mut cache = AnalysisCache::new(0);
        for _ in 0..3 {
            cache
                .get_or_analyze("田中", "太郎", Gender::Male, &table, &dict, &defaults)
                .unwrap();
        }
        assert_eq!(cache.stats().entries, 0);
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn evicts_oldest_first() {
        let (table, dict, defaults) = setup();
        let mut cache = AnalysisCache::new(2);
        cache
            .get_or_analyze("田中", "太郎", Gender::Male, &table, &dict, &defaults)
            .unwrap();
        cache
            .get_or_analyze("林", "蓮", Gender::Male, &table, &dict, &defaults)
            .unwrap();
        cache
            .get_or_analyze("山田", "花子", Gender::Female, &table, &dict, &defaults)
            .unwrap();
        assert_eq!(cache.stats().entries, 2);
        // The first entry was evicted, so this is a miss again.
        cache
            .get_or_analyze("田中", "太郎", Gender::Male, &table, &dict, &defaults)
            .unwrap();
        assert_eq!(cache.stats().misses, 4);
    }

    #[test]
    fn errors_are_not_cached() {
        let (table, dict, defaults) = setup();
        let mut cache = AnalysisCache::new(4);
        let long = "田".repeat(meikan_core::MAX_SEGMENT_CHARS + 1);
        assert!(
            cache
                .get_or_analyze(&long, "太郎", Gender::Male, &table, &dict, &defaults)
                .is_err()
        );
        assert_eq!(cache.stats().entries, 0);
    }
}
