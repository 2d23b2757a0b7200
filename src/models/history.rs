//! Bounded, newest-first log of the predictions made in this session.

use std::collections::VecDeque;

use crate::config::HISTORY_CAPACITY;
use crate::domain::InputRecord;
use crate::models::prediction::{PredictionResult, PredictionSource};
use crate::utils::time_utils;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: u64,
    /// Local wall-clock label, e.g. "3:04:05 PM"
    pub timestamp: String,
    pub inputs: InputRecord,
    pub predicted_value: f64,
    /// Never filled in by the dashboard; kept for a future actuals feed.
    pub actual_value: Option<f64>,
    pub source: PredictionSource,
}

#[derive(Debug, Clone)]
pub struct PredictionHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    next_id: u64,
}

impl Default for PredictionHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl PredictionHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            next_id: 1,
        }
    }

    /// Records a prediction stamped with the current local time.
    pub fn record(&mut self, result: &PredictionResult) -> &HistoryEntry {
        self.record_at(result, time_utils::local_time_label())
    }

    /// Prepends a new entry and evicts the oldest ones beyond capacity.
    pub fn record_at(
        &mut self,
        result: &PredictionResult,
        timestamp: impl Into<String>,
    ) -> &HistoryEntry {
        let entry = HistoryEntry {
            id: self.next_id,
            timestamp: timestamp.into(),
            inputs: *result.source_inputs(),
            predicted_value: result.predicted_sales(),
            actual_value: None,
            source: result.source(),
        };
        self.next_id += 1;

        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            let _evicted = self.entries.pop_back();
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_history_updates {
                if let Some(evicted) = &_evicted {
                    log::info!("History full, evicted prediction #{}", evicted.id);
                }
            }
        }

        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Newest entry, if any.
    pub fn head(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DayType;

    fn prediction(fuel: f64) -> PredictionResult {
        PredictionResult::from_formula(InputRecord::new(fuel, 100.0, DayType::Weekday))
    }

    #[test]
    fn eleventh_insert_evicts_the_first() {
        let mut history = PredictionHistory::default();
        for i in 1..=11 {
            history.record_at(&prediction(i as f64 * 10.0), format!("t{}", i));
        }

        assert_eq!(history.len(), 10);
        assert!(history.iter().all(|e| e.timestamp != "t1"));

        let head = history.head().unwrap();
        assert_eq!(head.timestamp, "t11");
        assert_eq!(head.inputs.fuel_volume(), 110.0);
    }

    #[test]
    fn entries_are_newest_first_with_fresh_ids() {
        let mut history = PredictionHistory::default();
        history.record_at(&prediction(10.0), "a");
        history.record_at(&prediction(10.0), "b");

        let ids: Vec<u64> = history.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
        // Identical predictions are not deduplicated
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn entry_copies_prediction_fields() {
        let mut history = PredictionHistory::default();
        let result = prediction(500.0);
        let entry = history.record(&result).clone();

        assert_eq!(entry.predicted_value, result.predicted_sales());
        assert_eq!(entry.inputs, *result.source_inputs());
        assert_eq!(entry.actual_value, None);
        assert_eq!(entry.source, PredictionSource::Fallback);
        assert!(!entry.timestamp.is_empty());
    }
}
