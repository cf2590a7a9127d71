use std::sync::Arc;

use serde::Serialize;

use crate::domain::error::Result;
use crate::infrastructure::db::PersonStore;

/// Fixed, exhaustive age buckets over the stored population.
const BUCKET_LABELS: [&str; 4] = ["<20", "20-40", "40-60", ">60"];

/// One bucket's share of the stored population, as a rounded percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketShare {
    pub label: &'static str,
    pub percentage: u32,
}

/// Computes the age-bucket distribution over all stored people.
pub struct AgeReportUseCase {
    store: Arc<dyn PersonStore>,
}

impl AgeReportUseCase {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// One bulk read; `None` when nothing has been loaded yet.
    ///
    /// Buckets round independently, so the percentages need not sum to 100.
    pub async fn execute(&self) -> Result<Option<Vec<BucketShare>>> {
        let ages = self.store.all_ages().await?;
        if ages.is_empty() {
            return Ok(None);
        }

        let mut counts = [0usize; 4];
        for age in &ages {
            counts[bucket_index(*age)] += 1;
        }

        let total = ages.len() as f64;
        let shares = BUCKET_LABELS
            .iter()
            .copied()
            .zip(counts)
            .map(|(label, count)| BucketShare {
                label,
                percentage: (count as f64 / total * 100.0).round() as u32,
            })
            .collect();

        Ok(Some(shares))
    }
}

fn bucket_index(age: i64) -> usize {
    if age <= 20 {
        0
    } else if age <= 40 {
        1
    } else if age <= 60 {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::people::PersonRow;
    use async_trait::async_trait;

    struct FixedAges(Vec<i64>);

    #[async_trait]
    impl PersonStore for FixedAges {
        async fn insert_person(&self, _person: &PersonRow) -> Result<()> {
            Ok(())
        }

        async fn all_ages(&self) -> Result<Vec<i64>> {
            Ok(self.0.clone())
        }
    }

    fn percentages(shares: &[BucketShare]) -> Vec<(&'static str, u32)> {
        shares.iter().map(|s| (s.label, s.percentage)).collect()
    }

    #[tokio::test]
    async fn one_person_per_bucket_gives_even_quarters() {
        let report = AgeReportUseCase::new(Arc::new(FixedAges(vec![15, 25, 45, 70])));

        let shares = report.execute().await.unwrap().unwrap();
        assert_eq!(
            percentages(&shares),
            vec![("<20", 25), ("20-40", 25), ("40-60", 25), (">60", 25)]
        );
    }

    #[tokio::test]
    async fn no_ages_yields_none() {
        let report = AgeReportUseCase::new(Arc::new(FixedAges(Vec::new())));
        assert_eq!(report.execute().await.unwrap(), None);
    }

    #[tokio::test]
    async fn bucket_edges_are_inclusive_on_the_upper_bound() {
        let report = AgeReportUseCase::new(Arc::new(FixedAges(vec![20, 21, 40, 60, 61])));

        let shares = report.execute().await.unwrap().unwrap();
        assert_eq!(
            percentages(&shares),
            vec![("<20", 20), ("20-40", 40), ("40-60", 20), (">60", 20)]
        );
    }

    #[tokio::test]
    async fn independent_rounding_may_not_sum_to_100() {
        let report = AgeReportUseCase::new(Arc::new(FixedAges(vec![10, 25, 45])));

        let shares = report.execute().await.unwrap().unwrap();
        assert_eq!(
            percentages(&shares),
            vec![("<20", 33), ("20-40", 33), ("40-60", 33), (">60", 0)]
        );
        assert_eq!(shares.iter().map(|s| s.percentage).sum::<u32>(), 99);
    }
}
