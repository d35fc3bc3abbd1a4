use shared_http::api::StatsResponse;
use tracing::warn;

use crate::ports::SeatingBackend;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub halls: u64,
    pub students: u64,
    pub exams: u64,
}

impl From<StatsResponse> for DashboardStats {
    fn from(stats: StatsResponse) -> Self {
        Self {
            halls: stats.total_halls,
            students: stats.total_students,
            exams: stats.total_exams,
        }
    }
}

impl DashboardStats {
    /// Table totals from `/api/stats`; all zero when the backend is down.
    pub async fn load<B>(backend: &B) -> Self
    where
        B: SeatingBackend + ?Sized,
    {
        match backend.stats().await {
            Ok(stats) => stats.into(),
            Err(e) => {
                warn!("failed to load dashboard totals: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeBackend, hall};
    use shared_http::api::StudentRow;

    fn row(id: i64) -> StudentRow {
        StudentRow {
            id,
            reg_no: format!("7311241{id:05}"),
            name: format!("Student {id}"),
            department: Some("ECE".into()),
            year: Some("II".into()),
            subjects_registered: vec![],
        }
    }

    #[tokio::test]
    async fn test_counts() {
        let backend = FakeBackend::default()
            .with_halls(vec![hall(1, "T 1", "T"), hall(2, "T 2", "T")])
            .with_student_rows((1..=3).map(row).collect());
        let stats = DashboardStats::load(&backend).await;
        assert_eq!(
            stats,
            DashboardStats {
                halls: 2,
                students: 3,
                exams: 0
            }
        );
    }

    #[tokio::test]
    async fn test_counts_are_not_capped_by_page_size() {
        let backend = FakeBackend::default().with_student_rows((1..=1200).map(row).collect());
        let stats = DashboardStats::load(&backend).await;
        assert_eq!(stats.students, 1200);
    }

    #[tokio::test]
    async fn test_offline_counts_zero() {
        let backend = FakeBackend::default().offline();
        assert_eq!(DashboardStats::load(&backend).await, DashboardStats::default());
    }
}
