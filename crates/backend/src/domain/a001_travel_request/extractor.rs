use async_trait::async_trait;
use contracts::domain::a001_travel_request::{Expense, ReportDraft};

use super::upload::ReceivedFile;

/// Извлечение черновика отчета из загруженных PDF
#[async_trait]
pub trait ReportExtractor: Send + Sync {
    async fn extract(&self, files: &[ReceivedFile]) -> anyhow::Result<ReportDraft>;

    fn extractor_name(&self) -> &str;
}

/// Возвращает фиксированный пример отчета. Содержимое файлов не читается.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleReportExtractor;

impl SampleReportExtractor {
    pub fn sample_draft() -> ReportDraft {
        ReportDraft {
            requester: "John Doe".into(),
            department: "Engineering".into(),
            position: "Software Engineer".into(),
            start_date: "2024-01-15".into(),
            end_date: "2024-01-20".into(),
            total_amount: 1250.50,
            expenses: vec![
                Expense {
                    id: Some("1".into()),
                    date: "2024-01-15".into(),
                    category: "Transportation".into(),
                    description: "Flight to New York".into(),
                    amount: 450.00,
                },
                Expense {
                    id: Some("2".into()),
                    date: "2024-01-16".into(),
                    category: "Accommodation".into(),
                    description: "Hotel Stay".into(),
                    amount: 800.50,
                },
            ],
            uploaded_files: Vec::new(),
        }
    }
}

#[async_trait]
impl ReportExtractor for SampleReportExtractor {
    async fn extract(&self, files: &[ReceivedFile]) -> anyhow::Result<ReportDraft> {
        tracing::debug!("Sample extraction for {} file(s)", files.len());
        Ok(Self::sample_draft())
    }

    fn extractor_name(&self) -> &str {
        "sample"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_draft() {
        let draft = SampleReportExtractor.extract(&[]).await.unwrap();
        assert_eq!(draft.requester, "John Doe");
        assert_eq!(draft.expenses.len(), 2);
        assert_eq!(draft.expenses_total(), 1250.50);
        assert_eq!(draft.total_amount, 1250.50);
    }
}
