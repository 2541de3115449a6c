use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Строка расходов в отчете
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub amount: f64,
}

impl Expense {
    /// Копия строки с гарантированно заполненным id
    pub fn with_id(&self) -> Self {
        let mut expense = self.clone();
        if expense.id.as_deref().map_or(true, str::is_empty) {
            expense.id = Some(Uuid::new_v4().to_string());
        }
        expense
    }
}

/// Имя и размер файла, который получил backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFileInfo {
    pub name: String,
    #[serde(default)]
    pub size: u64,
}

/// Черновик отчета о расходах.
///
/// Backend возвращает его после разбора PDF, пользователь редактирует,
/// затем он уходит в поле `data` при submit или телом запроса при update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportDraft {
    pub requester: String,
    pub department: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub uploaded_files: Vec<UploadedFileInfo>,
}

impl ReportDraft {
    /// Сумма по строкам расходов
    pub fn expenses_total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Пересчитать `total_amount` по строкам
    pub fn recalculate_total(&mut self) {
        self.total_amount = (self.expenses_total() * 100.0).round() / 100.0;
    }
}

/// Частичное обновление заявки: применяются только присланные поля
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenses: Option<Vec<Expense>>,
}

impl From<&ReportDraft> for ReportPatch {
    fn from(draft: &ReportDraft) -> Self {
        Self {
            requester: Some(draft.requester.clone()),
            department: Some(draft.department.clone()),
            position: Some(draft.position.clone()),
            start_date: Some(draft.start_date.clone()),
            end_date: Some(draft.end_date.clone()),
            total_amount: Some(draft.total_amount),
            expenses: Some(draft.expenses.clone()),
        }
    }
}
