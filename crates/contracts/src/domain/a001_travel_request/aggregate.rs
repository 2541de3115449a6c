use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::report_draft::{Expense, ReportDraft, ReportPatch};
use crate::domain::common::{AggregateId, EntityMetadata};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор заявки на командировку
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TravelRequestId(pub Uuid);

impl TravelRequestId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for TravelRequestId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TravelRequestId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    PendingReview,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "PENDING",
            RequestStatus::PendingReview => "PENDING_REVIEW",
            RequestStatus::Approved => "APPROVED",
            RequestStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::PendingReview => "Pending review",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(RequestStatus::Pending),
            "PENDING_REVIEW" => Some(RequestStatus::PendingReview),
            "APPROVED" => Some(RequestStatus::Approved),
            "REJECTED" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Pending
    }
}

// ============================================================================
// Child entities
// ============================================================================

/// Документ, приложенный к заявке (загруженный PDF)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub file_name: String,
    pub file_size: u64,
    pub file_url: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

impl Document {
    pub fn new(file_name: String, file_size: u64, file_url: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            file_name,
            file_size,
            file_url,
            uploaded_at: chrono::Utc::now(),
        }
    }
}

/// Запись истории изменений заявки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestHistory {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub user: String,
    pub comments: Option<String>,
    pub date: chrono::DateTime<chrono::Utc>,
}

impl RequestHistory {
    pub fn new(kind: &str, title: &str, user: &str, comments: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: kind.to_string(),
            title: title.to_string(),
            user: user.to_string(),
            comments,
            date: chrono::Utc::now(),
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заявка на командировку (сохраненный отчет о расходах)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRequest {
    pub id: TravelRequestId,
    #[serde(rename = "type", default = "TravelRequest::default_kind")]
    pub kind: String,
    pub requester: String,
    pub status: RequestStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
    pub start_date: String,
    pub end_date: String,
    pub total_amount: f64,
    pub department: String,
    pub position: String,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub history: Vec<RequestHistory>,
}

impl TravelRequest {
    pub const KIND: &'static str = "travel_request";

    fn default_kind() -> String {
        Self::KIND.to_string()
    }

    /// Создать новую заявку из черновика отчета
    pub fn from_draft(draft: &ReportDraft, status: RequestStatus) -> Self {
        Self {
            id: TravelRequestId::new_v4(),
            kind: Self::default_kind(),
            requester: draft.requester.clone(),
            status,
            metadata: EntityMetadata::new(),
            start_date: draft.start_date.clone(),
            end_date: draft.end_date.clone(),
            total_amount: draft.total_amount,
            department: draft.department.clone(),
            position: draft.position.clone(),
            documents: Vec::new(),
            expenses: draft.expenses.iter().map(Expense::with_id).collect(),
            history: Vec::new(),
        }
    }

    /// Применить правки: меняются только поля, присутствующие в patch
    pub fn apply_patch(&mut self, patch: &ReportPatch) {
        if let Some(v) = &patch.requester {
            self.requester = v.clone();
        }
        if let Some(v) = &patch.department {
            self.department = v.clone();
        }
        if let Some(v) = &patch.position {
            self.position = v.clone();
        }
        if let Some(v) = &patch.start_date {
            self.start_date = v.clone();
        }
        if let Some(v) = &patch.end_date {
            self.end_date = v.clone();
        }
        if let Some(v) = patch.total_amount {
            self.total_amount = v;
        }
        if let Some(expenses) = &patch.expenses {
            self.expenses = expenses.iter().map(Expense::with_id).collect();
        }
        self.metadata.touch();
    }

    /// Черновик для редактирования существующей заявки
    pub fn to_draft(&self) -> ReportDraft {
        ReportDraft {
            requester: self.requester.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            total_amount: self.total_amount,
            expenses: self.expenses.clone(),
            uploaded_files: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ReportDraft {
        ReportDraft {
            requester: "Jane Roe".into(),
            department: "Sales".into(),
            position: "Manager".into(),
            start_date: "2024-03-01".into(),
            end_date: "2024-03-03".into(),
            total_amount: 300.0,
            expenses: vec![Expense {
                id: None,
                date: "2024-03-01".into(),
                category: "Meals".into(),
                description: "Dinner".into(),
                amount: 300.0,
            }],
            uploaded_files: vec![],
        }
    }

    #[test]
    fn test_from_draft_assigns_expense_ids() {
        let request = TravelRequest::from_draft(&draft(), RequestStatus::PendingReview);
        assert_eq!(request.kind, "travel_request");
        assert_eq!(request.status, RequestStatus::PendingReview);
        assert_eq!(request.expenses.len(), 1);
        assert!(request.expenses[0].id.is_some());
    }

    #[test]
    fn test_apply_patch_keeps_absent_fields() {
        let mut request = TravelRequest::from_draft(&draft(), RequestStatus::Pending);
        let expenses = request.expenses.clone();

        let patch = ReportPatch {
            department: Some("Marketing".into()),
            ..Default::default()
        };
        request.apply_patch(&patch);

        assert_eq!(request.department, "Marketing");
        assert_eq!(request.requester, "Jane Roe");
        assert_eq!(request.end_date, "2024-03-03");
        assert_eq!(request.total_amount, 300.0);
        assert_eq!(request.expenses, expenses);
    }

    #[test]
    fn test_apply_full_patch_replaces_expenses() {
        let mut request = TravelRequest::from_draft(&draft(), RequestStatus::Pending);
        let mut edited = draft();
        edited.department = "Marketing".into();
        edited.expenses.clear();
        edited.total_amount = 0.0;

        request.apply_patch(&ReportPatch::from(&edited));
        assert_eq!(request.department, "Marketing");
        assert!(request.expenses.is_empty());
        assert_eq!(request.total_amount, 0.0);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&RequestStatus::PendingReview).unwrap();
        assert_eq!(json, "\"PENDING_REVIEW\"");
        assert_eq!(RequestStatus::parse("APPROVED"), Some(RequestStatus::Approved));
        assert_eq!(RequestStatus::parse("unknown"), None);
    }

    #[test]
    fn test_serializes_type_and_flattened_timestamps() {
        let request = TravelRequest::from_draft(&draft(), RequestStatus::Pending);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "travel_request");
        assert!(value.get("created_at").is_some());
        assert!(value.get("updated_at").is_some());
        assert_eq!(value["id"], request.id.as_string());
    }

    #[test]
    fn test_id_from_path_segment() {
        let id = TravelRequestId::new_v4();
        assert_eq!(TravelRequestId::from_string(&id.as_string()), Ok(id));
        assert!(TravelRequestId::from_string("42").is_err());
    }
}
