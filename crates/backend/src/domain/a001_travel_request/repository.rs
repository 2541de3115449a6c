use chrono::Utc;
use contracts::domain::a001_travel_request::{RequestStatus, TravelRequest, TravelRequestId};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_travel_request")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub kind: String,
    pub requester: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub total_amount: f64,
    pub department: String,
    pub position: String,
    pub documents_json: String,
    pub expenses_json: String,
    pub history_json: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for TravelRequest {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> anyhow::Result<Self> {
        let uuid = Uuid::parse_str(&m.id)?;
        let status = RequestStatus::parse(&m.status)
            .ok_or_else(|| anyhow::anyhow!("Unknown status '{}' for request {}", m.status, m.id))?;

        Ok(TravelRequest {
            id: TravelRequestId(uuid),
            kind: m.kind,
            requester: m.requester,
            status,
            metadata: EntityMetadata {
                created_at: m.created_at.unwrap_or_else(Utc::now),
                updated_at: m.updated_at.unwrap_or_else(Utc::now),
            },
            start_date: m.start_date,
            end_date: m.end_date,
            total_amount: m.total_amount,
            department: m.department,
            position: m.position,
            documents: serde_json::from_str(&m.documents_json)?,
            expenses: serde_json::from_str(&m.expenses_json)?,
            history: serde_json::from_str(&m.history_json)?,
        })
    }
}

fn to_active(aggregate: &TravelRequest) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(aggregate.id.0.to_string()),
        kind: Set(aggregate.kind.clone()),
        requester: Set(aggregate.requester.clone()),
        status: Set(aggregate.status.as_str().to_string()),
        start_date: Set(aggregate.start_date.clone()),
        end_date: Set(aggregate.end_date.clone()),
        total_amount: Set(aggregate.total_amount),
        department: Set(aggregate.department.clone()),
        position: Set(aggregate.position.clone()),
        documents_json: Set(serde_json::to_string(&aggregate.documents)?),
        expenses_json: Set(serde_json::to_string(&aggregate.expenses)?),
        history_json: Set(serde_json::to_string(&aggregate.history)?),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
    })
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

async fn list_all_in<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<TravelRequest>> {
    Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?
        .into_iter()
        .map(TravelRequest::try_from)
        .collect()
}

async fn get_by_id_in<C: ConnectionTrait>(db: &C, id: Uuid) -> anyhow::Result<Option<TravelRequest>> {
    Entity::find_by_id(id.to_string())
        .one(db)
        .await?
        .map(TravelRequest::try_from)
        .transpose()
}

async fn insert_in<C: ConnectionTrait>(db: &C, aggregate: &TravelRequest) -> anyhow::Result<Uuid> {
    to_active(aggregate)?.insert(db).await?;
    Ok(aggregate.id.0)
}

async fn update_in<C: ConnectionTrait>(db: &C, aggregate: &TravelRequest) -> anyhow::Result<()> {
    to_active(aggregate)?.update(db).await?;
    Ok(())
}

/// Все заявки, новые первыми
pub async fn list_all() -> anyhow::Result<Vec<TravelRequest>> {
    list_all_in(conn()).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<TravelRequest>> {
    get_by_id_in(conn(), id).await
}

pub async fn insert(aggregate: &TravelRequest) -> anyhow::Result<Uuid> {
    insert_in(conn(), aggregate).await
}

pub async fn update(aggregate: &TravelRequest) -> anyhow::Result<()> {
    update_in(conn(), aggregate).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::ensure_schema;
    use contracts::domain::a001_travel_request::{Expense, ReportDraft, RequestHistory};
    use sea_orm::Database;

    fn sample(requester: &str) -> TravelRequest {
        let draft = ReportDraft {
            requester: requester.into(),
            department: "Engineering".into(),
            position: "Engineer".into(),
            start_date: "2024-01-15".into(),
            end_date: "2024-01-20".into(),
            total_amount: 450.0,
            expenses: vec![Expense {
                id: None,
                date: "2024-01-15".into(),
                category: "Transportation".into(),
                description: "Flight".into(),
                amount: 450.0,
            }],
            uploaded_files: vec![],
        };
        let mut request = TravelRequest::from_draft(&draft, RequestStatus::PendingReview);
        request
            .history
            .push(RequestHistory::new("submitted", "Report Submitted", "anonymous", None));
        request
    }

    async fn memory_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        ensure_schema(&db).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_insert_and_load() {
        let db = memory_db().await;
        let request = sample("John Doe");

        let id = insert_in(&db, &request).await.unwrap();
        let loaded = get_by_id_in(&db, id).await.unwrap().unwrap();

        assert_eq!(loaded.id, request.id);
        assert_eq!(loaded.status, RequestStatus::PendingReview);
        assert_eq!(loaded.expenses, request.expenses);
        assert_eq!(loaded.history.len(), 1);
        assert_eq!(loaded.history[0].kind, "submitted");
    }

    #[tokio::test]
    async fn test_missing_id_is_none() {
        let db = memory_db().await;
        assert!(get_by_id_in(&db, Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_and_list_newest_first() {
        let db = memory_db().await;
        let mut older = sample("Older");
        older.metadata.created_at = Utc::now() - chrono::Duration::days(1);
        let newer = sample("Newer");
        insert_in(&db, &older).await.unwrap();
        insert_in(&db, &newer).await.unwrap();

        older.requester = "Older (edited)".into();
        update_in(&db, &older).await.unwrap();

        let all = list_all_in(&db).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].requester, "Newer");
        assert_eq!(all[1].requester, "Older (edited)");
    }
}
