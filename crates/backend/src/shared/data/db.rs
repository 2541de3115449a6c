use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// sqlite:// URL для файла базы, создаётся при первом подключении
pub fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

const CREATE_TRAVEL_REQUEST_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a001_travel_request (
        id TEXT PRIMARY KEY NOT NULL,
        kind TEXT NOT NULL DEFAULT 'travel_request',
        requester TEXT NOT NULL,
        status TEXT NOT NULL,
        start_date TEXT NOT NULL DEFAULT '',
        end_date TEXT NOT NULL DEFAULT '',
        total_amount REAL NOT NULL DEFAULT 0,
        department TEXT NOT NULL DEFAULT '',
        position TEXT NOT NULL DEFAULT '',
        documents_json TEXT NOT NULL DEFAULT '[]',
        expenses_json TEXT NOT NULL DEFAULT '[]',
        history_json TEXT NOT NULL DEFAULT '[]',
        created_at TEXT,
        updated_at TEXT
    );
"#;

/// Создание таблиц, если их ещё нет
pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        CREATE_TRAVEL_REQUEST_TABLE.to_string(),
    ))
    .await?;
    Ok(())
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Connecting to database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    ensure_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database already initialized"))?;
    Ok(())
}

/// Общая in-memory база для тестов обработчиков
#[cfg(test)]
pub async fn initialize_in_memory() -> anyhow::Result<()> {
    if DB_CONN.get().is_some() {
        return Ok(());
    }
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let conn = Database::connect(options).await?;
    ensure_schema(&conn).await?;
    // параллельный вызов мог успеть раньше, тогда используем его соединение
    let _ = DB_CONN.set(conn);
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
