use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, Executor, QueryBuilder, Sqlite, SqliteConnection, Transaction};
use tracing::info;

use taskforge_core::{
    Comment, CustomField, CustomFieldValue, Dataset, Organization, Project, Section, Subtask,
    Tag, Task, TaskTag, Team, TeamMembership, User,
};

use crate::errors::{SinkError, SinkResult};

const SCHEMA_SQL: &str = include_str!("../schema.sql");

/// Rows per INSERT statement, kept well under SQLite's bind-variable limit.
const INSERT_CHUNK: usize = 500;

/// Sink accepting a schema bootstrap and batched row inserts.
#[async_trait]
pub trait DatasetSink {
    /// Identifier of the backing engine (e.g. `sqlite`).
    fn engine(&self) -> &'static str;

    /// Create all tables and constraints; idempotent.
    async fn bootstrap(&mut self) -> SinkResult<()>;

    /// Persist a whole dataset in one transaction: all rows land or none do.
    async fn persist(&mut self, dataset: &Dataset) -> SinkResult<()>;
}

/// SQLite-backed sink holding one exclusive connection for the run.
pub struct SqliteSink {
    conn: SqliteConnection,
}

impl SqliteSink {
    /// Open the database file, creating it if missing, with foreign-key
    /// enforcement on so ordering bugs surface as errors instead of orphans.
    pub async fn open(path: &Path) -> SinkResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let conn = SqliteConnection::connect_with(&options).await?;
        Ok(Self { conn })
    }

    /// In-memory database; used by tests.
    pub async fn open_in_memory() -> SinkResult<Self> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);
        let conn = SqliteConnection::connect_with(&options).await?;
        Ok(Self { conn })
    }

    /// Count rows in one of the fixture tables.
    pub async fn table_count(&mut self, table: &'static str) -> SinkResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&mut self.conn).await?;
        Ok(count as u64)
    }
}

#[async_trait]
impl DatasetSink for SqliteSink {
    fn engine(&self) -> &'static str {
        "sqlite"
    }

    async fn bootstrap(&mut self) -> SinkResult<()> {
        if SCHEMA_SQL.trim().is_empty() {
            return Err(SinkError::SchemaBootstrap(
                "embedded schema definition is empty".into(),
            ));
        }
        self.conn
            .execute(SCHEMA_SQL)
            .await
            .map_err(|err| SinkError::SchemaBootstrap(err.to_string()))?;
        info!("schema bootstrapped");
        Ok(())
    }

    async fn persist(&mut self, dataset: &Dataset) -> SinkResult<()> {
        let mut tx = self.conn.begin().await?;

        insert_organization(&mut tx, &dataset.organization).await?;
        insert_users(&mut tx, &dataset.users).await?;
        insert_teams(&mut tx, &dataset.teams).await?;
        insert_team_memberships(&mut tx, &dataset.team_memberships).await?;
        insert_projects(&mut tx, &dataset.projects).await?;
        insert_sections(&mut tx, &dataset.sections).await?;
        insert_tasks(&mut tx, &dataset.tasks).await?;
        insert_subtasks(&mut tx, &dataset.subtasks).await?;
        insert_tags(&mut tx, &dataset.tags).await?;
        insert_task_tags(&mut tx, &dataset.task_tags).await?;
        insert_comments(&mut tx, &dataset.comments).await?;
        insert_custom_fields(&mut tx, &dataset.custom_fields).await?;
        insert_custom_field_values(&mut tx, &dataset.custom_field_values).await?;

        tx.commit().await?;
        info!("dataset committed");
        Ok(())
    }
}

fn map_insert_error(table: &'static str, err: sqlx::Error) -> SinkError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.message().contains("FOREIGN KEY constraint failed")
    {
        return SinkError::ReferentialIntegrity { table };
    }
    SinkError::Database(err)
}

async fn insert_organization(
    tx: &mut Transaction<'_, Sqlite>,
    organization: &Organization,
) -> SinkResult<()> {
    sqlx::query("INSERT INTO organizations (org_id, name, domain, created_at) VALUES (?, ?, ?, ?)")
        .bind(&organization.org_id)
        .bind(&organization.name)
        .bind(&organization.domain)
        .bind(organization.created_at)
        .execute(&mut **tx)
        .await
        .map_err(|err| map_insert_error("organizations", err))?;
    Ok(())
}

async fn insert_users(tx: &mut Transaction<'_, Sqlite>, rows: &[User]) -> SinkResult<()> {
    for chunk in rows.chunks(INSERT_CHUNK) {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO users (user_id, org_id, full_name, email, role, joined_at) ",
        );
        builder.push_values(chunk, |mut row, user| {
            row.push_bind(&user.user_id)
                .push_bind(&user.org_id)
                .push_bind(&user.full_name)
                .push_bind(&user.email)
                .push_bind(user.role.as_str())
                .push_bind(user.joined_at);
        });
        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|err| map_insert_error("users", err))?;
    }
    Ok(())
}

async fn insert_teams(tx: &mut Transaction<'_, Sqlite>, rows: &[Team]) -> SinkResult<()> {
    for chunk in rows.chunks(INSERT_CHUNK) {
        let mut builder =
            QueryBuilder::<Sqlite>::new("INSERT INTO teams (team_id, org_id, name, created_at) ");
        builder.push_values(chunk, |mut row, team| {
            row.push_bind(&team.team_id)
                .push_bind(&team.org_id)
                .push_bind(&team.name)
                .push_bind(team.created_at);
        });
        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|err| map_insert_error("teams", err))?;
    }
    Ok(())
}

async fn insert_team_memberships(
    tx: &mut Transaction<'_, Sqlite>,
    rows: &[TeamMembership],
) -> SinkResult<()> {
    for chunk in rows.chunks(INSERT_CHUNK) {
        let mut builder =
            QueryBuilder::<Sqlite>::new("INSERT INTO team_memberships (team_id, user_id) ");
        builder.push_values(chunk, |mut row, membership| {
            row.push_bind(&membership.team_id)
                .push_bind(&membership.user_id);
        });
        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|err| map_insert_error("team_memberships", err))?;
    }
    Ok(())
}

async fn insert_projects(tx: &mut Transaction<'_, Sqlite>, rows: &[Project]) -> SinkResult<()> {
    for chunk in rows.chunks(INSERT_CHUNK) {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO projects (project_id, team_id, name, project_type, created_at, due_date) ",
        );
        builder.push_values(chunk, |mut row, project| {
            row.push_bind(&project.project_id)
                .push_bind(&project.team_id)
                .push_bind(&project.name)
                .push_bind(project.project_type.as_str())
                .push_bind(project.created_at)
                .push_bind(project.due_date);
        });
        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|err| map_insert_error("projects", err))?;
    }
    Ok(())
}

async fn insert_sections(tx: &mut Transaction<'_, Sqlite>, rows: &[Section]) -> SinkResult<()> {
    for chunk in rows.chunks(INSERT_CHUNK) {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO sections (section_id, project_id, name, position) ",
        );
        builder.push_values(chunk, |mut row, section| {
            row.push_bind(&section.section_id)
                .push_bind(&section.project_id)
                .push_bind(&section.name)
                .push_bind(section.position);
        });
        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|err| map_insert_error("sections", err))?;
    }
    Ok(())
}

async fn insert_tasks(tx: &mut Transaction<'_, Sqlite>, rows: &[Task]) -> SinkResult<()> {
    for chunk in rows.chunks(INSERT_CHUNK) {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO tasks (task_id, project_id, section_id, assignee_id, name, description, \
             due_date, completed, created_at, completed_at) ",
        );
        builder.push_values(chunk, |mut row, task| {
            row.push_bind(&task.task_id)
                .push_bind(&task.project_id)
                .push_bind(&task.section_id)
                .push_bind(&task.assignee_id)
                .push_bind(&task.name)
                .push_bind(&task.description)
                .push_bind(task.due_date)
                .push_bind(task.completed)
                .push_bind(task.created_at)
                .push_bind(task.completed_at);
        });
        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|err| map_insert_error("tasks", err))?;
    }
    Ok(())
}

async fn insert_subtasks(tx: &mut Transaction<'_, Sqlite>, rows: &[Subtask]) -> SinkResult<()> {
    for chunk in rows.chunks(INSERT_CHUNK) {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO subtasks (subtask_id, parent_task_id, assignee_id, name, completed, \
             created_at, completed_at) ",
        );
        builder.push_values(chunk, |mut row, subtask| {
            row.push_bind(&subtask.subtask_id)
                .push_bind(&subtask.parent_task_id)
                .push_bind(&subtask.assignee_id)
                .push_bind(&subtask.name)
                .push_bind(subtask.completed)
                .push_bind(subtask.created_at)
                .push_bind(subtask.completed_at);
        });
        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|err| map_insert_error("subtasks", err))?;
    }
    Ok(())
}

async fn insert_tags(tx: &mut Transaction<'_, Sqlite>, rows: &[Tag]) -> SinkResult<()> {
    for chunk in rows.chunks(INSERT_CHUNK) {
        let mut builder = QueryBuilder::<Sqlite>::new("INSERT INTO tags (tag_id, name) ");
        builder.push_values(chunk, |mut row, tag| {
            row.push_bind(&tag.tag_id).push_bind(&tag.name);
        });
        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|err| map_insert_error("tags", err))?;
    }
    Ok(())
}

async fn insert_task_tags(tx: &mut Transaction<'_, Sqlite>, rows: &[TaskTag]) -> SinkResult<()> {
    for chunk in rows.chunks(INSERT_CHUNK) {
        let mut builder = QueryBuilder::<Sqlite>::new("INSERT INTO task_tags (task_id, tag_id) ");
        builder.push_values(chunk, |mut row, task_tag| {
            row.push_bind(&task_tag.task_id).push_bind(&task_tag.tag_id);
        });
        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|err| map_insert_error("task_tags", err))?;
    }
    Ok(())
}

async fn insert_comments(tx: &mut Transaction<'_, Sqlite>, rows: &[Comment]) -> SinkResult<()> {
    for chunk in rows.chunks(INSERT_CHUNK) {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO comments (comment_id, task_id, user_id, body, created_at) ",
        );
        builder.push_values(chunk, |mut row, comment| {
            row.push_bind(&comment.comment_id)
                .push_bind(&comment.task_id)
                .push_bind(&comment.user_id)
                .push_bind(&comment.body)
                .push_bind(comment.created_at);
        });
        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|err| map_insert_error("comments", err))?;
    }
    Ok(())
}

async fn insert_custom_fields(
    tx: &mut Transaction<'_, Sqlite>,
    rows: &[CustomField],
) -> SinkResult<()> {
    for chunk in rows.chunks(INSERT_CHUNK) {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO custom_fields (field_id, project_id, name, field_type) ",
        );
        builder.push_values(chunk, |mut row, field| {
            row.push_bind(&field.field_id)
                .push_bind(&field.project_id)
                .push_bind(&field.name)
                .push_bind(field.field_type.as_str());
        });
        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|err| map_insert_error("custom_fields", err))?;
    }
    Ok(())
}

async fn insert_custom_field_values(
    tx: &mut Transaction<'_, Sqlite>,
    rows: &[CustomFieldValue],
) -> SinkResult<()> {
    for chunk in rows.chunks(INSERT_CHUNK) {
        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO custom_field_values (field_id, task_id, value) ",
        );
        builder.push_values(chunk, |mut row, value| {
            row.push_bind(&value.field_id)
                .push_bind(&value.task_id)
                .push_bind(&value.value);
        });
        builder
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|err| map_insert_error("custom_field_values", err))?;
    }
    Ok(())
}
