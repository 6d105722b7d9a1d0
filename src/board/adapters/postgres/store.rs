//! `PostgreSQL` board store implementation.

use super::{
    models::{ColumnRow, NewColumnRow, NewTaskRow, TaskRow},
    schema::{board_columns, board_tasks},
};
use crate::board::{
    domain::{
        Board, BoardId, Column, ColumnId, PersistedTaskData, Priority, Reposition, Task, TaskId,
        default_columns,
    },
    ports::{BoardStore, BoardStoreError, BoardStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed board store.
#[derive(Debug, Clone)]
pub struct PostgresBoardStore {
    pool: BoardPgPool,
}

impl From<DieselError> for BoardStoreError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

impl PostgresBoardStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> BoardStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BoardStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(BoardStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(BoardStoreError::persistence)?
    }
}

#[async_trait]
impl BoardStore for PostgresBoardStore {
    async fn fetch_or_seed(&self, board_id: &BoardId) -> BoardStoreResult<Board> {
        let owned_board_id = board_id.clone();
        self.run_blocking(move |connection| {
            let mut columns = load_columns(connection, &owned_board_id)?;
            if columns.is_empty() {
                seed_default_columns(connection, &owned_board_id)?;
                columns = load_columns(connection, &owned_board_id)?;
            }
            let tasks = board_tasks::table
                .filter(board_tasks::board_id.eq(owned_board_id.as_str()))
                .order((board_tasks::column_id.asc(), board_tasks::position.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)?;
            assemble_board(&columns, tasks)
        })
        .await
    }

    async fn create_task(
        &self,
        board_id: &BoardId,
        task: &Task,
        column_id: &ColumnId,
        position: i64,
    ) -> BoardStoreResult<()> {
        let new_row = to_new_row(board_id, task, column_id, position);
        let owned_column_id = column_id.clone();
        self.run_blocking(move |connection| {
            diesel::insert_into(board_tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        BoardStoreError::UnknownColumn(owned_column_id.clone())
                    }
                    _ => BoardStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update_task(&self, task: &Task) -> BoardStoreResult<()> {
        let task_id = task.id().clone();
        let title = task.title().to_owned();
        let description = task.description().map(str::to_owned);
        let priority = task.priority().as_str().to_owned();
        let assignee = task.assignee().map(str::to_owned);
        let updated_at = task.updated_at();

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                board_tasks::table.filter(board_tasks::id.eq(task_id.as_str())),
            )
            .set((
                board_tasks::title.eq(&title),
                board_tasks::description.eq(&description),
                board_tasks::priority.eq(&priority),
                board_tasks::assignee.eq(&assignee),
                board_tasks::updated_at.eq(updated_at),
            ))
            .execute(connection)?;
            if affected == 0 {
                return Err(BoardStoreError::NotFound(task_id.clone()));
            }
            Ok(())
        })
        .await
    }

    async fn delete_task(&self, task_id: &TaskId) -> BoardStoreResult<()> {
        let owned_task_id = task_id.clone();
        self.run_blocking(move |connection| {
            let affected = diesel::delete(
                board_tasks::table.filter(board_tasks::id.eq(owned_task_id.as_str())),
            )
            .execute(connection)?;
            if affected == 0 {
                return Err(BoardStoreError::NotFound(owned_task_id.clone()));
            }
            Ok(())
        })
        .await
    }

    async fn batch_reposition(
        &self,
        board_id: &BoardId,
        entries: &[Reposition],
    ) -> BoardStoreResult<()> {
        let owned_board_id = board_id.clone();
        let owned_entries = entries.to_vec();
        self.run_blocking(move |connection| {
            connection.transaction::<_, BoardStoreError, _>(|transaction| {
                for entry in &owned_entries {
                    let affected = diesel::update(
                        board_tasks::table
                            .filter(board_tasks::id.eq(entry.task_id.as_str()))
                            .filter(board_tasks::board_id.eq(owned_board_id.as_str())),
                    )
                    .set((
                        board_tasks::column_id.eq(entry.column_id.as_str()),
                        board_tasks::position.eq(entry.position),
                    ))
                    .execute(transaction)?;
                    if affected == 0 {
                        return Err(BoardStoreError::NotFound(entry.task_id.clone()));
                    }
                }
                Ok(())
            })
        })
        .await
    }
}

fn load_columns(
    connection: &mut PgConnection,
    board_id: &BoardId,
) -> BoardStoreResult<Vec<ColumnRow>> {
    let rows = board_columns::table
        .filter(board_columns::board_id.eq(board_id.as_str()))
        .order(board_columns::ordinal.asc())
        .select(ColumnRow::as_select())
        .load::<ColumnRow>(connection)?;
    Ok(rows)
}

fn seed_default_columns(
    connection: &mut PgConnection,
    board_id: &BoardId,
) -> BoardStoreResult<()> {
    let mut ordinal = 0_i32;
    let mut rows = Vec::new();
    for column in default_columns() {
        rows.push(NewColumnRow {
            id: column.id().as_str().to_owned(),
            board_id: board_id.as_str().to_owned(),
            title: column.title().to_owned(),
            ordinal,
        });
        ordinal = ordinal.saturating_add(1);
    }
    diesel::insert_into(board_columns::table)
        .values(&rows)
        .execute(connection)?;
    Ok(())
}

fn assemble_board(columns: &[ColumnRow], tasks: Vec<TaskRow>) -> BoardStoreResult<Board> {
    let descriptors: Vec<Column> = columns
        .iter()
        .map(|row| Column::new(ColumnId::new(row.id.clone()), row.title.clone()))
        .collect();
    let mut board = Board::new(descriptors);

    // Task rows arrive ordered by (column, position); appending in row order
    // reproduces the persisted sequence of each column.
    for row in tasks {
        let column_id = ColumnId::new(row.column_id.clone());
        let task = row_to_task(row)?;
        board = board
            .with_task_added(&column_id, task)
            .map_err(BoardStoreError::persistence)?;
    }
    Ok(board)
}

fn to_new_row(board_id: &BoardId, task: &Task, column_id: &ColumnId, position: i64) -> NewTaskRow {
    NewTaskRow {
        id: task.id().as_str().to_owned(),
        board_id: board_id.as_str().to_owned(),
        column_id: column_id.as_str().to_owned(),
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        priority: task.priority().as_str().to_owned(),
        assignee: task.assignee().map(str::to_owned),
        position,
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> BoardStoreResult<Task> {
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(BoardStoreError::persistence)?;
    let data = PersistedTaskData {
        id: TaskId::new(row.id),
        title: row.title,
        description: row.description,
        priority,
        assignee: row.assignee,
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Ok(Task::from_persisted(data))
}
