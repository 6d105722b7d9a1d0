//! Diesel schema for board persistence.

diesel::table! {
    /// Board columns in display order.
    board_columns (id) {
        /// Column identifier.
        #[max_length = 255]
        id -> Varchar,
        /// Owning board identifier.
        #[max_length = 255]
        board_id -> Varchar,
        /// Display title.
        #[max_length = 255]
        title -> Varchar,
        /// Ordinal position among the board's columns.
        ordinal -> Int4,
    }
}

diesel::table! {
    /// Task records with per-column ordering positions.
    board_tasks (id) {
        /// Task identifier.
        #[max_length = 255]
        id -> Varchar,
        /// Owning board identifier.
        #[max_length = 255]
        board_id -> Varchar,
        /// Owning column identifier.
        #[max_length = 255]
        column_id -> Varchar,
        /// Task title.
        title -> Varchar,
        /// Optional description.
        description -> Nullable<Varchar>,
        /// Priority label.
        #[max_length = 50]
        priority -> Varchar,
        /// Optional assignee label.
        #[max_length = 255]
        assignee -> Nullable<Varchar>,
        /// Integer sort key within the column.
        position -> Int8,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(board_columns, board_tasks);
