//! Diesel schema for the hosted task table.

diesel::table! {
    /// Task records backing the board.
    todos (id) {
        /// Store-assigned task identifier.
        id -> BigInt,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// User-entered task label.
        text -> Text,
        /// Board column, camelCase enum spelling.
        #[max_length = 50]
        status -> Varchar,
        /// First entry into the in-progress column.
        started_at -> Nullable<Timestamptz>,
        /// First entry into the done column.
        completed_at -> Nullable<Timestamptz>,
        /// Owning user identifier.
        #[max_length = 255]
        user_id -> Nullable<Varchar>,
    }
}
