//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Category label.
        #[max_length = 255]
        category -> Varchar,
        /// Priority level (1..=5, 1 = highest).
        priority -> Int2,
        /// Due timestamp.
        due_date -> Timestamptz,
        /// Completion flag.
        completed -> Bool,
        /// Tag set as a JSON array of strings.
        tags -> Jsonb,
        /// Reminder flag.
        reminder_enabled -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
