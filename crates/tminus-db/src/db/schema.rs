//! Table definitions, one module per backend.

pub mod postgres {
    diesel::table! {
        events (id) {
            id -> Int4,
            #[max_length = 40]
            slug -> Varchar,
            #[max_length = 200]
            title -> Varchar,
            until_utc -> Timestamptz,
            created_at -> Timestamptz,
        }
    }
}

pub mod sqlite {
    diesel::table! {
        events (id) {
            id -> Integer,
            slug -> Text,
            title -> Text,
            until_utc -> TimestamptzSqlite,
            created_at -> TimestamptzSqlite,
        }
    }
}
