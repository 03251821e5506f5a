//! SQL DDL for the vault. SQLite-first design.

/// SQLite schema with:
/// - `users.username` UNIQUE, the authoritative guard for registration races
/// - `categories` UNIQUE on `(user_id, category_name)`
/// - `passwords.category_id` nulled out when its category is deleted
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT NOT NULL,
    username TEXT NOT NULL UNIQUE,
    pin TEXT NOT NULL -- argon2 PHC string
);

CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    category_name TEXT NOT NULL,
    UNIQUE (user_id, category_name)
);

CREATE TABLE IF NOT EXISTS passwords (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    platform TEXT NOT NULL,
    img_platform TEXT NOT NULL,
    email TEXT NOT NULL,
    password TEXT NOT NULL,
    category_id INTEGER NULL REFERENCES categories(id) ON DELETE SET NULL
);

CREATE INDEX IF NOT EXISTS idx_passwords_user_id ON passwords(user_id);
CREATE INDEX IF NOT EXISTS idx_passwords_category_id ON passwords(category_id);
"#;
