//! Database schema and asset names

/// Table holding every device row
pub const TABLE: &str = "devices";

/// File name of the extracted database
pub const DATABASE_NAME: &str = "android-devices.db";

/// File name of the zip archive the database ships in
pub const ASSET_NAME: &str = "android-devices.zip";

/// Schema version of the bundled asset
pub const SCHEMA_VERSION: u32 = 1;

/// DDL for [`TABLE`]
pub const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS devices (
    _id INTEGER PRIMARY KEY,
    manufacturer TEXT,
    name TEXT,
    codename TEXT,
    model TEXT
)";

/// Lookup indexes; the table is read-only once shipped
pub const CREATE_INDEXES: &str = "CREATE INDEX IF NOT EXISTS devices_codename ON devices (codename);
CREATE INDEX IF NOT EXISTS devices_model ON devices (model);";
