//! Genesis module store entries.

use serde::Serialize;
use serde_json::Value;
use shared_types::{MigrationError, MigrationResult};

pub const MODULE_NAME_AUTH: &str = "auth";
pub const MODULE_NAME_TOKEN: &str = "token";
pub const MODULE_NAME_POS: &str = "pos";
pub const MODULE_NAME_LEGACY: &str = "legacy";
pub const MODULE_NAME_INTEROPERABILITY: &str = "interoperability";

/// One module's genesis store: the data and the schema it conforms to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenesisAsset {
    pub module: String,
    pub data: Value,
    pub schema: Value,
}

impl GenesisAsset {
    /// Render `data` into an entry for `module`.
    pub fn new<T: Serialize>(module: &str, data: &T, schema: Value) -> MigrationResult<Self> {
        let data = serde_json::to_value(data)
            .map_err(|e| MigrationError::Serialization(format!("{module} genesis data: {e}")))?;
        Ok(Self {
            module: module.to_string(),
            data,
            schema,
        })
    }
}
