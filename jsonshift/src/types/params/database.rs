use crate::core::client::database::constant::{DEFAULT_POOL_SIZE, DOCUMENTS_TABLE};

/// DatabaseArgs - Arguments used to set up the document store connection
#[derive(Debug, Clone)]
pub struct DatabaseArgs {
    pub connection_uri: String,
    pub table_name: String,
    pub pool_size: u32,
}

impl DatabaseArgs {
    pub fn new(connection_uri: impl Into<String>) -> Self {
        Self {
            connection_uri: connection_uri.into(),
            table_name: DOCUMENTS_TABLE.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }
}
