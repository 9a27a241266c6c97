pub const DEFAULT_SKIP: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 100;

/// Offset pagination shared by every list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub skip: i64,
    pub limit: i64,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}
