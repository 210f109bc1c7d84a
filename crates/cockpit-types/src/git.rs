//! Git working tree summary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitStatus {
    pub branch: String,
    pub is_dirty: bool,
    /// Commits ahead of upstream (0 without an upstream)
    pub ahead: u32,
    /// Commits behind upstream (0 without an upstream)
    pub behind: u32,
}
