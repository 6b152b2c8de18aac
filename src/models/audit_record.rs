//! Row of the internal `log` table.

#[derive(Debug, Clone)]
pub struct AuditRecord {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl AuditRecord {
    /// Operation and target in one column, e.g. `log (ralph)`.
    pub fn op_target(&self) -> String {
        if self.target.is_empty() {
            self.operation.clone()
        } else {
            format!("{} ({})", self.operation, self.target)
        }
    }
}
