pub mod audit_record;
pub mod entry;
pub mod hit;

pub use audit_record::AuditRecord;
pub use entry::Entry;
pub use hit::Hit;
