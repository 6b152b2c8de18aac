/// Maximum stored length of the interrupter's name, in characters.
pub const MAX_NAME_LENGTH: usize = 20;

/// Maximum stored length of the reason, in characters.
pub const MAX_REASON_LENGTH: usize = 120;

/// One logged interruption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub name: String,
    /// Minutes, always > 0
    pub duration: i64,
    pub reason: String,
}
