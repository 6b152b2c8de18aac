/// Total interrupted minutes for one name (computed, never stored).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub name: String,
    pub duration: i64,
}

impl Hit {
    pub fn new(name: impl Into<String>, duration: i64) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}
