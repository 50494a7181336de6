/// Authorization collaborator consulted before a report is produced.
/// Only administrators may see sales reports.
pub trait AccessPolicy: Send + Sync {
    fn is_authorized(&self) -> bool;
}

/// Access decided once, up front (e.g. from configuration or an already-resolved session)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAccess {
    granted: bool,
}

impl StaticAccess {
    pub fn new(granted: bool) -> Self {
        Self { granted }
    }

    pub fn granted() -> Self {
        Self::new(true)
    }

    pub fn denied() -> Self {
        Self::new(false)
    }
}

impl AccessPolicy for StaticAccess {
    fn is_authorized(&self) -> bool {
        self.granted
    }
}
