use shared_types::{MigrationError, MigrationResult};

/// The half-open height window `(previous, snapshot]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightWindow {
    previous: u32,
    snapshot: u32,
}

impl HeightWindow {
    pub fn new(previous: u32, snapshot: u32) -> MigrationResult<Self> {
        if previous >= snapshot {
            return Err(MigrationError::InvalidRange(format!(
                "previous snapshot height {previous} must be below snapshot height {snapshot}"
            )));
        }
        Ok(Self { previous, snapshot })
    }

    /// First height inside the window.
    pub fn first(&self) -> u32 {
        self.previous + 1
    }

    /// Last height inside the window (the snapshot height).
    pub fn last(&self) -> u32 {
        self.snapshot
    }

    pub fn contains(&self, height: u32) -> bool {
        height > self.previous && height <= self.snapshot
    }
}
