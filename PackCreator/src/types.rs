//! Types for pack operation progress tracking

/// Progress callback type for pack operations
pub type PackProgressCallback<'a> = &'a dyn Fn(&PackProgress);

/// Progress information during pack operations
#[derive(Debug, Clone)]
pub struct PackProgress {
    /// Current operation phase
    pub phase: PackPhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Current file being processed (if applicable)
    pub current_file: Option<String>,
}

impl PackProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: PackPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file/item name
    #[must_use]
    pub fn with_file(phase: PackPhase, current: usize, total: usize, file: impl Into<String>) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }

    /// Get the progress percentage (0.0 - 1.0)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

/// Phase of a pack operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackPhase {
    /// Checking inputs before any archive work
    Validating,
    /// Walking source folders
    Scanning,
    /// Classifying vehicle files
    Routing,
    /// Writing entries into the zip
    Writing,
    /// Operation complete
    Complete,
}

impl PackPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validating => "Validating inputs",
            Self::Scanning => "Scanning folders",
            Self::Routing => "Routing vehicle files",
            Self::Writing => "Writing archive",
            Self::Complete => "Complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert!((PackProgress::new(PackPhase::Writing, 5, 10).percentage() - 0.5).abs() < f32::EPSILON);
        assert!((PackProgress::new(PackPhase::Complete, 0, 0).percentage() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_with_file() {
        let progress = PackProgress::with_file(PackPhase::Routing, 1, 3, "alpha/model.yft");
        assert_eq!(progress.current_file.as_deref(), Some("alpha/model.yft"));
        assert_eq!(progress.phase.as_str(), "Routing vehicle files");
    }
}
