#[derive(Debug, Clone, PartialEq)]
pub enum StoryViewerError {
    InvalidViewportHeight(f32),
    InvalidMinScale(f32),
    InvalidCornerRadius(f32),
    InvalidSnapVelocityFactor(f32),
    InvalidSpring { stiffness: f32, damping_ratio: f32 },
}

impl std::fmt::Display for StoryViewerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoryViewerError::InvalidViewportHeight(height) => {
                write!(f, "viewport height must be finite and positive, got {height}")
            }
            StoryViewerError::InvalidMinScale(scale) => {
                write!(f, "minimum scale must be within (0, 1], got {scale}")
            }
            StoryViewerError::InvalidCornerRadius(radius) => {
                write!(f, "corner radius must be finite and non-negative, got {radius}")
            }
            StoryViewerError::InvalidSnapVelocityFactor(factor) => {
                write!(f, "snap velocity factor must be finite and non-negative, got {factor}")
            }
            StoryViewerError::InvalidSpring {
                stiffness,
                damping_ratio,
            } => write!(
                f,
                "settle spring needs positive stiffness and damping, got stiffness {stiffness} ratio {damping_ratio}"
            ),
        }
    }
}

impl std::error::Error for StoryViewerError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    MissingSource { id: String },
    ConflictingSources { id: String },
}

impl std::fmt::Display for MediaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaError::MissingSource { id } => {
                write!(f, "story {id} has neither an image nor a video source")
            }
            MediaError::ConflictingSources { id } => {
                write!(f, "story {id} has both an image and a video source")
            }
        }
    }
}

impl std::error::Error for MediaError {}
