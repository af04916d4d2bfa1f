/// Errors raised while loading the site layout.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The dataset is not valid JSON or does not match the expected shape.
    #[error("layout parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A plot polygon has fewer than three vertices.
    #[error("plot {id}: polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { id: String, count: usize },

    /// Viewer tunables are inconsistent.
    #[error("invalid viewer config: {0}")]
    InvalidConfig(String),
}
