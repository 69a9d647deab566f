//! Context structures for document rendering.

use serde::Serialize;

/// Context data provided to document templates for rendering.
///
/// This structure carries the dynamic values a workflow document skeleton
/// may interpolate: the feature name, the user-supplied introduction, and
/// an optional creation timestamp.
///
/// # Examples
///
/// ```
/// use specflow_doc::DocContext;
///
/// let context = DocContext::new("add-caching")
///     .with_introduction("Cache hot paths to cut latency.")
///     .with_created_at("2026-08-29T12:00:00Z");
/// assert_eq!(context.feature_name, "add-caching");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocContext {
    /// Name of the feature the document belongs to.
    pub feature_name: String,

    /// User-supplied introduction for the feature (may be empty).
    pub introduction: String,

    /// RFC3339 creation timestamp (empty when not stamped).
    pub created_at: String,
}

impl DocContext {
    /// Creates a new `DocContext` for a feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use specflow_doc::DocContext;
    ///
    /// let context = DocContext::new("my-feature");
    /// assert!(context.introduction.is_empty());
    /// ```
    #[must_use]
    pub fn new(feature_name: impl Into<String>) -> Self {
        Self {
            feature_name: feature_name.into(),
            ..Default::default()
        }
    }

    /// Sets the introduction text for this context.
    #[must_use]
    pub fn with_introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = introduction.into();
        self
    }

    /// Sets the creation timestamp for this context.
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }
}
