/// An open text document as seen by the completion server.
///
/// Completion output does not depend on document text or version, so only
/// the language used to route requests is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDocument {
    /// Language id after extension-based resolution
    pub language_id: String,
}
