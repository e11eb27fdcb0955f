/// Error type for catalog construction.
///
/// The engine accepts any catalog content, but it needs something to walk
/// through: at least one question and at least one label in each selection area.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog has no questions")]
    NoQuestions,

    #[error("Catalog has no priority areas")]
    NoPriorityAreas,

    #[error("Catalog has no action areas")]
    NoActionAreas,
}
