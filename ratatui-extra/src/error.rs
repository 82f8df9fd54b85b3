#[derive(thiserror::Error, Debug)]
pub enum RatatuiExtraError {
    #[error("Select list is not set.")]
    SelectListNotSet,

    #[error("Select item not found. (idx: {idx}, list_len: {list_len})")]
    SelectItemNotFound { idx: usize, list_len: usize },
}
