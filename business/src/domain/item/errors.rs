#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.not_found")]
    NotFound,
    #[error("item.already_exists")]
    AlreadyExists,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
