use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitchenError {
    #[error("Ingredient '{id}' violates catalog invariant: {reason}")]
    CatalogInvariant { id: String, reason: String },

    #[error("Ingredient '{id}' is defined more than once")]
    DuplicateIngredient { id: String },

    #[error("Catalog needs exactly one {role} ingredient")]
    MissingRole { role: String },

    #[error("Invalid kitchen config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type KitchenResult<T> = Result<T, KitchenError>;
