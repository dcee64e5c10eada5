use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreysteelError {
    #[error("{name} has no magical ability")]
    NotAMagicUser { name: String },

    #[error("{name} has no ranged weapon or ranged skill")]
    NoRangedLoadout { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GreysteelError>;
