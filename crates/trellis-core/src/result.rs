use crate::error::TrellisError;

pub type TrellisResult<T> = Result<T, TrellisError>;
