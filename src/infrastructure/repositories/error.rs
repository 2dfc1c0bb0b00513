use crate::domain::errors::DomainError;

/// A row that decoded but does not form a valid entity is a storage fault.
pub fn invalid_row(err: DomainError) -> DomainError {
    match err {
        DomainError::Validation(msg) => {
            DomainError::Persistence(format!("invalid stored row: {msg}"))
        }
        other => other,
    }
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        sqlx::Error::Database(db_err) => DomainError::Persistence(db_err.message().to_string()),
        sqlx::Error::ColumnDecode { index, source } => {
            DomainError::Persistence(format!("failed to decode column {index}: {source}"))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
