use crate::domain::errors::DomainError;

const CNT_ARTICLE_PKEY: &str = "articles_pkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_PKEY => DomainError::Conflict("article id already exists".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" | "23502" => {
                        return DomainError::Persistence(format!(
                            "constraint violated: {}",
                            db_err.message()
                        ));
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("article not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
