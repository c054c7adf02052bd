use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationResult, DomainResultExt, Operation},
};

/// Takes no parameters: every stored article is returned, unpaged.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllArticlesQuery;

impl ArticleQueryService {
    pub async fn get_all_articles(
        &self,
        _query: GetAllArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self
            .read_repo
            .list_all()
            .await
            .for_operation(Operation::GetAllArticles)?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
