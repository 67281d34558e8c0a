//! User discovery

use tracing::instrument;

use crate::dto::{map_all, PublicProfileResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct SearchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SearchService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public profiles offering a skill whose name contains `query`.
    ///
    /// A blank query matches nobody rather than everybody.
    #[instrument(skip(self))]
    pub async fn search_users(&self, query: &str) -> ServiceResult<Vec<PublicProfileResponse>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let profiles = self.ctx.profile_repo().search_public(query).await?;
        Ok(map_all(profiles))
    }
}
