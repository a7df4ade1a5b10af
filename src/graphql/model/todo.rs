use async_graphql::{Context, Object, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::store::TodoStore;

#[derive(Debug, Clone, Default, PartialEq, Eq, SimpleObject, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub done: bool,
}

pub struct RootQuery;

#[Object]
impl RootQuery {
    /// Fetch a single todo by id.
    ///
    /// A missing `id` or an unmatched one yields the zero-value record, never
    /// null and never an error.
    async fn todo(
        &self,
        ctx: &Context<'_>,
        id: Option<String>,
        // Declared on the API but never consulted when matching.
        #[graphql(name = "done")] _done: Option<bool>,
    ) -> Todo {
        let store = ctx.data_unchecked::<TodoStore>();
        id.and_then(|id| store.find(&id).cloned()).unwrap_or_default()
    }

    /// List todos whose completion state matches the `done` argument.
    ///
    /// The filter is the string comparison `done == "true"`; when the
    /// argument is absent no records accumulate at all.
    async fn todos(&self, ctx: &Context<'_>, done: Option<String>) -> Vec<Todo> {
        let store = ctx.data_unchecked::<TodoStore>();
        match done {
            Some(done) => store.with_done(done == "true"),
            None => Vec::new(),
        }
    }
}
