use async_graphql::extensions::Tracing;
use async_graphql::{EmptyMutation, EmptySubscription, Request, Response, Schema};
use tracing::warn;

use crate::store::TodoStore;

pub mod model;

pub use model::RootQuery;

pub type TodoSchema = Schema<RootQuery, EmptyMutation, EmptySubscription>;

pub fn build_schema(store: TodoStore) -> TodoSchema {
    Schema::build(RootQuery, EmptyMutation, EmptySubscription)
        .data(store)
        .extension(Tracing)
        .finish()
}

/// Execute a query document against the schema.
///
/// Execution errors stay in the response untouched; a non-empty error list is
/// additionally logged for diagnostics.
pub async fn execute(schema: &TodoSchema, request: impl Into<Request>) -> Response {
    let response = schema.execute(request).await;
    if !response.errors.is_empty() {
        warn!("Query execution returned errors: {:?}", response.errors);
    }
    response
}

#[cfg(test)]
mod tests {
    use async_graphql::Value;

    use crate::store::TodoStore;

    use super::{build_schema, execute};

    #[tokio::test]
    async fn execution_errors_stay_in_the_response() {
        let schema = build_schema(TodoStore::seeded());
        let response = execute(&schema, "{ nope }").await;
        assert!(!response.errors.is_empty());
        assert_eq!(response.data, Value::Null);
    }

    #[tokio::test]
    async fn empty_document_is_a_query_error() {
        let schema = build_schema(TodoStore::seeded());
        let response = execute(&schema, "").await;
        assert!(!response.errors.is_empty());
        assert_eq!(response.data, Value::Null);
    }
}
