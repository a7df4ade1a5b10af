use actix_web::{web, web::Data, App, HttpResponse, HttpServer};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::graphql::{build_schema, execute, TodoSchema};
use crate::store::TodoStore;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServingConfig {
    pub port: u16,
}

impl Default for ServingConfig {
    fn default() -> Self {
        ServingConfig { port: 8080 }
    }
}

/// Raw payload of `GET /graphql`. A missing `query` parameter executes the
/// empty document, which surfaces as a GraphQL error response rather than an
/// HTTP-level rejection.
#[derive(Debug, Deserialize)]
struct QueryPayload {
    #[serde(default)]
    query: String,
}

pub async fn run_and_serve(config: ServingConfig, store: TodoStore) -> std::io::Result<()> {
    let schema: TodoSchema = build_schema(store);

    info!("Serving GraphQL on 0.0.0.0:{}", config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(Data::new(schema.clone()))
            .configure(configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/graphql")
            .route(web::get().to(query_via_get))
            .route(web::post().to(query_via_post)),
    );
}

/// The query-string contract: always `200 OK`, execution errors embedded in
/// the JSON body.
async fn query_via_get(
    schema: web::Data<TodoSchema>,
    params: web::Query<QueryPayload>,
) -> HttpResponse {
    let response = execute(&schema, params.into_inner().query).await;
    HttpResponse::Ok().json(response)
}

async fn query_via_post(schema: web::Data<TodoSchema>, req: GraphQLRequest) -> GraphQLResponse {
    execute(&schema, req.into_inner()).await.into()
}
