use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;

mod schema;

use crate::datamodel::Library;
use schema::{RootMutation, RootQuery};

pub type LibrarySchema = Schema<RootQuery, RootMutation, EmptySubscription>;

pub fn build_schema(library: Library) -> LibrarySchema {
    Schema::build(RootQuery, RootMutation, EmptySubscription)
        .data(library)
        .finish()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

#[axum::debug_handler]
async fn graphql_handler(
    State(schema): State<LibrarySchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let req = req.into_inner();
    tracing::debug!(operation = ?req.operation_name, "executing request");

    let res = schema.execute(req).await;
    if res.is_err() {
        tracing::warn!(errors = res.errors.len(), "request finished with errors");
    }
    res.into()
}

pub fn make_app(library: Library) -> Router {
    Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .with_state(build_schema(library))
}
