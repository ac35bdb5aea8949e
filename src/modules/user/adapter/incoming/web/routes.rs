use actix_web::{get, post, web, HttpRequest, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::user::adapter::incoming::graphql::{CurrentUser, RequestCaller};
use crate::user::application::ports::incoming::use_cases::CallerKey;
use crate::AppState;

use super::extractors::MaybeAuthenticatedUser;

fn caller_key(req: &HttpRequest, user: &MaybeAuthenticatedUser) -> CallerKey {
    match user.0 {
        Some(user_id) => CallerKey::for_user(user_id.value()),
        None => {
            let addr = req
                .peer_addr()
                .map(|addr| addr.ip().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            CallerKey::for_address(&addr)
        }
    }
}

#[post("/graphql")]
pub async fn graphql_handler(
    data: web::Data<AppState>,
    req: HttpRequest,
    user: MaybeAuthenticatedUser,
    gql_request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = gql_request
        .into_inner()
        .data(RequestCaller(caller_key(&req, &user)));

    if let Some(user_id) = user.0 {
        request = request.data(CurrentUser(user_id));
    }

    data.schema.execute(request).await.into()
}

#[get("/graphql")]
pub async fn graphiql_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
