use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CredentialQuery {
    teacher_username: Option<String>,
}

/// The `teacher_username` query parameter, if one was supplied.
/// Blank values count as missing; anything else is looked up verbatim. Never rejects the request; the use case
/// decides between 401 variants.
/// Usage: Add `credential: TeacherCredential` as a parameter to your handler function.
#[derive(Debug, Clone, Default)]
pub struct TeacherCredential(pub Option<String>);

impl TeacherCredential {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequest for TeacherCredential {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let username = web::Query::<CredentialQuery>::from_query(req.query_string())
            .ok()
            .and_then(|query| query.into_inner().teacher_username)
            .filter(|name| !name.trim().is_empty());

        ready(Ok(TeacherCredential(username)))
    }
}
