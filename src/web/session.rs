use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "kiosk.sid";

/// Issues a signed session id cookie when the client has none.
///
/// No route reads the session; the cookie only pins a browser identity so
/// the kiosk pair stays distinguishable in the logs.
pub async fn ensure_session(
    jar: SignedCookieJar,
    request: Request,
    next: Next,
) -> (SignedCookieJar, Response) {
    let jar = if jar.get(SESSION_COOKIE).is_none() {
        jar.add(
            Cookie::build((SESSION_COOKIE, Uuid::new_v4().to_string()))
                .path("/")
                .http_only(true),
        )
    } else {
        jar
    };

    let response = next.run(request).await;

    (jar, response)
}
