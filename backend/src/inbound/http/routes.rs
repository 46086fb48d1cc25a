//! Route table for the site.
//!
//! Login, registration, logout, and health probes are public. Everything
//! under `/posts` and `/search` is wrapped in [`RequireSession`].

use actix_web::web;

use crate::inbound::http::{accounts, comments, health, posts};
use crate::middleware::RequireSession;

/// Register every route on `cfg`, guarding the content routes with `guard`.
pub fn configure(cfg: &mut web::ServiceConfig, guard: RequireSession) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(accounts::login_page))
            .route(web::post().to(accounts::login)),
    )
    .service(
        web::resource("/register")
            .route(web::get().to(accounts::register_page))
            .route(web::post().to(accounts::register)),
    )
    .service(web::resource("/logout").route(web::get().to(accounts::logout)))
    .service(health::ready)
    .service(health::live)
    .service(
        web::resource("/search")
            .wrap(guard.clone())
            .route(web::get().to(posts::search)),
    )
    .service(
        web::scope("/posts")
            .wrap(guard)
            .service(
                web::resource("")
                    .route(web::get().to(posts::index))
                    .route(web::post().to(posts::create)),
            )
            // Before `/{id}` so "new" is never parsed as an id.
            .service(web::resource("/new").route(web::get().to(posts::new_form)))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(posts::show))
                    .route(web::put().to(posts::update))
                    .route(web::patch().to(posts::update))
                    .route(web::delete().to(posts::delete)),
            )
            .service(web::resource("/{id}/edit").route(web::get().to(posts::edit_form)))
            .service(web::resource("/{id}/comments").route(web::post().to(comments::create)))
            .service(
                web::resource("/{post_id}/comments/{comment_id}/edit")
                    .route(web::get().to(comments::edit_form)),
            )
            .service(
                web::resource("/{post_id}/comments/{comment_id}")
                    .route(web::put().to(comments::update))
                    .route(web::patch().to(comments::update))
                    .route(web::delete().to(comments::delete)),
            ),
    );
}
