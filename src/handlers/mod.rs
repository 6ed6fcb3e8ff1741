pub mod guestbook_handlers;
pub mod page_handlers;
pub mod pitchdeck_handlers;

use actix_web::web;

use crate::errors::AppError;

/// Register every page and fragment route. Static files and the 404 fallback
/// are attached by the caller, which knows where the assets live.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| AppError::Form(err.to_string()).into()),
    )
    .route("/", web::get().to(page_handlers::root))
    .route("/home", web::get().to(page_handlers::home))
    .route("/team", web::get().to(page_handlers::team))
    // Pitch deck and comments
    .route("/pitchdeck", web::get().to(pitchdeck_handlers::pitchdeck))
    .route("/nextslide", web::get().to(pitchdeck_handlers::next_slide))
    .route(
        "/previousslide",
        web::get().to(pitchdeck_handlers::previous_slide),
    )
    .route("/newcomment", web::get().to(pitchdeck_handlers::new_comment))
    .service(
        web::resource("/createcomment")
            .route(web::post().to(pitchdeck_handlers::create_comment))
            .default_service(web::to(page_handlers::method_not_allowed)),
    )
    // Guestbook
    .route("/guestbook", web::get().to(guestbook_handlers::guestbook))
    .route(
        "/newguestbookentry",
        web::get().to(guestbook_handlers::new_entry),
    )
    .service(
        web::resource("/createguestbookentry")
            .route(web::post().to(guestbook_handlers::create_entry))
            .default_service(web::to(page_handlers::method_not_allowed)),
    );
}
