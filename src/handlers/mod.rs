pub mod content_handler;
pub mod health_handler;

use actix_web::web;

use crate::auth::ApiTokenMiddleware;

pub use content_handler::{
    generate_final_exam, generate_flashcards, generate_module_content, generate_plan,
    generate_quiz,
};
pub use health_handler::health_check;

/// Registers `/health` and the token-guarded `/ai/*` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check).service(
        web::scope("/ai")
            .wrap(ApiTokenMiddleware)
            .service(generate_plan)
            .service(generate_flashcards)
            .service(generate_quiz)
            .service(generate_final_exam)
            .service(generate_module_content),
    );
}
