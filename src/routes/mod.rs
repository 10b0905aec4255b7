// Route exports
pub mod beans;
pub mod questions;
pub mod recommend;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recommend::configure)
            .configure(beans::configure)
            .configure(questions::configure),
    );
}
