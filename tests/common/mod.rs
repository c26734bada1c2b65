#![allow(dead_code)]

pub mod assertions;
pub mod builders;
pub mod setup;

pub use assertions::*;
pub use builders::*;
pub use setup::*;

/// Mount the full route table on top of the given in-memory state.
macro_rules! test_service {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .configure(task_manager::handlers::configure::<task_manager::store::MemoryStore>),
        )
        .await
    };
}
