pub mod config;
pub mod domain;
pub mod outbound;
pub mod serialize;
pub mod telemetry;

pub use domain::card;
pub use domain::user;
pub use outbound::repositories;
