pub mod configuration;
pub mod contact;
pub mod routes;
pub mod startup;
pub mod telemetry;

pub use startup::run;
