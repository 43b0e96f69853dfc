pub mod address;
pub mod appointment;
pub mod caregiver;
pub mod job;
pub mod job_application;
pub mod member;
pub mod user;

pub mod prelude;
