// Learning progress endpoints.

pub mod handlers;
