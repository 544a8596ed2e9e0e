// Student profile endpoints.

pub mod handlers;
