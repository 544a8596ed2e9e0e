// Quiz question catalog and answer audit endpoints.

pub mod catalog;
pub mod handlers;
