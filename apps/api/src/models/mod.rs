pub mod profile;
pub mod progress;
pub mod quiz;
pub mod recommendation;
