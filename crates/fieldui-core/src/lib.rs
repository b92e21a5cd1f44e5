pub mod collaborators;
pub mod derivative;
pub mod models;
pub mod registry;
pub mod views;
