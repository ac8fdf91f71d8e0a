pub mod assignments;
pub mod health;
pub mod members;
pub mod permissions;
pub mod projects;
