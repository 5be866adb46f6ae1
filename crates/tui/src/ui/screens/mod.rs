pub mod assistant;
pub mod budget;
pub mod login;
pub mod overview;
pub mod profile;
pub mod transactions;
