pub mod game;
pub mod health;
pub mod root;
