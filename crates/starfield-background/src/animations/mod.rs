pub mod shooting_star;
pub mod sky;
pub mod star;
