pub mod constants;
pub mod drinking_games;
pub mod promille;
pub mod validation;
pub mod wheel;
