pub mod drink_service;
pub mod estimate_service;
pub mod game_service;
pub mod product_service;
