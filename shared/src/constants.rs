pub const API_BASE_URL: &str = "http://localhost:3000/api";
pub const DRINKS_ENDPOINT: &str = "/drinks";
pub const ESTIMATE_ENDPOINT: &str = "/estimate";
pub const PRODUCTS_ENDPOINT: &str = "/products";
pub const GAMES_ENDPOINT: &str = "/games";

pub const PRODUCT_API_BASE_URL: &str = "https://world.openfoodfacts.org/api/v0/product";

pub const INVALID_BARCODE_ERROR: &str = "Barcode must be 8 to 14 digits";
pub const INVALID_WEIGHT_ERROR: &str = "Please enter a valid body weight in kg";
pub const INVALID_VOLUME_ERROR: &str = "Please enter a valid drink volume in ml";
pub const PRODUCT_NOT_FOUND_ERROR: &str = "No product found for this barcode";
pub const NETWORK_ERROR: &str = "Network error. Please try again";

pub const MIN_BARCODE_LENGTH: usize = 8;
pub const MAX_BARCODE_LENGTH: usize = 14;
