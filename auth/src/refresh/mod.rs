pub mod errors;
pub mod generator;
pub mod model;

pub use errors::RefreshTokenError;
pub use generator::generate;
pub use model::RefreshToken;
