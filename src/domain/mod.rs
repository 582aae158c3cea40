pub mod case;
pub mod error;
pub mod fallback;
pub mod model;
pub mod traits;
