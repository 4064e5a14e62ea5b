pub mod movie;

pub use movie::{Movie, NOT_AVAILABLE};
