mod landing;
mod register;

pub use landing::Landing;
pub use register::{Register, RegisterContent};
