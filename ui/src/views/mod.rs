mod info;
mod landing;

pub use info::{About, Destination, Offer, Seat};
pub use landing::LandingPage;
