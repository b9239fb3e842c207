mod about;
mod explorer;
mod home;
mod map;
mod not_found;

pub use about::About;
pub use explorer::Explorer;
pub use home::Home;
pub use map::MapPage;
pub use not_found::NotFound;
