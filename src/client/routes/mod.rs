pub mod game_guide;
pub mod guides;
pub mod home;
pub mod mission_guide;
pub mod not_found;

pub use game_guide::GameGuide;
pub use guides::Guides;
pub use home::Home;
pub use mission_guide::MissionGuide;
pub use not_found::NotFound;
