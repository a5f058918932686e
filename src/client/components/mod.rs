pub mod footer;
pub mod game_card;
pub mod loading;
pub mod navbar;
pub mod page;
pub mod rich_text;

pub use footer::Footer;
pub use game_card::GameCard;
pub use loading::{ErrorState, Loading};
pub use navbar::Navbar;
pub use page::Page;
pub use rich_text::RichTextView;
