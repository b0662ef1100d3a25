pub mod golfer;
pub mod team;
pub mod tour_card;
pub mod tournament;

pub use golfer::*;
pub use team::*;
pub use tour_card::*;
pub use tournament::*;
