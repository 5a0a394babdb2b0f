//! Domain entities - Core business objects

mod comic;
mod game_rule;
mod tip;
mod tip_session;

pub use comic::{ComicPanel, ComicScript};
pub use game_rule::GameRule;
pub use tip::{BaseTip, TipRecord, TipResult};
pub use tip_session::TipSession;
