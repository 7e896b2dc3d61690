mod prelude;
mod color;
mod rng;
mod data;
mod daily;
mod selection;
mod grid;
mod state;
mod history;
mod completion;
mod game;

pub use prelude::*;
pub use color::*;
pub use rng::*;
pub use data::*;
pub use daily::*;
pub use selection::*;
pub use grid::*;
pub use state::*;
pub use history::*;
pub use completion::*;
pub use game::*;
