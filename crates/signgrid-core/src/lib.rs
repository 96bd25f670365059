pub mod cell;
pub mod command;
pub mod cursor;
pub mod error;
pub mod grid;
pub mod navigate;
pub mod snapshot;
pub mod symbols;

pub use cell::Cell;
pub use command::GridCommand;
pub use cursor::{CellAddress, Cursor};
pub use error::GridError;
pub use grid::GridBuffer;
pub use navigate::{step, Direction};
pub use snapshot::GridSnapshot;
pub use symbols::SymbolMap;
