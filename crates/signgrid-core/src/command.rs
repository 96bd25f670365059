use serde::{Deserialize, Serialize};

use crate::cursor::CellAddress;
use crate::error::GridError;
use crate::grid::GridBuffer;
use crate::navigate::Direction;
use crate::symbols::SymbolMap;

/// The editing operations a host UI can request
///
/// UI events never mutate the grid directly; they are translated into
/// commands and dispatched through [`GridBuffer::apply`], which keeps the
/// model testable without any widget toolkit in the loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridCommand {
    Resize { rows: usize, columns: usize },
    ToggleSelect(CellAddress),
    /// Palette symbol chosen; resolved through the session's [`SymbolMap`]
    InsertSymbol(String),
    InsertSpace,
    InsertLineBreak,
    Backspace,
    Move(Direction),
}

impl GridBuffer {
    /// Dispatch one editing command against this grid
    pub fn apply(&mut self, command: GridCommand, symbols: &SymbolMap) -> Result<(), GridError> {
        match command {
            GridCommand::Resize { rows, columns } => self.resize(rows, columns)?,
            GridCommand::ToggleSelect(addr) => self.toggle_select(addr)?,
            GridCommand::InsertSymbol(symbol) => {
                let insert = symbols.translate(&symbol).to_owned();
                self.append_to_active(&insert);
            }
            GridCommand::InsertSpace => self.append_to_active(" "),
            GridCommand::InsertLineBreak => self.append_to_active("\n"),
            GridCommand::Backspace => self.backspace(),
            GridCommand::Move(direction) => self.move_cursor(direction),
        }
        Ok(())
    }
}
