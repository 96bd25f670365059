use signgrid_core::{CellAddress, Direction, GridBuffer, GridCommand, SymbolMap};
use signgrid_layout::{layout, Document, FixedAdvanceMetrics, PageSettings};

fn main() {
    let symbols = SymbolMap::default();
    let mut grid = GridBuffer::with_size(2, 3).unwrap();

    // Compose a short sign sequence across the first row.
    grid.apply(GridCommand::ToggleSelect(CellAddress::origin()), &symbols)
        .unwrap();
    grid.apply(GridCommand::InsertSymbol("\u{1D800}".into()), &symbols)
        .unwrap();
    grid.apply(GridCommand::Move(Direction::Right), &symbols)
        .unwrap();
    grid.apply(GridCommand::InsertSymbol("\u{1D802}".into()), &symbols)
        .unwrap();
    grid.apply(GridCommand::InsertSpace, &symbols).unwrap();
    grid.apply(GridCommand::InsertSymbol("\u{1D9FF}".into()), &symbols)
        .unwrap();

    // Export: snapshot, reshape, lay out.
    let document = Document::from_snapshot(&grid.snapshot());
    println!("=== Delimited intermediate form ===");
    println!("{:?}", document.to_delimited());

    let list = layout(
        &document,
        &PageSettings::default(),
        &FixedAdvanceMetrics::default(),
    );
    println!("\n=== Display list ({} ops) ===", list.len());
    println!("{}", serde_json::to_string_pretty(&list).unwrap());
}
