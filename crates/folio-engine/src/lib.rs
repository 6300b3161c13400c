// NOTE: folio Architecture Rationale
//
// Why whole-record replacement (not field-level mutation)?
// - Every editor operation takes the current record and returns a complete
//   new one, so a renderer can never observe a half-applied edit
// - Undo/redo and host integrations only need to hold record values
// - Trade-off: clones on every keystroke-commit, which is cheap at this
//   record size
//
// Why a typed Document between record and terminal?
// - The three templates differ in structure, not in formatting; a block
//   tree captures the structure once and every backend (ANSI view, ratatui
//   pane) formats it without re-reading the record
// - Omission rules live in exactly one place per template
// - Rendering stays a pure projection: same record in, same Document out

pub mod document;
pub mod editor;
pub mod layout;

pub use document::*;
pub use layout::render;
