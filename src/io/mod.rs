//! Line-oriented persistence of entities.
//!
//! One entity per line, space-tokenized, numbers always use `.` as decimal
//! separator:
//!
//! ```text
//! WIRE L<layer> '<net>' #<AARRGGBB> <pt> [<pt> ...]
//! PIN L<layer> <component>:<number> '<net>' #<AARRGGBB> <pt>
//! TEXT L<layer> '<text>' <component> '<net>' #<AARRGGBB> <pt> 0
//! ```
//!
//! `<pt>` is `(x;y)`. Quoted fields are not escaped: a space or quote
//! inside them does not survive a round trip. The text angle is not
//! persisted; the trailing TEXT field is always written as `0`.

mod reader;
mod writer;

pub use reader::{
    import_line, import_line_with, parse_line, EntityReader, ImportConfiguration, LineOutcome,
};
pub use writer::{export_all, export_entity, EntityWriter};
