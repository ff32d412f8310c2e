//! Collection navigation.
//!
//! The OZ catalog nests collections to no fixed depth. The navigator keeps
//! asking the user to pick a node and expanding it until a playable item is
//! chosen, then resolves that item's stream.

pub mod chooser;
pub mod source;
pub mod walker;

pub use chooser::{parse_selection, parse_selection_path, Chooser, ConsoleChooser, PresetChooser};
pub use source::{Catalog, StreamSource};
pub use walker::{compose_filename, Navigation, Navigator, StartPoint};
