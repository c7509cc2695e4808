//! # circuit-trace
//!
//! Core of a circuit-board reverse-engineering editor: wires, pins and text
//! labels traced over photographs of the top and bottom side of a board.
//!
//! ## Features
//!
//! - Closed entity model (wire, pin, text) with layer-aware rendering
//! - Interactive tools turning pointer and keyboard events into entities
//! - Line-oriented text codec for saving and loading a project
//! - Property lists for editing a multi-selection through a grid widget
//!
//! ## Quick Start
//!
//! ```rust
//! use circuit_trace::{Editor, InputEvent, MouseButton, Point};
//!
//! let mut editor = Editor::new();
//! editor.begin_wire();
//! editor.dispatch(InputEvent::Click(MouseButton::Left, Point::new(0.1, 0.2)));
//! editor.dispatch(InputEvent::Click(MouseButton::Left, Point::new(0.3, 0.4)));
//! editor.dispatch(InputEvent::Click(MouseButton::Right, Point::ORIGIN));
//!
//! assert_eq!(
//!     editor.export_lines(),
//!     vec!["WIRE LBOTH '' #FFFF0000 (0.1;0.2) (0.3;0.4)"]
//! );
//! ```
//!
//! ## Architecture
//!
//! - [`Entity`] - closed sum of [`Wire`], [`Pin`] and [`Text`]
//! - [`Tool`] - active input state machine, reports an [`Action`] per event
//! - [`io`] - `export_all` / `import_line` and the stream reader and writer
//! - [`Editor`] - owns the entity list and applies tool actions
//!
//! Rendering goes through the [`render::Surface`] trait so the host decides
//! how strokes and glyphs reach the screen.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod editor;
pub mod entities;
pub mod error;
pub mod io;
pub mod notification;
pub mod properties;
pub mod render;
pub mod tools;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TraceError};
pub use types::{normalize_angle, Color, DevicePoint, DeviceRect, Font, LayerAffinity, Point};

// Re-export entity types
pub use entities::{Entity, EntityCommon, EntityDefaults, Pin, Text, VariantStyle, Wire};

// Re-export tools and editor
pub use editor::{Crosshair, Editor};
pub use tools::{Action, InputEvent, Key, MouseButton, Tool};

// Re-export property bridge
pub use properties::{Property, PropertyList, PropertyValue};

// Re-export I/O types
pub use io::{export_all, import_line, EntityReader, EntityWriter, ImportConfiguration};
pub use notification::{Notification, NotificationCollection, NotificationType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
