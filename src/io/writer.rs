//! Entity line writer

use std::fmt::Write as _;
use std::io::Write;

use crate::entities::{Entity, Pin, Text, Wire};
use crate::error::Result;

/// Format one entity as a persisted line (without line terminator)
pub fn export_entity(entity: &Entity) -> String {
    match entity {
        Entity::Wire(w) => export_wire(w),
        Entity::Pin(p) => export_pin(p),
        Entity::Text(t) => export_text(t),
    }
}

/// Format every entity, in list order
pub fn export_all(entities: &[Entity]) -> Vec<String> {
    entities.iter().map(export_entity).collect()
}

fn export_wire(wire: &Wire) -> String {
    let c = &wire.common;
    let mut line = format!("{} L{} '{}' {}", Wire::TYPE_TAG, c.layer, c.net_name, c.color);
    for point in &wire.points {
        // writing into a String cannot fail
        let _ = write!(line, " {}", point);
    }
    line
}

fn export_pin(pin: &Pin) -> String {
    let c = &pin.common;
    format!(
        "{} L{} {}:{} '{}' {} {}",
        Pin::TYPE_TAG,
        c.layer,
        c.component,
        pin.number,
        c.net_name,
        c.color,
        pin.location
    )
}

fn export_text(text: &Text) -> String {
    let c = &text.common;
    format!(
        "{} L{} '{}' {} '{}' {} {} 0",
        Text::TYPE_TAG,
        c.layer,
        text.text,
        c.component,
        c.net_name,
        c.color,
        text.location
    )
}

/// Writes entities to a stream, one line each
pub struct EntityWriter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> EntityWriter<W> {
    /// Writer over `writer`
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write one entity followed by a newline
    pub fn write_entity(&mut self, entity: &Entity) -> Result<()> {
        writeln!(self.writer, "{}", export_entity(entity))?;
        self.written += 1;
        Ok(())
    }

    /// Write every entity, in list order
    pub fn write_all(&mut self, entities: &[Entity]) -> Result<()> {
        for entity in entities {
            self.write_entity(entity)?;
        }
        log::debug!("wrote {} entities", entities.len());
        Ok(())
    }

    /// Number of entities written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}
