//! Entity line reader

use std::io::BufRead;

use crate::entities::{Entity, EntityDefaults, Pin, Text, Wire};
use crate::error::{Result, TraceError};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::{Color, LayerAffinity, Point};

/// Configuration for the entity reader.
#[derive(Debug, Clone, Default)]
pub struct ImportConfiguration {
    /// When `true`, a malformed line with a known tag is reported as an
    /// error notification and skipped instead of aborting the import.
    ///
    /// Default: `false` (errors propagate).
    pub failsafe: bool,
    /// When `true`, entities are only appended once the whole stream has
    /// been read; an aborted import leaves the destination untouched.
    ///
    /// Default: `false` (entities read before a fatal line are kept).
    pub atomic: bool,
    /// Style applied to imported entities for attributes the line format
    /// does not carry (stroke size, font)
    pub defaults: EntityDefaults,
}

/// Result of parsing one line that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Entity(Entity),
    /// Imported, but part of the line was ignored; carries the reason
    EntityWithWarning(Entity, String),
    /// The line was recognized as not importable; carries the reason
    Skipped(String),
}

/// Parse one line into an entity.
///
/// Returns `Ok(None)` for lines that are skipped (unknown tag, too few
/// fields) and `Err` when a known tag carries a malformed field.
pub fn import_line(line: &str) -> Result<Option<Entity>> {
    import_line_with(line, &EntityDefaults::default())
}

/// Same as [`import_line`] with explicit entity defaults
pub fn import_line_with(line: &str, defaults: &EntityDefaults) -> Result<Option<Entity>> {
    Ok(match parse_line(line, defaults)? {
        LineOutcome::Entity(entity) | LineOutcome::EntityWithWarning(entity, _) => Some(entity),
        LineOutcome::Skipped(_) => None,
    })
}

/// Parse one line, keeping the skip reason
pub fn parse_line(line: &str, defaults: &EntityDefaults) -> Result<LineOutcome> {
    let tokens: Vec<&str> = line.split(' ').collect();

    match tokens[0] {
        Wire::TYPE_TAG => parse_wire(&tokens, defaults),
        Pin::TYPE_TAG => parse_pin(&tokens, defaults),
        Text::TYPE_TAG => parse_text(&tokens, defaults),
        "" => Ok(LineOutcome::Skipped("empty line".to_string())),
        other => Ok(LineOutcome::Skipped(format!("unknown tag '{}'", other))),
    }
}

fn too_short(tag: &str, found: usize, expected: usize) -> LineOutcome {
    LineOutcome::Skipped(format!(
        "{} line has {} fields, expected at least {}",
        tag, found, expected
    ))
}

fn parse_layer(token: &str) -> Result<LayerAffinity> {
    token
        .strip_prefix('L')
        .ok_or_else(|| TraceError::InvalidLayer {
            token: token.to_string(),
        })?
        .parse()
        .map_err(|_| TraceError::InvalidLayer {
            token: token.to_string(),
        })
}

fn parse_quoted(token: &str, field: &'static str) -> Result<String> {
    token
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .map(str::to_string)
        .ok_or_else(|| TraceError::MalformedField {
            field,
            token: token.to_string(),
        })
}

// WIRE L<layer> '<net>' #<color> <pt> [<pt> ...]
fn parse_wire(tokens: &[&str], defaults: &EntityDefaults) -> Result<LineOutcome> {
    if tokens.len() < 4 {
        return Ok(too_short(Wire::TYPE_TAG, tokens.len(), 4));
    }

    let mut wire = Wire::with_style(parse_layer(tokens[1])?, defaults.wire);
    wire.common.net_name = parse_quoted(tokens[2], "net")?;
    wire.common.color = tokens[3].parse::<Color>()?;
    wire.points = tokens[4..]
        .iter()
        .map(|t| t.parse::<Point>())
        .collect::<Result<Vec<_>>>()?;

    if wire.points.len() < 2 {
        return Ok(LineOutcome::Skipped(format!(
            "wire with {} point(s) needs at least 2",
            wire.points.len()
        )));
    }
    Ok(LineOutcome::Entity(Entity::Wire(wire)))
}

// PIN L<layer> <component>:<number> '<net>' #<color> <pt>
fn parse_pin(tokens: &[&str], defaults: &EntityDefaults) -> Result<LineOutcome> {
    if tokens.len() < 6 {
        return Ok(too_short(Pin::TYPE_TAG, tokens.len(), 6));
    }

    let mut pin = Pin::with_style(parse_layer(tokens[1])?, defaults.pin);
    let (component, number) =
        tokens[2]
            .split_once(':')
            .ok_or_else(|| TraceError::MalformedField {
                field: "component:number",
                token: tokens[2].to_string(),
            })?;
    pin.common.component = component.to_string();
    pin.number = number.to_string();
    pin.common.net_name = parse_quoted(tokens[3], "net")?;
    pin.common.color = tokens[4].parse::<Color>()?;
    pin.location = tokens[5].parse::<Point>()?;

    Ok(LineOutcome::Entity(Entity::Pin(pin)))
}

// TEXT L<layer> '<text>' <component> '<net>' #<color> <pt> <reserved>
fn parse_text(tokens: &[&str], defaults: &EntityDefaults) -> Result<LineOutcome> {
    if tokens.len() < 8 {
        return Ok(too_short(Text::TYPE_TAG, tokens.len(), 8));
    }

    let mut text = Text::with_style(parse_layer(tokens[1])?, defaults.text);
    text.font = defaults.font.clone();
    text.text = parse_quoted(tokens[2], "text")?;
    text.common.component = tokens[3].to_string();
    text.common.net_name = parse_quoted(tokens[4], "net")?;
    text.common.color = tokens[5].parse::<Color>()?;
    text.location = tokens[6].parse::<Point>()?;
    // reserved field: validated, value unused (angle is not persisted)
    let reserved = tokens[7]
        .parse::<i64>()
        .map_err(|_| TraceError::InvalidNumber {
            token: tokens[7].to_string(),
        })?;

    if reserved != 0 {
        return Ok(LineOutcome::EntityWithWarning(
            Entity::Text(text),
            format!("reserved TEXT field is {}, ignored", reserved),
        ));
    }
    Ok(LineOutcome::Entity(Entity::Text(text)))
}

/// Reads entities from a line stream
pub struct EntityReader<R: BufRead> {
    reader: R,
    config: ImportConfiguration,
    line_number: usize,
}

impl<R: BufRead> EntityReader<R> {
    /// Reader over `reader` with the default configuration
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            config: ImportConfiguration::default(),
            line_number: 0,
        }
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: ImportConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Read one line, decoding invalid UTF-8 lossily and trimming it
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some(String::from_utf8_lossy(&bytes).trim().to_string()))
    }

    /// Append every importable entity to `dest`.
    ///
    /// Skipped lines are reported in the returned collection. A malformed
    /// known-tag line aborts with [`TraceError::Line`] unless the
    /// configuration is failsafe; without `atomic`, entities from earlier
    /// lines stay in `dest`.
    pub fn read_into(&mut self, dest: &mut Vec<Entity>) -> Result<NotificationCollection> {
        let mut notifications = NotificationCollection::new();
        let mut staged = Vec::new();

        while let Some(line) = self.read_line()? {
            let line_number = self.line_number;
            match parse_line(&line, &self.config.defaults) {
                Ok(LineOutcome::Entity(entity)) => {
                    log::trace!("line {}: imported {}", line_number, entity.type_tag());
                    self.accept(entity, dest, &mut staged);
                }
                Ok(LineOutcome::EntityWithWarning(entity, reason)) => {
                    log::warn!("line {}: {}", line_number, reason);
                    notifications.notify_line(NotificationType::Warning, line_number, reason);
                    self.accept(entity, dest, &mut staged);
                }
                Ok(LineOutcome::Skipped(reason)) => {
                    log::trace!("line {}: skipped ({})", line_number, reason);
                    notifications.notify_line(NotificationType::Skipped, line_number, reason);
                }
                Err(e) if self.config.failsafe => {
                    log::warn!("line {}: {}", line_number, e);
                    notifications.notify_line(NotificationType::Error, line_number, e.to_string());
                }
                Err(e) => {
                    log::warn!("import aborted at line {}: {}", line_number, e);
                    return Err(e.at_line(line_number));
                }
            }
        }

        dest.append(&mut staged);
        Ok(notifications)
    }

    fn accept(&self, entity: Entity, dest: &mut Vec<Entity>, staged: &mut Vec<Entity>) {
        if self.config.atomic {
            staged.push(entity);
        } else {
            dest.push(entity);
        }
    }

    /// Read the whole stream into a new list
    pub fn read_all(mut self) -> Result<(Vec<Entity>, NotificationCollection)> {
        let mut entities = Vec::new();
        let notifications = self.read_into(&mut entities)?;
        Ok((entities, notifications))
    }
}
