//! Recorded input events
//!
//! An [`Event`] is a typed [`EventKind`] (the type-specific fields), an
//! [`EventMeta`] block every event may carry (delay, label, comment, group,
//! enabled flag) and an open map of fields nothing in this crate knows about.
//! On the wire it is one flat JSON object keyed by `type`, so documents written
//! by older recorders load unchanged and unknown fields survive a round trip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{EditorError, EditorResult};

/// Type tag of an event.
///
/// Legacy tags such as `leftClickEvent` or `keyboardEvent` are accepted when
/// reading, but serialization always writes the camelCase name of the
/// variant, so saving an old document upgrades its tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    CursorMove,
    #[serde(alias = "leftClickEvent")]
    LeftClick,
    #[serde(alias = "rightClickEvent")]
    RightClick,
    #[serde(alias = "middleClickEvent")]
    MiddleClick,
    #[serde(alias = "scrollEvent")]
    Scroll,
    #[serde(alias = "keyboardEvent")]
    KeyboardKey,
    Wait,
    Goto,
    Repeat,
    LoopStart,
    LoopEnd,
    #[serde(alias = "delayEvent")]
    Delay,
    #[serde(alias = "typeTextEvent")]
    TypeText,
}

impl EventType {
    pub const ALL: [EventType; 13] = [
        EventType::CursorMove,
        EventType::LeftClick,
        EventType::RightClick,
        EventType::MiddleClick,
        EventType::Scroll,
        EventType::KeyboardKey,
        EventType::Wait,
        EventType::Goto,
        EventType::Repeat,
        EventType::LoopStart,
        EventType::LoopEnd,
        EventType::Delay,
        EventType::TypeText,
    ];

    /// Canonical wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::CursorMove => "cursorMove",
            EventType::LeftClick => "leftClick",
            EventType::RightClick => "rightClick",
            EventType::MiddleClick => "middleClick",
            EventType::Scroll => "scroll",
            EventType::KeyboardKey => "keyboardKey",
            EventType::Wait => "wait",
            EventType::Goto => "goto",
            EventType::Repeat => "repeat",
            EventType::LoopStart => "loopStart",
            EventType::LoopEnd => "loopEnd",
            EventType::Delay => "delay",
            EventType::TypeText => "typeText",
        }
    }

    /// Parse a canonical or legacy type name
    pub fn parse(name: &str) -> Option<Self> {
        serde_json::from_value(Value::String(name.to_string())).ok()
    }

    pub fn is_click(&self) -> bool {
        matches!(
            self,
            EventType::LeftClick | EventType::RightClick | EventType::MiddleClick
        )
    }

    /// Events that carry `x`/`y`
    pub fn is_pointer(&self) -> bool {
        *self == EventType::CursorMove || self.is_click()
    }

    pub fn is_control_flow(&self) -> bool {
        matches!(
            self,
            EventType::Wait
                | EventType::Goto
                | EventType::Repeat
                | EventType::LoopStart
                | EventType::LoopEnd
                | EventType::Delay
        )
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mouse button for click events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

fn default_count() -> u32 {
    1
}

/// Type-specific payload of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventKind {
    CursorMove {
        #[serde(default)]
        x: i32,
        #[serde(default)]
        y: i32,
    },
    #[serde(alias = "leftClickEvent")]
    LeftClick {
        #[serde(default)]
        x: i32,
        #[serde(default)]
        y: i32,
        #[serde(default)]
        pressed: bool,
    },
    #[serde(alias = "rightClickEvent")]
    RightClick {
        #[serde(default)]
        x: i32,
        #[serde(default)]
        y: i32,
        #[serde(default)]
        pressed: bool,
    },
    #[serde(alias = "middleClickEvent")]
    MiddleClick {
        #[serde(default)]
        x: i32,
        #[serde(default)]
        y: i32,
        #[serde(default)]
        pressed: bool,
    },
    #[serde(alias = "scrollEvent")]
    Scroll {
        #[serde(default)]
        dx: i32,
        #[serde(default)]
        dy: i32,
    },
    #[serde(alias = "keyboardEvent")]
    KeyboardKey {
        #[serde(default)]
        key: String,
        #[serde(default)]
        pressed: bool,
    },
    Wait {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delay: Option<f64>,
        #[serde(
            rename = "timeoutLabel",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        timeout_label: Option<String>,
    },
    Goto {
        #[serde(
            rename = "targetLabel",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        target_label: Option<String>,
    },
    Repeat {
        #[serde(
            rename = "targetLabel",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        target_label: Option<String>,
        #[serde(default = "default_count")]
        count: u32,
    },
    LoopStart {
        #[serde(default = "default_count")]
        count: u32,
    },
    LoopEnd,
    #[serde(alias = "delayEvent")]
    Delay,
    #[serde(alias = "typeTextEvent")]
    TypeText {
        #[serde(default)]
        text: String,
    },
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::CursorMove { .. } => EventType::CursorMove,
            EventKind::LeftClick { .. } => EventType::LeftClick,
            EventKind::RightClick { .. } => EventType::RightClick,
            EventKind::MiddleClick { .. } => EventType::MiddleClick,
            EventKind::Scroll { .. } => EventType::Scroll,
            EventKind::KeyboardKey { .. } => EventType::KeyboardKey,
            EventKind::Wait { .. } => EventType::Wait,
            EventKind::Goto { .. } => EventType::Goto,
            EventKind::Repeat { .. } => EventType::Repeat,
            EventKind::LoopStart { .. } => EventType::LoopStart,
            EventKind::LoopEnd => EventType::LoopEnd,
            EventKind::Delay => EventType::Delay,
            EventKind::TypeText { .. } => EventType::TypeText,
        }
    }

    /// Wire names of the fields owned by this variant (excluding `type`)
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            EventKind::CursorMove { .. } => &["x", "y"],
            EventKind::LeftClick { .. }
            | EventKind::RightClick { .. }
            | EventKind::MiddleClick { .. } => &["x", "y", "pressed"],
            EventKind::Scroll { .. } => &["dx", "dy"],
            EventKind::KeyboardKey { .. } => &["key", "pressed"],
            EventKind::Wait { .. } => &["delay", "timeoutLabel"],
            EventKind::Goto { .. } => &["targetLabel"],
            EventKind::Repeat { .. } => &["targetLabel", "count"],
            EventKind::LoopStart { .. } => &["count"],
            EventKind::LoopEnd | EventKind::Delay => &[],
            EventKind::TypeText { .. } => &["text"],
        }
    }

    /// Label names this event may jump to
    pub fn jump_targets(&self) -> Vec<&str> {
        match self {
            EventKind::Goto {
                target_label: Some(label),
            }
            | EventKind::Repeat {
                target_label: Some(label),
                ..
            } => vec![label.as_str()],
            EventKind::Wait {
                timeout_label: Some(label),
                ..
            } => vec![label.as_str()],
            _ => Vec::new(),
        }
    }

    fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Metadata any event may carry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventMeta {
    /// Delay in seconds before this event plays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(
        rename = "groupId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

const META_FIELDS: &[&str] = &[
    "timestamp",
    "label",
    "comment",
    "groupId",
    "enabled",
    "disabled",
];

/// A single recorded (or hand-inserted) macro event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Map<String, Value>",
    into = "Map<String, Value>"
)]
pub struct Event {
    pub kind: EventKind,
    pub meta: EventMeta,
    /// Fields outside the typed model, carried through verbatim
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            meta: EventMeta::default(),
            extra: Map::new(),
        }
    }

    pub fn cursor_move(x: i32, y: i32) -> Self {
        Self::new(EventKind::CursorMove { x, y })
    }

    pub fn click(button: MouseButton, x: i32, y: i32, pressed: bool) -> Self {
        let kind = match button {
            MouseButton::Left => EventKind::LeftClick { x, y, pressed },
            MouseButton::Right => EventKind::RightClick { x, y, pressed },
            MouseButton::Middle => EventKind::MiddleClick { x, y, pressed },
        };
        Self::new(kind)
    }

    pub fn scroll(dx: i32, dy: i32) -> Self {
        Self::new(EventKind::Scroll { dx, dy })
    }

    pub fn key(key: impl Into<String>, pressed: bool) -> Self {
        Self::new(EventKind::KeyboardKey {
            key: key.into(),
            pressed,
        })
    }

    /// A pause; the delay is carried in `timestamp`
    pub fn delay(seconds: f64) -> Self {
        Self::new(EventKind::Delay).with_timestamp(seconds)
    }

    pub fn type_text(text: impl Into<String>) -> Self {
        Self::new(EventKind::TypeText { text: text.into() })
    }

    pub fn loop_start(count: u32) -> Self {
        Self::new(EventKind::LoopStart {
            count: count.max(1),
        })
    }

    pub fn loop_end() -> Self {
        Self::new(EventKind::LoopEnd)
    }

    pub fn goto(target_label: impl Into<String>) -> Self {
        Self::new(EventKind::Goto {
            target_label: Some(target_label.into()),
        })
    }

    pub fn repeat(target_label: impl Into<String>, count: u32) -> Self {
        Self::new(EventKind::Repeat {
            target_label: Some(target_label.into()),
            count,
        })
    }

    pub fn wait(delay: Option<f64>, timeout_label: Option<String>) -> Self {
        Self::new(EventKind::Wait {
            delay,
            timeout_label,
        })
    }

    pub fn with_timestamp(mut self, seconds: f64) -> Self {
        self.meta.timestamp = Some(seconds);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.meta.label = Some(label.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.meta.comment = Some(comment.into());
        self
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    pub fn is_cursor_move(&self) -> bool {
        matches!(self.kind, EventKind::CursorMove { .. })
    }

    /// Pointer position for moves and clicks
    pub fn position(&self) -> Option<(i32, i32)> {
        match self.kind {
            EventKind::CursorMove { x, y }
            | EventKind::LeftClick { x, y, .. }
            | EventKind::RightClick { x, y, .. }
            | EventKind::MiddleClick { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }

    /// Delay in seconds, 0 when absent
    pub fn timestamp(&self) -> f64 {
        self.meta.timestamp.unwrap_or(0.0)
    }

    pub fn label(&self) -> Option<&str> {
        self.meta.label.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.meta.comment.as_deref()
    }

    pub fn group_id(&self) -> Option<&str> {
        self.meta.group_id.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.meta.enabled.unwrap_or(true) && !self.meta.disabled.unwrap_or(false)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.meta.enabled = Some(enabled);
        self.meta.disabled = None;
    }

    /// Read a field by its wire name, `None` when the event does not carry it
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "type" => Some(Value::String(self.event_type().as_str().to_string())),
            "timestamp" => self.meta.timestamp.map(Value::from),
            "label" => self.meta.label.clone().map(Value::String),
            "comment" => self.meta.comment.clone().map(Value::String),
            "groupId" | "group_id" => self.meta.group_id.clone().map(Value::String),
            "enabled" => self.meta.enabled.map(Value::Bool),
            "disabled" => self.meta.disabled.map(Value::Bool),
            _ => self
                .kind
                .to_map()
                .remove(name)
                .or_else(|| self.extra.get(name).cloned()),
        }
    }

    /// Write a field by its wire name.
    ///
    /// Typed fields must receive a value of their type; `null` clears optional
    /// ones. Unknown names are stored in the open field map. Writing `type`
    /// re-tags the event, keeping every field the new type understands.
    pub fn set_field(&mut self, name: &str, value: Value) -> EditorResult<()> {
        match name {
            "type" => {
                let tag = value
                    .as_str()
                    .and_then(EventType::parse)
                    .ok_or_else(|| EditorError::invalid_field(name, "unknown event type"))?;
                self.rebuild_kind(name, |map| {
                    map.insert("type".to_string(), Value::String(tag.as_str().to_string()));
                })
            }
            "timestamp" => {
                self.meta.timestamp = match value {
                    Value::Null => None,
                    other => {
                        let secs = other.as_f64().ok_or_else(|| {
                            EditorError::invalid_field(name, "expected a number")
                        })?;
                        if !(secs >= 0.0) {
                            return Err(EditorError::invalid_field(
                                name,
                                "timestamp must be a non-negative number",
                            ));
                        }
                        Some(secs)
                    }
                };
                Ok(())
            }
            "label" => {
                self.meta.label = optional_string(name, value)?;
                Ok(())
            }
            "comment" => {
                self.meta.comment = optional_string(name, value)?;
                Ok(())
            }
            "groupId" | "group_id" => {
                self.meta.group_id = optional_string(name, value)?;
                Ok(())
            }
            "enabled" => {
                self.meta.enabled = optional_bool(name, value)?;
                Ok(())
            }
            "disabled" => {
                self.meta.disabled = optional_bool(name, value)?;
                Ok(())
            }
            _ if self.kind.field_names().contains(&name) => self.rebuild_kind(name, |map| {
                map.insert(name.to_string(), value);
            }),
            _ => {
                self.extra.insert(name.to_string(), value);
                Ok(())
            }
        }
    }

    /// Remove a field, returning whether it was present.
    ///
    /// Required typed fields (coordinates, key, ...) cannot be removed.
    pub fn remove_field(&mut self, name: &str) -> EditorResult<bool> {
        let slot_was_set = match name {
            "type" => return Err(EditorError::ImmutableField(name.to_string())),
            "timestamp" => self.meta.timestamp.take().is_some(),
            "label" => self.meta.label.take().is_some(),
            "comment" => self.meta.comment.take().is_some(),
            "groupId" | "group_id" => self.meta.group_id.take().is_some(),
            "enabled" => self.meta.enabled.take().is_some(),
            "disabled" => self.meta.disabled.take().is_some(),
            _ if self.kind.field_names().contains(&name) => {
                let present = self.field(name).is_some();
                let mut trial = self.clone();
                trial.rebuild_kind(name, |map| {
                    map.remove(name);
                })?;
                if trial.field(name).is_some() {
                    return Err(EditorError::ImmutableField(name.to_string()));
                }
                *self = trial;
                present
            }
            _ => self.extra.remove(name).is_some(),
        };
        Ok(slot_was_set)
    }

    fn rebuild_kind(
        &mut self,
        field: &str,
        patch: impl FnOnce(&mut Map<String, Value>),
    ) -> EditorResult<()> {
        let mut map = self.extra.clone();
        map.extend(self.kind.to_map());
        patch(&mut map);
        let (kind, extra) =
            split_kind(map).map_err(|e| EditorError::invalid_field(field, e.to_string()))?;
        self.kind = kind;
        self.extra = extra;
        Ok(())
    }
}

fn optional_string(field: &str, value: Value) -> EditorResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        _ => Err(EditorError::invalid_field(field, "expected a string")),
    }
}

fn optional_bool(field: &str, value: Value) -> EditorResult<Option<bool>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b)),
        _ => Err(EditorError::invalid_field(field, "expected a boolean")),
    }
}

/// Parse the typed variant out of a flat field map; the rest stays open
fn split_kind(
    mut map: Map<String, Value>,
) -> Result<(EventKind, Map<String, Value>), serde_json::Error> {
    let kind: EventKind = serde_json::from_value(Value::Object(map.clone()))?;
    let known = kind.field_names();
    map.retain(|key, _| key != "type" && !known.contains(&key.as_str()));
    Ok((kind, map))
}

impl TryFrom<Map<String, Value>> for Event {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut meta_map = Map::new();
        for key in META_FIELDS {
            if let Some(value) = map.remove(*key) {
                meta_map.insert(key.to_string(), value);
            }
        }
        if let Some(value) = map.remove("group_id") {
            meta_map.entry("groupId").or_insert(value);
        }
        let meta: EventMeta = serde_json::from_value(Value::Object(meta_map))?;
        let (kind, extra) = split_kind(map)?;
        Ok(Self { kind, meta, extra })
    }
}

impl From<Event> for Map<String, Value> {
    fn from(event: Event) -> Self {
        let mut map = event.kind.to_map();
        if let Ok(Value::Object(meta)) = serde_json::to_value(&event.meta) {
            map.extend(meta);
        }
        for (key, value) in event.extra {
            map.entry(key).or_insert(value);
        }
        map
    }
}
