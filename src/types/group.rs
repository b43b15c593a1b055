//! Event groups

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Index;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Group metadata; the id is the key in the group table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    /// Hex color such as `#ff0000`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub collapsed: bool,
}

impl Group {
    /// Create an expanded group
    pub fn new(name: String, color: Option<String>) -> Self {
        Self {
            name,
            color,
            collapsed: false,
        }
    }
}

/// Partial update applied by `update_group`; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub collapsed: Option<bool>,
}

impl GroupUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none() && self.collapsed.is_none()
    }
}

/// Group records keyed by id, iterated in insertion order.
///
/// Serializes as a JSON object whose keys follow that order, and keeps the
/// key order of a loaded object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupTable {
    order: Vec<String>,
    entries: HashMap<String, Group>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains_key<Q>(&self, id: &Q) -> bool
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(id)
    }

    pub fn get<Q>(&self, id: &Q) -> Option<&Group>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(id)
    }

    pub fn get_mut<Q>(&mut self, id: &Q) -> Option<&mut Group>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_mut(id)
    }

    /// Insert or replace; a replaced group keeps its position
    pub fn insert(&mut self, id: String, group: Group) -> Option<Group> {
        if !self.entries.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.entries.insert(id, group)
    }

    pub fn remove<Q>(&mut self, id: &Q) -> Option<Group>
    where
        String: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let group = self.entries.remove(id)?;
        self.order.retain(|key| Borrow::<Q>::borrow(key) != id);
        Some(group)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str, &Group) -> bool) {
        let entries = &mut self.entries;
        self.order.retain(|id| {
            let kept = entries.get(id).is_some_and(|group| keep(id, group));
            if !kept {
                entries.remove(id);
            }
            kept
        });
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|group| (id.as_str(), group)))
    }
}

impl<Q> Index<&Q> for GroupTable
where
    String: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = Group;

    fn index(&self, id: &Q) -> &Group {
        &self.entries[id]
    }
}

impl FromIterator<(String, Group)> for GroupTable {
    fn from_iter<I: IntoIterator<Item = (String, Group)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (id, group) in iter {
            table.insert(id, group);
        }
        table
    }
}

impl Serialize for GroupTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (id, group) in self.iter() {
            map.serialize_entry(id, group)?;
        }
        map.end()
    }
}

struct GroupTableVisitor;

impl<'de> Visitor<'de> for GroupTableVisitor {
    type Value = GroupTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of group ids to groups")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<GroupTable, A::Error> {
        let mut table = GroupTable::new();
        while let Some((id, group)) = access.next_entry::<String, Group>()? {
            table.insert(id, group);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for GroupTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(GroupTableVisitor)
    }
}
