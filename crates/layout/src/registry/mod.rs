//! Coordinate registry: the single source of truth for field placement.
//!
//! Every printed value is looked up here by name and sheet variant. Item
//! fields carry the coordinates of the first item on a sheet; subsequent
//! items on a continuation sheet are shifted down by the item offset.
//! The primary sheet holds exactly one item, so its item fields never move.

mod continuation;
mod primary;

use crate::error::LayoutError;
use crate::placement::{FieldPlacement, FieldScope};
use once_cell::sync::Lazy;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Version tag of the built-in coordinate tables.
pub const BUILTIN_VERSION: &str = "gtd-a4-1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SheetVariant {
    /// The first sheet: full header plus one item.
    Primary,
    /// Every following sheet: abbreviated header plus up to `pageCapacity` items.
    Continuation,
}

impl fmt::Display for SheetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetVariant::Primary => f.write_str("primary"),
            SheetVariant::Continuation => f.write_str("continuation"),
        }
    }
}

/// Vertical distance between consecutive item blocks on a continuation sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemOffset(pub f32);

impl ItemOffset {
    pub const BUILTIN: ItemOffset = ItemOffset(245.0);

    /// Downward shift of the item at `item_index` within its sheet.
    pub fn offset_for(self, item_index: usize) -> f32 {
        self.0 * item_index as f32
    }
}

impl Default for ItemOffset {
    fn default() -> Self {
        Self::BUILTIN
    }
}

/// A placement tagged with the scope it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry {
    #[serde(flatten)]
    pub placement: FieldPlacement,
    pub scope: FieldScope,
}

impl FieldEntry {
    pub const fn header(placement: FieldPlacement) -> Self {
        Self {
            placement,
            scope: FieldScope::Header,
        }
    }

    pub const fn item(placement: FieldPlacement) -> Self {
        Self {
            placement,
            scope: FieldScope::Item,
        }
    }
}

/// All placements of one sheet variant, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateSet {
    entries: BTreeMap<String, FieldEntry>,
}

impl CoordinateSet {
    /// Builds a set, rejecting any field name that appears twice.
    pub fn from_entries<I, K>(variant: SheetVariant, entries: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (K, FieldEntry)>,
        K: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (name, entry) in entries {
            let name = name.into();
            if map.contains_key(&name) {
                return Err(LayoutError::DuplicateField {
                    field: name,
                    variant,
                });
            }
            map.insert(name, entry);
        }
        Ok(Self { entries: map })
    }

    pub fn get(&self, name: &str) -> Option<&FieldEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names with the given scope, sorted.
    pub fn keys(&self, scope: FieldScope) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(_, e)| e.scope == scope)
            .map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CoordinateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CoordinateSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UniqueEntries;

        impl<'de> Visitor<'de> for UniqueEntries {
            type Value = CoordinateSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field names to placements")
            }

            // serde_json keeps the last duplicate key by default, which would
            // silently hide a copy-paste error in a registry file.
            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = BTreeMap::new();
                while let Some((name, entry)) = access.next_entry::<String, FieldEntry>()? {
                    if entries.contains_key(&name) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate field '{}'",
                            name
                        )));
                    }
                    entries.insert(name, entry);
                }
                Ok(CoordinateSet { entries })
            }
        }

        deserializer.deserialize_map(UniqueEntries)
    }
}

/// Placements for both sheet variants plus the item offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateRegistry {
    pub version: String,
    #[serde(default)]
    pub item_offset: ItemOffset,
    primary: CoordinateSet,
    continuation: CoordinateSet,
}

static BUILTIN: Lazy<Result<CoordinateRegistry, LayoutError>> = Lazy::new(|| {
    let primary = CoordinateSet::from_entries(
        SheetVariant::Primary,
        primary::FIELDS.iter().map(|(name, entry)| (*name, *entry)),
    )?;
    let continuation = CoordinateSet::from_entries(
        SheetVariant::Continuation,
        continuation::FIELDS
            .iter()
            .map(|(name, entry)| (*name, *entry)),
    )?;
    CoordinateRegistry::new(BUILTIN_VERSION, ItemOffset::BUILTIN, primary, continuation)
});

impl CoordinateRegistry {
    pub fn new(
        version: impl Into<String>,
        item_offset: ItemOffset,
        primary: CoordinateSet,
        continuation: CoordinateSet,
    ) -> Result<Self, LayoutError> {
        let registry = Self {
            version: version.into(),
            item_offset,
            primary,
            continuation,
        };
        registry.check()?;
        Ok(registry)
    }

    /// The coordinate tables for the A4 declaration form, built once.
    pub fn builtin() -> Result<&'static CoordinateRegistry, LayoutError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let registry: CoordinateRegistry = serde_json::from_str(json)?;
        registry.check()?;
        Ok(registry)
    }

    pub fn to_json(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn set(&self, variant: SheetVariant) -> &CoordinateSet {
        match variant {
            SheetVariant::Primary => &self.primary,
            SheetVariant::Continuation => &self.continuation,
        }
    }

    pub fn item_offset(&self) -> ItemOffset {
        self.item_offset
    }

    /// Shift applied to the item at `item_index` on a continuation sheet.
    pub fn offset_for(&self, item_index: usize) -> f32 {
        self.item_offset.offset_for(item_index)
    }

    /// Lowest point any item field reaches on a continuation sheet when its
    /// item sits in `slot`. `None` when the sheet has no item fields.
    pub fn lowest_item_extent(
        &self,
        slot: usize,
        default_font_size: f32,
        default_max_lines: usize,
    ) -> Option<f32> {
        let shift = self.offset_for(slot);
        self.continuation
            .iter()
            .filter(|(_, entry)| entry.scope == FieldScope::Item)
            .map(|(_, entry)| {
                entry
                    .placement
                    .lowest_extent(default_font_size, default_max_lines)
                    - shift
            })
            .reduce(f32::min)
    }

    /// Resolves a field to its final placement.
    ///
    /// `item_index` is the item's position on its sheet. Header fields and
    /// primary-sheet fields ignore it.
    pub fn lookup(
        &self,
        field: &str,
        variant: SheetVariant,
        item_index: usize,
    ) -> Result<FieldPlacement, LayoutError> {
        let entry = self
            .set(variant)
            .get(field)
            .ok_or_else(|| LayoutError::UnknownField {
                field: field.to_string(),
                variant,
            })?;

        let shifted = entry.scope == FieldScope::Item && variant == SheetVariant::Continuation;
        if shifted && item_index > 0 {
            Ok(entry.placement.shifted_down(self.offset_for(item_index)))
        } else {
            Ok(entry.placement)
        }
    }

    fn check(&self) -> Result<(), LayoutError> {
        if !(self.item_offset.0.is_finite() && self.item_offset.0 > 0.0) {
            return Err(LayoutError::InvalidRegistry(format!(
                "item offset must be positive, got {}",
                self.item_offset.0
            )));
        }
        for variant in [SheetVariant::Primary, SheetVariant::Continuation] {
            for (name, entry) in self.set(variant).iter() {
                let p = &entry.placement;
                if !(p.x.is_finite() && p.y.is_finite()) {
                    return Err(LayoutError::InvalidRegistry(format!(
                        "field '{}' on the {} sheet has a non-finite position",
                        name, variant
                    )));
                }
                if p.multiline && p.width.is_none() {
                    return Err(LayoutError::InvalidRegistry(format!(
                        "multiline field '{}' on the {} sheet has no width",
                        name, variant
                    )));
                }
            }
        }
        Ok(())
    }
}
