use std::collections::HashMap;

use crate::duel::DuelIntent;

/// Unique identifier for each setting.
///
/// Adding a new setting: add a variant here + entry in `builtin_registry()`.
/// The `as_str()` value is used as TOML key — once published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingId {
    Snark,
    Mock,
}

impl SettingId {
    /// Stable TOML key for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snark => "snark",
            Self::Mock => "mock",
        }
    }

    pub fn all() -> &'static [SettingId] {
        &[Self::Snark, Self::Mock]
    }

    /// Parse from TOML key. Unknown keys return `None` (forward compat).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "snark" => Some(Self::Snark),
            "mock" => Some(Self::Mock),
            _ => None,
        }
    }

    /// The duel action that pushes this setting into the state machine.
    pub fn to_intent(self, value: bool) -> DuelIntent {
        match self {
            Self::Snark => DuelIntent::SetSnarkEnabled(value),
            Self::Mock => DuelIntent::SetMockEnabled(value),
        }
    }
}

pub struct SettingDef {
    pub id: SettingId,
    pub label: &'static str,
    pub description: &'static str,
    pub default: bool,
}

/// Registry-based settings manager.
///
/// Owns both the definitions (immutable) and current values.
/// UI snapshots are derived from this; changes are applied back via snapshots.
pub struct DuelSettingsManager {
    registry: Vec<SettingDef>,
    values: HashMap<SettingId, bool>,
}

impl DuelSettingsManager {
    pub fn new() -> Self {
        Self {
            registry: builtin_registry(),
            values: HashMap::new(),
        }
    }

    /// Current value, falling back to the registry default.
    pub fn get(&self, id: SettingId) -> bool {
        self.values
            .get(&id)
            .copied()
            .unwrap_or_else(|| self.default_for(id))
    }

    pub fn set(&mut self, id: SettingId, value: bool) {
        self.values.insert(id, value);
    }

    pub fn toggle(&mut self, id: SettingId) {
        let current = self.get(id);
        self.set(id, !current);
    }

    /// Access the ordered registry (determines UI order).
    pub fn registry(&self) -> &[SettingDef] {
        &self.registry
    }

    pub fn to_toml_map(&self) -> HashMap<String, bool> {
        self.registry
            .iter()
            .map(|def| (def.id.as_str().to_string(), self.get(def.id)))
            .collect()
    }

    /// Replace all values with a TOML map. Keys missing from the map fall back
    /// to registry defaults; unknown keys are ignored (forward compat).
    pub fn load_from_toml(&mut self, map: &HashMap<String, bool>) {
        self.values.clear();
        for (key, &value) in map {
            match SettingId::parse(key) {
                Some(id) => self.set(id, value),
                None => tracing::debug!("Ignoring unknown setting '{}'", key),
            }
        }
    }

    /// One intent per setting, in registry order.
    pub fn to_intents(&self) -> Vec<DuelIntent> {
        self.registry
            .iter()
            .map(|def| def.id.to_intent(self.get(def.id)))
            .collect()
    }

    /// Create UI snapshots from current state (for SettingsIntent::Load).
    pub fn to_snapshots(&self) -> Vec<SettingsFieldSnapshot> {
        self.registry
            .iter()
            .map(|def| SettingsFieldSnapshot {
                id: def.id,
                label: def.label,
                description: def.description,
                value: self.get(def.id),
            })
            .collect()
    }

    /// Apply UI snapshots back to values (after user edits).
    pub fn apply_snapshots(&mut self, fields: &[SettingsFieldSnapshot]) {
        for field in fields {
            self.set(field.id, field.value);
        }
    }

    fn default_for(&self, id: SettingId) -> bool {
        self.registry
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.default)
            .unwrap_or(false)
    }
}

impl Default for DuelSettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-friendly snapshot of a single setting (used in MVI state).
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsFieldSnapshot {
    pub id: SettingId,
    pub label: &'static str,
    pub description: &'static str,
    pub value: bool,
}

fn builtin_registry() -> Vec<SettingDef> {
    vec![
        SettingDef {
            id: SettingId::Snark,
            label: "Snark",
            description: "Shame the first ugly life-point change of each duel",
            default: false,
        },
        SettingDef {
            id: SettingId::Mock,
            label: "Mock",
            description: "Taunt the loser when a duel ends",
            default: false,
        },
    ]
}
