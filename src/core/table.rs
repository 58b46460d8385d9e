//! Normalisierte Tabelle (`byId` + `allIds`) wie im Store-Zustand.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Einträge nach ID plus geordnete ID-Liste.
///
/// `all_ids` bestimmt die Reihenfolge; `by_id` enthält die Daten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table<T> {
    /// Daten nach ID
    pub by_id: HashMap<String, T>,
    /// Geordnete ID-Liste
    pub all_ids: Vec<String>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            by_id: HashMap::new(),
            all_ids: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    /// Erstellt eine leere Tabelle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt den Eintrag zur ID zurück.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.by_id.get(id)
    }

    /// Gibt den Eintrag zur ID veränderbar zurück.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.by_id.get_mut(id)
    }

    /// Prüft ob die ID existiert.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Fügt einen Eintrag ein oder ersetzt ihn (Reihenfolge bleibt erhalten).
    pub fn insert(&mut self, id: impl Into<String>, value: T) {
        let id = id.into();
        if self.by_id.insert(id.clone(), value).is_none() {
            self.all_ids.push(id);
        }
    }

    /// Entfernt einen Eintrag.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let removed = self.by_id.remove(id)?;
        self.all_ids.retain(|existing| existing != id);
        Some(removed)
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.all_ids.len()
    }

    /// Gibt `true` zurück, wenn die Tabelle leer ist.
    pub fn is_empty(&self) -> bool {
        self.all_ids.is_empty()
    }

    /// Iteriert in `all_ids`-Reihenfolge. IDs ohne Daten werden übersprungen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.all_ids
            .iter()
            .filter_map(|id| self.by_id.get(id).map(|value| (id.as_str(), value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_replaces_in_place() {
        let mut table = Table::new();
        table.insert("b", 1);
        table.insert("a", 2);
        table.insert("b", 3);

        assert_eq!(table.all_ids, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(table.get("b"), Some(&3));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_remove_drops_id_from_order() {
        let mut table = Table::new();
        table.insert("x", 1);
        table.insert("y", 2);

        assert_eq!(table.remove("x"), Some(1));
        assert_eq!(table.remove("x"), None);
        assert_eq!(table.all_ids, vec!["y".to_string()]);
    }

    #[test]
    fn test_json_uses_store_field_names() {
        let table: Table<u32> =
            serde_json::from_str(r#"{ "byId": { "k": 5 }, "allIds": ["k"] }"#).unwrap();
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![("k", &5)]);
    }
}
