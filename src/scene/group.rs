//! Kabel-Gruppe: der exklusiv verwaltete Teilbaum aller Kabel-Objekte.
//!
//! Kabel sind über ihre Verbindungs-ID adressiert. Vorschau-Kabel und
//! Drag-Handle liegen in eigenen Slots und werden vom Abgleich nie berührt.

use super::objects::{Cable, DragHandle, LineMaterial, PreviewCable};
use indexmap::IndexMap;

/// Alle Kabel-Objekte der Szene.
#[derive(Debug, Clone)]
pub struct CableGroup {
    cables: IndexMap<String, Cable>,
    preview: Option<PreviewCable>,
    drag_handle: Option<DragHandle>,
    line_material: LineMaterial,
    handle_material: LineMaterial,
}

impl CableGroup {
    /// Erstellt eine leere Gruppe mit Materialfarbe.
    pub fn new(color: [f32; 4]) -> Self {
        Self {
            cables: IndexMap::new(),
            preview: None,
            drag_handle: None,
            line_material: LineMaterial::new(color),
            handle_material: LineMaterial::new(color),
        }
    }

    /// Anzahl der Kabel (ohne Vorschau-Objekte).
    pub fn len(&self) -> usize {
        self.cables.len()
    }

    /// Gibt `true` zurück, wenn keine Kabel vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.cables.is_empty()
    }

    /// Kabel zur Verbindungs-ID.
    pub fn cable(&self, id: &str) -> Option<&Cable> {
        self.cables.get(id)
    }

    /// Alle Kabel in Erstellungsreihenfolge.
    pub fn cables(&self) -> impl Iterator<Item = &Cable> + '_ {
        self.cables.values()
    }

    /// IDs aller Kabel in Erstellungsreihenfolge.
    pub fn cable_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.cables.keys().map(String::as_str)
    }

    /// Vorschau-Kabel, falls ein Drag läuft.
    pub fn preview(&self) -> Option<&PreviewCable> {
        self.preview.as_ref()
    }

    /// Drag-Handle, falls ein Drag läuft.
    pub fn drag_handle(&self) -> Option<&DragHandle> {
        self.drag_handle.as_ref()
    }

    /// Anzahl der aktuell eingehängten Vorschau-Objekte (0..=2).
    pub fn preview_object_count(&self) -> usize {
        usize::from(self.preview.is_some()) + usize::from(self.drag_handle.is_some())
    }

    /// Material aller Kabel (inkl. Vorschau und Delete-Buttons).
    pub fn line_material(&self) -> &LineMaterial {
        &self.line_material
    }

    /// Material der Drag-Handle-Outline.
    pub fn handle_material(&self) -> &LineMaterial {
        &self.handle_material
    }

    pub(crate) fn cable_mut(&mut self, id: &str) -> Option<&mut Cable> {
        self.cables.get_mut(id)
    }

    pub(crate) fn cables_mut(&mut self) -> impl Iterator<Item = &mut Cable> + '_ {
        self.cables.values_mut()
    }

    pub(crate) fn insert_cable(&mut self, cable: Cable) {
        self.cables.insert(cable.id().to_string(), cable);
    }

    /// Entfernt alle Kabel, für die `keep` false liefert. Gibt die Anzahl zurück.
    pub(crate) fn retain_cables(&mut self, mut keep: impl FnMut(&str) -> bool) -> usize {
        let before = self.cables.len();
        self.cables.retain(|id, _| keep(id));
        before - self.cables.len()
    }

    pub(crate) fn set_line_color(&mut self, color: [f32; 4]) {
        self.line_material.color = color;
    }

    pub(crate) fn set_handle_color(&mut self, color: [f32; 4]) {
        self.handle_material.color = color;
    }

    pub(crate) fn attach_preview(&mut self, preview: PreviewCable, handle: DragHandle) {
        self.preview = Some(preview);
        self.drag_handle = Some(handle);
    }

    pub(crate) fn preview_parts_mut(
        &mut self,
    ) -> (Option<&mut PreviewCable>, Option<&mut DragHandle>) {
        (self.preview.as_mut(), self.drag_handle.as_mut())
    }

    pub(crate) fn detach_preview(&mut self) -> (Option<PreviewCable>, Option<DragHandle>) {
        (self.preview.take(), self.drag_handle.take())
    }

    pub(crate) fn clear(&mut self) {
        self.cables.clear();
        self.preview = None;
        self.drag_handle = None;
    }
}
