//! Viewport: zeichnet Prozessoren und Kabel und übersetzt Pointer-Gesten
//! in Drag-Operationen und Store-Actions.

use eframe::egui;
use glam::{Vec2, Vec3};

use crate::app::{ActionDispatcher, SceneController};
use crate::core::{ConnectorKind, StoreAction, ThemeColors};
use crate::scene::{CableGroup, LineGeometry, ProcessorLayer};

/// Abbildung Welt ↔ Bildschirm (Y nach oben, Ursprung in der Viewport-Mitte).
#[derive(Debug, Clone, Copy)]
pub struct ViewportTransform {
    /// Bildschirmposition des Welt-Ursprungs
    pub origin: egui::Pos2,
    /// Pixel pro Welteinheit
    pub pixels_per_unit: f32,
}

impl ViewportTransform {
    /// Welt → Bildschirm.
    pub fn world_to_screen(&self, world: Vec2) -> egui::Pos2 {
        egui::pos2(
            self.origin.x + world.x * self.pixels_per_unit,
            self.origin.y - world.y * self.pixels_per_unit,
        )
    }

    /// Bildschirm → Welt.
    pub fn screen_to_world(&self, screen: egui::Pos2) -> Vec2 {
        Vec2::new(
            (screen.x - self.origin.x) / self.pixels_per_unit,
            (self.origin.y - screen.y) / self.pixels_per_unit,
        )
    }
}

/// Laufende Pointer-Geste
#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerGesture {
    /// Keine Geste
    Idle,
    /// Neues Kabel wird gezogen
    Cable,
    /// Prozessor wird verschoben (Greif-Offset in Welteinheiten)
    Processor { grab_offset: Vec2 },
}

/// Zustand des Viewports zwischen Frames.
pub struct CableViewport {
    gesture: PointerGesture,
}

impl Default for CableViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl CableViewport {
    /// Erstellt einen Viewport ohne laufende Geste.
    pub fn new() -> Self {
        Self {
            gesture: PointerGesture::Idle,
        }
    }

    /// Zeichnet die Szene und verarbeitet Pointer-Eingaben.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        controller: &mut SceneController,
        colors: &ThemeColors,
        dispatcher: &mut dyn ActionDispatcher,
    ) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        let transform = ViewportTransform {
            origin: rect.center(),
            pixels_per_unit: controller.cables().options().pixels_per_unit,
        };

        self.handle_pointer(&response, &transform, controller, dispatcher);

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, color32(colors.color_low));
        paint_processors(&painter, &transform, controller, colors);
        paint_cables(&painter, &transform, controller.cables().group());
    }

    fn handle_pointer(
        &mut self,
        response: &egui::Response,
        transform: &ViewportTransform,
        controller: &mut SceneController,
        dispatcher: &mut dyn ActionDispatcher,
    ) {
        let Some(pointer) = response.interact_pointer_pos() else {
            return;
        };
        let world = transform.screen_to_world(pointer);
        let options = controller.cables().options().clone();

        if response.clicked() {
            if let Some(id) = controller.cables().hit_delete_button(world) {
                dispatcher.dispatch(StoreAction::DisconnectProcessors { id: id.to_string() });
            }
        }

        if response.drag_started() {
            // Picken am Druckpunkt, nicht an der Position nach der Drag-Schwelle
            let press = response
                .ctx
                .input(|i| i.pointer.press_origin())
                .map_or(world, |origin| transform.screen_to_world(origin));
            self.gesture = self.begin_gesture(press, &options, controller, dispatcher);
        }

        if response.dragged() {
            match self.gesture {
                PointerGesture::Cable => report(controller.move_drag(world.extend(0.0))),
                PointerGesture::Processor { grab_offset } => {
                    let target = world - grab_offset;
                    dispatcher.dispatch(StoreAction::DragSelectedProcessor {
                        x: target.x,
                        y: target.y,
                        z: 0.0,
                    });
                }
                PointerGesture::Idle => {}
            }
        }

        if response.drag_stopped() {
            if self.gesture == PointerGesture::Cable {
                report(controller.end_drag());
                let target = controller.processors().pick_connector(
                    world,
                    options.connector_pick_radius,
                    ConnectorKind::Input,
                );
                if let Some(hit) = target {
                    controller.commit_connection(&hit.processor_id, &hit.connector_id, dispatcher);
                }
            }
            self.gesture = PointerGesture::Idle;
        }
    }

    fn begin_gesture(
        &self,
        world: Vec2,
        options: &crate::shared::CableOptions,
        controller: &mut SceneController,
        dispatcher: &mut dyn ActionDispatcher,
    ) -> PointerGesture {
        if controller.cables().is_connect_mode() {
            let source = controller.processors().pick_connector(
                world,
                options.connector_pick_radius,
                ConnectorKind::Output,
            );
            if let Some(hit) = source {
                return match controller.start_drag(&hit.processor_id, &hit.connector_id, hit.anchor)
                {
                    Ok(()) => PointerGesture::Cable,
                    Err(e) => {
                        log::error!("Kabel-Drag konnte nicht starten: {:#}", e);
                        PointerGesture::Idle
                    }
                };
            }
        }

        let picked = controller
            .processors()
            .pick_processor(world, options.processor_radius)
            .and_then(|id| controller.processors().view(id));
        let Some(view) = picked else {
            return PointerGesture::Idle;
        };

        let grab_offset = world - view.position.truncate();
        dispatcher.dispatch(StoreAction::SelectProcessor {
            id: view.id().to_string(),
        });
        PointerGesture::Processor { grab_offset }
    }
}

fn report(result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("Drag-Operation fehlgeschlagen: {:#}", e);
    }
}

/// Wandelt eine RGBA-Farbe in `Color32`.
pub fn color32(color: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]).into()
}

fn polyline(transform: &ViewportTransform, offset: Vec3, geometry: &LineGeometry) -> Vec<egui::Pos2> {
    geometry
        .positions()
        .iter()
        .map(|p| transform.world_to_screen((*p + offset).truncate()))
        .collect()
}

fn paint_processors(
    painter: &egui::Painter,
    transform: &ViewportTransform,
    controller: &SceneController,
    colors: &ThemeColors,
) {
    let layer: &ProcessorLayer = controller.processors();
    let body_radius = controller.cables().options().processor_radius * transform.pixels_per_unit;
    let connector_radius = transform.pixels_per_unit;
    let body_stroke = egui::Stroke::new(1.5, color32(colors.color_mid));

    for view in layer.views() {
        let center = transform.world_to_screen(view.position.truncate());
        painter.circle_stroke(center, body_radius, body_stroke);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            &view.label,
            egui::FontId::proportional(12.0),
            color32(view.label_color),
        );

        for marker in &view.connectors {
            let pos = transform.world_to_screen(view.marker_position(marker).truncate());
            if marker.active_visible {
                painter.circle_filled(pos, connector_radius, color32(view.label_color));
            } else {
                painter.circle_stroke(pos, connector_radius, body_stroke);
            }
        }
    }
}

fn paint_cables(painter: &egui::Painter, transform: &ViewportTransform, group: &CableGroup) {
    let line = egui::Stroke::new(2.0, color32(group.line_material().color));

    for cable in group.cables() {
        if cable.geometry.count() >= 2 {
            painter.line(polyline(transform, Vec3::ZERO, &cable.geometry), line);
        }

        let button = &cable.delete_button;
        if button.visible {
            painter.line(
                polyline(transform, button.position, &button.outline.geometry),
                line,
            );
            for stroke in &button.cross {
                painter.line(polyline(transform, button.position, stroke), line);
            }
        }
    }

    if let Some(preview) = group.preview() {
        if preview.geometry.count() >= 2 {
            painter.line(polyline(transform, Vec3::ZERO, &preview.geometry), line);
        }
    }
    if let Some(handle) = group.drag_handle() {
        let stroke = egui::Stroke::new(2.0, color32(group.handle_material().color));
        painter.line(
            polyline(transform, handle.position, &handle.outline.geometry),
            stroke,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_roundtrip_flips_y() {
        let transform = ViewportTransform {
            origin: egui::pos2(100.0, 50.0),
            pixels_per_unit: 4.0,
        };

        let screen = transform.world_to_screen(Vec2::new(2.0, 3.0));
        assert_relative_eq!(screen.x, 108.0);
        assert_relative_eq!(screen.y, 38.0);

        let world = transform.screen_to_world(screen);
        assert_relative_eq!(world.x, 2.0);
        assert_relative_eq!(world.y, 3.0);
    }
}
