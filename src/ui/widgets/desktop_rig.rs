// SPDX-License-Identifier: MPL-2.0
//! Wireframe desktop rig for the hero section, using Canvas.

use super::project;
use crate::scene::MeshGeometry;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

/// The rig mesh is boxes of eight corners each (see the scene builder);
/// corner index bits encode the (x, y, z) sign choices.
const CORNERS_PER_BOX: usize = 8;

/// Hero-section desktop model, slowly turning.
pub struct DesktopRig<'a> {
    geometry: &'a MeshGeometry,
    cache: Cache,
    rotation: f32,
    color: Color,
}

impl<'a> DesktopRig<'a> {
    #[must_use]
    pub fn new(geometry: &'a MeshGeometry, color: Color, rotation: f32) -> Self {
        Self {
            geometry,
            cache: Cache::default(),
            rotation,
            color,
        }
    }

    /// Creates a Canvas widget filling the hero's canvas strip.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for DesktopRig<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = Point::new(frame.width() / 2.0, frame.height() / 2.0);
                let radius = frame.width().min(frame.height()) * 0.42;

                let stroke = Stroke::default()
                    .with_width(1.5)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round);

                for corners in self.geometry.points().chunks_exact(CORNERS_PER_BOX) {
                    let projected: Vec<Point> = corners
                        .iter()
                        .map(|p| project(*p, self.rotation, 0.25, center, radius).position)
                        .collect();

                    // An edge connects corners whose index bits differ in
                    // exactly one position.
                    let mut path = canvas::path::Builder::new();
                    for a in 0..CORNERS_PER_BOX {
                        for bit in [1usize, 2, 4] {
                            let b = a ^ bit;
                            if a < b {
                                path.move_to(projected[a]);
                                path.line_to(projected[b]);
                            }
                        }
                    }
                    frame.stroke(&path.build(), stroke.clone());
                }
            });

        vec![geometry]
    }
}
