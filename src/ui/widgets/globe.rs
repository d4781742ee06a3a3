// SPDX-License-Identifier: MPL-2.0
//! Rotating wireframe globe using Canvas.

use super::project;
use crate::scene::MeshGeometry;
use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

/// Latitude/longitude point globe shown next to the contact section.
pub struct Globe<'a> {
    geometry: &'a MeshGeometry,
    /// Longitudes per latitude ring, used to stroke ring paths.
    lon_steps: usize,
    cache: Cache,
    rotation: f32,
    color: Color,
}

impl<'a> Globe<'a> {
    #[must_use]
    pub fn new(geometry: &'a MeshGeometry, lon_steps: usize, color: Color, rotation: f32) -> Self {
        Self {
            geometry,
            lon_steps,
            cache: Cache::default(),
            rotation,
            color,
        }
    }

    /// Creates a fixed-size Canvas widget from this globe.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::GLOBE_CANVAS_SIZE))
            .height(Length::Fixed(sizing::GLOBE_CANVAS_SIZE))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Globe<'_> {
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
                let radius = frame.width().min(frame.height()) / 2.0 - 8.0;

                // Outline circle grounding the wireframe.
                let outline = Path::circle(center, radius);
                frame.stroke(
                    &outline,
                    Stroke::default().with_width(1.0).with_color(Color {
                        a: 0.3 * self.color.a,
                        ..self.color
                    }),
                );

                if self.lon_steps == 0 {
                    return;
                }

                // Stroke each latitude ring through its projected points.
                for ring in self.geometry.points().chunks_exact(self.lon_steps) {
                    let mut path = canvas::path::Builder::new();
                    let mut started = false;
                    for point in ring.iter().chain(ring.first()) {
                        let projected = project(*point, self.rotation, 0.35, center, radius);
                        // Back-half segments break the path instead of
                        // drawing through the sphere.
                        if projected.depth < -0.15 {
                            started = false;
                            continue;
                        }
                        if started {
                            path.line_to(projected.position);
                        } else {
                            path.move_to(projected.position);
                            started = true;
                        }
                    }
                    frame.stroke(
                        &path.build(),
                        Stroke::default().with_width(1.0).with_color(Color {
                            a: 0.7 * self.color.a,
                            ..self.color
                        }),
                    );
                }

                // Grid intersections as dots, front half only.
                for point in self.geometry.points() {
                    let projected = project(*point, self.rotation, 0.35, center, radius);
                    if projected.depth >= 0.0 {
                        let dot = Path::circle(projected.position, 1.4);
                        frame.fill(&dot, self.color);
                    }
                }
            });

        vec![geometry]
    }
}
