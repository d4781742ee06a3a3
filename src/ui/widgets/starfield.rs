// SPDX-License-Identifier: MPL-2.0
//! Slowly rotating starfield backdrop using Canvas.

use super::project;
use crate::scene::MeshGeometry;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

/// Point-cloud starfield drawn behind the contact section.
pub struct Starfield<'a> {
    geometry: &'a MeshGeometry,
    cache: Cache,
    rotation: f32,
    color: Color,
}

impl<'a> Starfield<'a> {
    #[must_use]
    pub fn new(geometry: &'a MeshGeometry, color: Color, rotation: f32) -> Self {
        Self {
            geometry,
            cache: Cache::default(),
            rotation,
            color,
        }
    }

    /// Creates a Canvas widget filling its parent.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for Starfield<'_> {
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
                // Stars live on a shell of radius <= 1.4; scale it to cover
                // the frame diagonally so rotation never exposes the edge.
                let radius = frame.width().max(frame.height()) * 0.55 / 1.4;

                for point in self.geometry.points() {
                    let projected = project(*point, self.rotation, 0.2, center, radius);
                    // Depth in roughly [-1.4, 1.4]: far stars fade and shrink.
                    let nearness = ((projected.depth + 1.4) / 2.8).clamp(0.0, 1.0);
                    let alpha = 0.15 + 0.65 * nearness;
                    let size = 0.6 + 1.1 * nearness;

                    let star = Path::circle(projected.position, size);
                    frame.fill(
                        &star,
                        Color {
                            a: self.color.a * alpha,
                            ..self.color
                        },
                    );
                }
            });

        vec![geometry]
    }
}
