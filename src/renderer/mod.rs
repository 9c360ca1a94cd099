//! Rendering boundary
//!
//! The simulation never draws. Each tick it is turned into a list of
//! `DrawCommand`s in integer screen coordinates, which a `Renderer` backend
//! paints between `clear` and `present`.

pub mod colors;
pub mod shapes;

use glam::IVec2;

pub use colors::Color;
pub use shapes::build_frame;

/// A drawable primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled polygon
    Polygon { points: Vec<IVec2>, color: Color },
    /// Filled circle (bullets, debris, markers)
    Circle {
        center: IVec2,
        radius: u32,
        color: Color,
    },
    /// Diagnostic text, top-left anchored
    Text {
        text: String,
        pos: IVec2,
        color: Color,
    },
}

/// A drawing backend
pub trait Renderer {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);
    fn draw(&mut self, command: &DrawCommand);
    /// Show the finished frame
    fn present(&mut self);
}

/// Paint one frame on `renderer`
pub fn render_frame<R: Renderer + ?Sized>(renderer: &mut R, frame: &[DrawCommand]) {
    renderer.clear(colors::BACKGROUND);
    for command in frame {
        renderer.draw(command);
    }
    renderer.present();
}

/// Renderer that draws nowhere and keeps counts; logs a line per presented frame
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    pub polygons: usize,
    pub circles: usize,
    pub texts: Vec<String>,
}

impl Renderer for HeadlessRenderer {
    fn clear(&mut self, _color: Color) {
        self.polygons = 0;
        self.circles = 0;
        self.texts.clear();
    }

    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Polygon { .. } => self.polygons += 1,
            DrawCommand::Circle { .. } => self.circles += 1,
            DrawCommand::Text { text, .. } => self.texts.push(text.clone()),
        }
    }

    fn present(&mut self) {
        self.frames += 1;
        log::trace!(
            "Frame {}: {} polygons, {} circles, text {:?}",
            self.frames,
            self.polygons,
            self.circles,
            self.texts
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_counts_per_frame() {
        let mut renderer = HeadlessRenderer::default();
        let frame = vec![
            DrawCommand::Polygon {
                points: vec![IVec2::ZERO, IVec2::X, IVec2::Y],
                color: colors::WHITE,
            },
            DrawCommand::Circle {
                center: IVec2::ZERO,
                radius: 2,
                color: colors::WHITE,
            },
            DrawCommand::Text {
                text: "FPS = 30".into(),
                pos: IVec2::new(10, 10),
                color: colors::WHITE,
            },
        ];

        render_frame(&mut renderer, &frame);
        render_frame(&mut renderer, &frame);
        assert_eq!(renderer.frames, 2);
        assert_eq!(renderer.polygons, 1);
        assert_eq!(renderer.circles, 1);
        assert_eq!(renderer.texts, vec!["FPS = 30".to_string()]);
    }
}
