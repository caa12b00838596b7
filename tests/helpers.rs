use anyhow::{anyhow, Result};
use confetti_greeting::animation_driver::FrameScheduler;
use confetti_greeting::physic_engine::{BurstSampler, Color, Palette, PhysicConfig, Shape, Vec2};
use confetti_greeting::renderer_engine::Canvas;
use confetti_greeting::ui_engine::Clipboard;

/// Opération de dessin enregistrée par `RecordingCanvas`.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Resize(u32, u32),
    Circle { center: Vec2, radius: f32, color: Color },
    Polygon { points: usize, color: Color },
}

/// Canvas sans pixels : garde la trace des appels.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub size: (u32, u32),
    pub ops: Vec<DrawOp>,
}

#[allow(dead_code)]
impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ops: Vec::new(),
        }
    }

    /// Formes dessinées depuis le dernier `clear`.
    pub fn shapes_since_clear(&self) -> usize {
        self.ops
            .iter()
            .rev()
            .take_while(|op| **op != DrawOp::Clear)
            .filter(|op| matches!(op, DrawOp::Circle { .. } | DrawOp::Polygon { .. }))
            .count()
    }

    pub fn clears(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Clear).count()
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.ops.push(DrawOp::Resize(width, height));
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.ops.push(DrawOp::Polygon {
            points: points.len(),
            color,
        });
    }
}

/// Compte les demandes de frame.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct CountingScheduler {
    pub requests: usize,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) {
        self.requests += 1;
    }
}

#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub content: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.content = Some(text.to_owned());
        Ok(())
    }
}

/// Presse-papiers refusant toute écriture.
#[allow(dead_code)]
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(anyhow!("clipboard permission denied"))
    }
}

/// Tirages imposés : chaque particule de la rafale reçoit les mêmes valeurs.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct FixedBurst {
    pub vel: Vec2,
    /// `None` : première couleur de la palette
    pub color: Option<Color>,
    pub rotation: f32,
    pub rotation_vel: f32,
    pub shape: Shape,
}

#[allow(dead_code)]
impl FixedBurst {
    pub fn with_velocity(vel: Vec2) -> Self {
        Self {
            vel,
            color: None,
            rotation: 0.0,
            rotation_vel: 0.0,
            shape: Shape::Circle,
        }
    }
}

impl BurstSampler for FixedBurst {
    fn velocity(&mut self, _cfg: &PhysicConfig) -> Vec2 {
        self.vel
    }

    fn color(&mut self, palette: &Palette) -> Color {
        self.color.unwrap_or(palette.colors()[0])
    }

    fn rotation(&mut self) -> f32 {
        self.rotation
    }

    fn rotation_velocity(&mut self, _cfg: &PhysicConfig) -> f32 {
        self.rotation_vel
    }

    fn shape(&mut self, _cfg: &PhysicConfig) -> Shape {
        self.shape
    }
}
