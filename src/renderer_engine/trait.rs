use crate::physic_engine::{Color, Vec2};
use crate::renderer_engine::pixel_canvas::PixelCanvas;

/// Surface de dessin 2D des confettis (origine en haut à gauche, y vers le bas).
///
/// Les couleurs portent leur opacité dans `w` ; la surface compose en
/// « source-over ». Les dimensions peuvent changer entre deux frames.
pub trait Canvas {
    fn size(&self) -> (u32, u32);

    /// Redimensionne la surface ; son contenu est perdu.
    fn resize(&mut self, width: u32, height: u32);

    /// Efface toute la surface (dimensions courantes).
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Remplit un polygone simple fermé (le dernier point rejoint le premier).
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
}

/// Moteur de rendu de la fenêtre : fond, puis la surface de confettis par-dessus l'UI.
pub trait RendererEngine {
    fn set_window_size(&mut self, width: i32, height: i32);

    /// Efface le framebuffer avec la couleur de fond.
    fn begin_frame(&mut self);

    /// Envoie la surface au GPU si `dirty`, puis la dessine plein écran.
    fn present_canvas(&mut self, canvas: &PixelCanvas, dirty: bool);

    fn close(&mut self);
}
