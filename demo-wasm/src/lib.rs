use springcloth::{ClothConfig, ClothEngine, SidePatch};
use wasm_bindgen::prelude::*;

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    cloth: ClothEngine<f32>,
}

#[wasm_bindgen]
impl ClothDemo {
    /// Curtain hanging from its top edge, laid out over a `width` x `height` canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        ClothDemo {
            cloth: ClothEngine::build(width, height, ClothConfig::default()),
        }
    }

    /// Same as `new`, but with each edge's attachment chosen by the page.
    pub fn with_sides(width: f32, height: f32, top: bool, right: bool, bottom: bool, left: bool) -> Self {
        let config = ClothConfig::builder()
            .with_attached(SidePatch {
                top: Some(top),
                right: Some(right),
                bottom: Some(bottom),
                left: Some(left),
            })
            .build();
        ClothDemo {
            cloth: ClothEngine::build(width, height, config),
        }
    }

    pub fn update(&mut self) {
        self.cloth.step();
    }

    /// Returns false if there is nothing to grab.
    pub fn mouse_down(&mut self, x: f32, y: f32) -> bool {
        self.cloth.pick(x, y).is_ok()
    }

    pub fn mouse_move(&mut self, x: f32, y: f32) {
        self.cloth.set_pointer(x, y);
    }

    pub fn mouse_up(&mut self) {
        self.cloth.release();
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        self.cloth.positions_flat()
    }

    pub fn rows(&self) -> usize {
        self.cloth.rows()
    }
    pub fn cols(&self) -> usize {
        self.cloth.cols()
    }
}
