use sdl2::pixels;
use sdl2::rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::VideoSubsystem;

use chip8::display::{Color, Rect};
use chip8::Screen;

use super::{ErrorKind, Result};

const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 320;

pub struct SdlScreen {
    canvas: Canvas<Window>,
}

impl SdlScreen {
    pub fn new(video_ctx: &VideoSubsystem, title: &str) -> Result<SdlScreen> {
        let window = video_ctx
            .window(title, WINDOW_WIDTH, WINDOW_HEIGHT)
            .position_centered()
            .build()
            .map_err(|e| ErrorKind::Sdl(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| ErrorKind::Sdl(e.to_string()))?;

        Ok(SdlScreen { canvas })
    }
}

fn sdl_color(c: Color) -> pixels::Color {
    pixels::Color::RGB(c.r, c.g, c.b)
}

impl Screen for SdlScreen {
    fn size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    fn clear(&mut self, color: Color) -> chip8::Result<()> {
        self.canvas.set_draw_color(sdl_color(color));
        self.canvas.clear();
        Ok(())
    }

    fn fill_rects(&mut self, rects: &[Rect], color: Color) -> chip8::Result<()> {
        let rects: Vec<rect::Rect> = rects
            .iter()
            .map(|r| rect::Rect::new(r.x, r.y, r.w, r.h))
            .collect();

        self.canvas.set_draw_color(sdl_color(color));
        self.canvas
            .fill_rects(&rects)
            .map_err(|e| chip8::ErrorKind::Screen(e).into())
    }

    fn present(&mut self) -> chip8::Result<()> {
        self.canvas.present();
        Ok(())
    }
}
