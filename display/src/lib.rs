use anyhow::{anyhow, Result};
use sdl2::pixels::PixelFormatEnum;

use chip8vm::FrameBuffer;

/// Default size multiplier for each Chip-8 pixel
pub const SCALE: u32 = 10;

/// # Display
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// Every frame the whole FrameBuffer is read back and drawn; the interpreter
/// doesn't report which pixels changed.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: u32,
    height: u32,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self> {
        let frame: FrameBuffer = FrameBuffer::new();
        let (width, height) = (frame.width() as u32, frame.height() as u32);

        let video_subsystem = sdl.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(title, width * scale, height * scale)
            .position_centered()
            .opengl()
            .build()?;
        let canvas = window.into_canvas().build()?;

        Ok(Display {
            canvas,
            width,
            height,
        })
    }

    /// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 texture is a 1D array of ints that represent concatenated rows of RGB pixels.
    ///
    /// This creates a black and white rendering by:
    /// - Reading the frame row by row, left to right
    /// - Triplicating each pixel to represent its RGB values
    /// - Converting from on/off to 255/0 intensity
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    fn frame_to_sdl_texture(frame: &FrameBuffer) -> Vec<u8> {
        (0..frame.height())
            .flat_map(|y| (0..frame.width()).map(move |x| frame.is_set(x, y)))
            .flat_map(|on| std::iter::repeat(u8::from(on) * 255).take(3))
            .collect()
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<()> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator.create_texture_streaming(
            PixelFormatEnum::RGB24,
            self.width,
            self.height,
        )?;

        let pixels = Display::frame_to_sdl_texture(frame);
        let row_len = self.width as usize * 3;
        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                for (row, src) in pixels.chunks(row_len).enumerate() {
                    buffer[row * pitch..row * pitch + row_len].copy_from_slice(src);
                }
            })
            .map_err(|e| anyhow!(e))?;

        self.canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_sdl_texture() {
        let mut frame: FrameBuffer = FrameBuffer::new();
        frame.draw_sprite(1, 0, &[0x80]);
        frame.draw_sprite(0, 1, &[0x80]);
        let frame = Display::frame_to_sdl_texture(&frame);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(frame, expected);
    }
}
