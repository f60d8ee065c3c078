use crate::renderer::backend::{Color, FrameBuffer, RenderBackend};
use crate::utils::{Result, TriPaneError};
use softbuffer::{Context, Surface};
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::window::Window;

/// CPU rendering through softbuffer
pub struct SoftbufferBackend {
    surface: Surface<Rc<Window>, Rc<Window>>,
    frame: FrameBuffer,
}

impl SoftbufferBackend {
    pub fn new(window: Rc<Window>) -> Result<Self> {
        let context = Context::new(window.clone())
            .map_err(|e| TriPaneError::rendering(format!("Failed to create softbuffer context: {}", e)))?;

        let mut surface = Surface::new(&context, window.clone())
            .map_err(|e| TriPaneError::rendering(format!("Failed to create softbuffer surface: {}", e)))?;

        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        resize_surface(&mut surface, width, height)?;

        log::info!("SoftbufferBackend initialized: {}x{} px", width, height);

        Ok(Self {
            surface,
            frame: FrameBuffer::new(width, height),
        })
    }
}

fn resize_surface(surface: &mut Surface<Rc<Window>, Rc<Window>>, width: u32, height: u32) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        return Ok(());
    };
    surface
        .resize(w, h)
        .map_err(|e| TriPaneError::rendering(format!("Failed to resize surface: {}", e)))
}

impl RenderBackend for SoftbufferBackend {
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        // minimized windows report 0x0, keep the last frame
        let unchanged = (width, height) == (self.frame.width(), self.frame.height());
        if width > 0 && height > 0 && !unchanged {
            self.frame.resize(width, height);
            resize_surface(&mut self.surface, width, height)?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.frame.clear(color);
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Result<()> {
        self.frame.fill_rect(x, y, width, height, color);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let mut surface_buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| TriPaneError::rendering(format!("Failed to get surface buffer: {}", e)))?;

        // Verify buffer sizes match
        if surface_buffer.len() != self.frame.pixels().len() {
            log::error!(
                "Buffer size mismatch: surface={}, internal={}",
                surface_buffer.len(),
                self.frame.pixels().len()
            );
            return Ok(());
        }

        surface_buffer.copy_from_slice(self.frame.pixels());
        surface_buffer
            .present()
            .map_err(|e| TriPaneError::rendering(format!("Failed to present buffer: {}", e)))?;

        Ok(())
    }
}
