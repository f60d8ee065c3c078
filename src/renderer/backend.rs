use crate::utils::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` 形式の文字列を解析する
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// softbuffer uses 0RGB format, top 8 bits are ignored
    pub fn to_u32(self) -> u32 {
        0xFF000000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
}

/// Abstract rendering backend trait
pub trait RenderBackend {
    /// Handle window resize
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    /// Fill the whole frame with one color
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Fill a rectangle, clipped to the frame
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Result<()>;

    /// Present the rendered frame to the window
    fn present(&mut self) -> Result<()>;
}

/// ウィンドウに依存しないピクセルバッファ
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK.to_u32(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            self.pixels.get((y * self.width + x) as usize).copied()
        } else {
            None
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.resize((width as usize) * (height as usize), Color::BLACK.to_u32());
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_u32());
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + width as i64).min(self.width as i64);
        let y1 = (y as i64 + height as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let value = color.to_u32();
        let stride = self.width as usize;
        for row in y0 as usize..y1 as usize {
            let start = row * stride;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(value);
        }
    }
}

/// Offscreen rendering, `present` is a no-op
impl RenderBackend for FrameBuffer {
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        FrameBuffer::resize(self, width, height);
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        FrameBuffer::clear(self, color);
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Result<()> {
        FrameBuffer::fill_rect(self, x, y, width, height, color);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
