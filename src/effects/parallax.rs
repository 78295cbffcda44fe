// Parallax
// Scroll-driven translate/scale for decorative layers

/// Per-layer ranges, interpolated from the start value (layer entering the
/// viewport from below) to the end value (layer leaving at the top).
/// Translations are in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxLayer {
    pub translate_x: Option<(f32, f32)>,
    pub translate_y: Option<(f32, f32)>,
    pub scale: Option<(f32, f32)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxOffset {
    pub dx: i32,
    pub dy: i32,
    pub scale: f32,
}

impl Default for ParallaxOffset {
    fn default() -> Self {
        Self { dx: 0, dy: 0, scale: 1.0 }
    }
}

impl ParallaxLayer {
    pub const fn translate_y(start: f32, end: f32) -> Self {
        Self {
            translate_x: None,
            translate_y: Some((start, end)),
            scale: None,
        }
    }

    pub const fn with_translate_x(mut self, start: f32, end: f32) -> Self {
        self.translate_x = Some((start, end));
        self
    }

    pub const fn with_scale(mut self, start: f32, end: f32) -> Self {
        self.scale = Some((start, end));
        self
    }

    /// Offset for a layer whose untransformed top edge sits `top` rows below
    /// the viewport's top edge (negative when scrolled past)
    pub fn offset(&self, top: i32, height: u16, viewport_height: u16) -> ParallaxOffset {
        self.offset_at(scroll_progress(top, height, viewport_height))
    }

    pub fn offset_at(&self, progress: f32) -> ParallaxOffset {
        let lerp = |range: Option<(f32, f32)>, default: f32| {
            range
                .map(|(start, end)| start + (end - start) * progress)
                .unwrap_or(default)
        };

        ParallaxOffset {
            dx: lerp(self.translate_x, 0.0).round() as i32,
            dy: lerp(self.translate_y, 0.0).round() as i32,
            scale: lerp(self.scale, 1.0),
        }
    }
}

/// How far a layer has travelled through the viewport, clamped to `[0, 1]`
pub fn scroll_progress(top: i32, height: u16, viewport_height: u16) -> f32 {
    let span = viewport_height as f32 + height as f32;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height as f32 - top as f32) / span).clamp(0.0, 1.0)
}
