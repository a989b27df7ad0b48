use raylib::prelude::*;

use crate::content::Experience;

const TRANSITION_DURATION: f32 = 0.3; // Fade between settled and transitioning looks (seconds)
const TRANSITION_OPACITY: f32 = 0.5;
const TRANSITION_SCALE: f32 = 0.95;

/// Visual state of the experience card, eased toward the slider's latch.
pub struct SlideLook {
    opacity: f32,
    scale: f32,

    end_opacity: f32,
    end_scale: f32,

    tween_opacity: Option<ease::Tween>,
    tween_scale: Option<ease::Tween>,
    animation_timer: f32,
    is_animating: bool,
}

impl SlideLook {
    pub fn new() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            end_opacity: 1.0,
            end_scale: 1.0,
            tween_opacity: None,
            tween_scale: None,
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    pub fn update(&mut self, dt: f32, transitioning: bool) {
        let (opacity, scale) = if transitioning {
            (TRANSITION_OPACITY, TRANSITION_SCALE)
        } else {
            (1.0, 1.0)
        };

        if opacity != self.end_opacity || scale != self.end_scale {
            self.start_animation(opacity, scale);
        }

        if !self.is_animating {
            return;
        }
        if let Some(tween) = self.tween_opacity.as_mut() {
            self.opacity = tween.apply(dt);
        }
        if let Some(tween) = self.tween_scale.as_mut() {
            self.scale = tween.apply(dt);
        }

        self.animation_timer += dt;
        if self.animation_timer >= TRANSITION_DURATION {
            self.is_animating = false;
            self.opacity = self.end_opacity;
            self.scale = self.end_scale;
            self.tween_opacity = None;
            self.tween_scale = None;
        }
    }

    // Tweens start from the current look, which may be mid-fade.
    fn start_animation(&mut self, opacity: f32, scale: f32) {
        self.end_opacity = opacity;
        self.end_scale = scale;
        self.tween_opacity = Some(ease::Tween::new(
            ease::cubic_out,
            self.opacity,
            opacity,
            TRANSITION_DURATION,
        ));
        self.tween_scale = Some(ease::Tween::new(
            ease::cubic_out,
            self.scale,
            scale,
            TRANSITION_DURATION,
        ));
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    pub fn tint(&self, color: Color) -> Color {
        Color::new(color.r, color.g, color.b, (color.a as f32 * self.opacity) as u8)
    }

    /// Scales `size` around the card, rounding to whole pixels.
    pub fn scaled(&self, size: i32) -> i32 {
        (size as f32 * self.scale).round() as i32
    }
}

/// Draws one experience: company block on the left, image on the right.
pub fn draw_experience(
    d: &mut RaylibDrawHandle,
    experience: &Experience,
    image: Option<&Texture2D>,
    look: &SlideLook,
    origin: Vector2,
    width: f32,
) {
    let x = origin.x as i32;
    let mut y = origin.y as i32;
    let ink = look.tint(Color::BLACK);
    let muted = look.tint(Color::DARKGRAY);

    d.draw_text(&experience.company, x, y, look.scaled(64), ink);
    d.draw_text(
        &experience.duration,
        x + (width * 0.45) as i32,
        y + 8,
        look.scaled(22),
        muted,
    );
    y += look.scaled(72);
    d.draw_text(&experience.location, x, y, look.scaled(24), muted);
    y += look.scaled(56);

    for responsibility in &experience.responsibilities {
        for line in wrap(responsibility, 56) {
            d.draw_text(&line, x, y, look.scaled(22), muted);
            y += look.scaled(30);
        }
        y += look.scaled(12);
    }

    if let Some(demo) = &experience.live_demo {
        y += look.scaled(20);
        d.draw_text(&format!("Project Demonstration: {demo}"), x, y, look.scaled(20), ink);
    }

    // --- Image, fitted into the right half ---
    if let Some(texture) = image {
        let box_w = width * 0.4 * look.scale;
        let box_h = 520.0 * look.scale;
        let tex_w = texture.width() as f32;
        let tex_h = texture.height() as f32;
        let fit = (box_w / tex_w).min(box_h / tex_h);
        let (w, h) = (tex_w * fit, tex_h * fit);
        let left = origin.x + width * 0.55 + (box_w - w) * 0.5;
        let top = origin.y + (box_h - h) * 0.5;

        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_w, tex_h),
            Rectangle::new(left, top, w, h),
            Vector2::new(0.0, 0.0),
            0.0,
            look.tint(Color::WHITE),
        );
    } else {
        let alt = experience.image_alt();
        d.draw_text(
            &alt,
            (origin.x + width * 0.55) as i32,
            origin.y as i32 + 240,
            20,
            look.tint(Color::GRAY),
        );
    }
}

/// Greedy word wrap on character count.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_eases_to_transition_and_back() {
        let mut look = SlideLook::new();
        look.update(TRANSITION_DURATION, true);
        assert_eq!(look.opacity, TRANSITION_OPACITY);
        assert_eq!(look.scale, TRANSITION_SCALE);

        look.update(TRANSITION_DURATION / 2.0, false);
        assert!(look.opacity > TRANSITION_OPACITY && look.opacity < 1.0);
        assert!(look.scale > TRANSITION_SCALE && look.scale < 1.0);
        look.update(TRANSITION_DURATION, false);
        assert_eq!(look.opacity, 1.0);
        assert_eq!(look.scale, 1.0);
    }

    #[test]
    fn reversal_mid_fade_starts_from_current_look() {
        let mut look = SlideLook::new();
        look.update(TRANSITION_DURATION / 3.0, true);
        let dimmed = look.opacity;
        assert!(dimmed < 1.0 && dimmed > TRANSITION_OPACITY);

        // Latch released before the fade finished.
        look.update(0.0, false);
        assert_eq!(look.opacity, dimmed);
        look.update(TRANSITION_DURATION, false);
        assert_eq!(look.opacity, 1.0);
        assert!(!look.is_animating);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert!(wrap("", 10).is_empty());
    }
}
