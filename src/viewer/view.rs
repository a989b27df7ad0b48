use std::time::Duration;

use raylib::prelude::*;

use crate::carousel::Carousel;
use crate::constants::*;
use crate::content::{About, Experience, Hero};
use crate::sections::SectionId;
use crate::text_carousel::TextCarousel;
use crate::viewer::slide::{SlideLook, draw_experience, wrap};
use crate::visibility::IndicatorVisibility;

const MARGIN: f32 = 160.0;
const INDICATOR_WIDTH: i32 = 48;
const INDICATOR_HEIGHT: i32 = 6;
const INDICATOR_GAP: i32 = 16;
const TAGLINE_SIZE: i32 = 48;

/// A full-height block of the page.
pub trait View {
    fn update(&mut self, dt: Duration);
    /// `top` is the section's position relative to the viewport.
    fn draw(&self, d: &mut RaylibDrawHandle, top: f32);
}

fn draw_heading(
    d: &mut RaylibDrawHandle,
    number: &str,
    vertical: &str,
    title: &str,
    subtitle: &str,
    top: f32,
) {
    let y = top as i32;
    d.draw_text(number, 40, y + 120, 40, Color::DARKGRAY);
    // Stacked letters stand in for vertical text
    for (i, ch) in vertical.chars().enumerate() {
        d.draw_text(&ch.to_string(), 52, y + 180 + i as i32 * 26, 22, Color::GRAY);
    }
    d.draw_text(title, MARGIN as i32, y + 120, 80, Color::BLACK);
    d.draw_text(subtitle, MARGIN as i32, y + 210, 36, Color::DARKGRAY);
}

fn draw_paragraphs(d: &mut RaylibDrawHandle, paragraphs: &[String], x: i32, mut y: i32) {
    for paragraph in paragraphs {
        for line in wrap(paragraph, 90) {
            d.draw_text(&line, x, y, 24, Color::DARKGRAY);
            y += 32;
        }
        y += 20;
    }
}

// --- 01 INTRODUCE ---

pub struct HeroView {
    hero: Hero,
    taglines: TextCarousel,
}

impl HeroView {
    pub fn new(hero: Hero, taglines: TextCarousel) -> Self {
        Self { hero, taglines }
    }

    /// Taglines only rotate while the hero is on screen.
    pub fn set_on_screen(&mut self, on_screen: bool) {
        self.taglines.set_paused(!on_screen);
    }

    pub fn is_rotating(&self) -> bool {
        !self.taglines.is_paused()
    }
}

impl View for HeroView {
    fn update(&mut self, dt: Duration) {
        self.taglines.update(dt);
    }

    fn draw(&self, d: &mut RaylibDrawHandle, top: f32) {
        draw_heading(
            d,
            SectionId::Introduce.number(),
            SectionId::Introduce.label(),
            &self.hero.title,
            &self.hero.subtitle,
            top,
        );

        // Tagline strip: one line visible, scrolled by the text carousel
        let line_height = TAGLINE_SIZE as f32 * 1.2;
        let strip_top = top + 270.0;
        let progress = ease::cubic_in_out(self.taglines.scroll_progress(), 0.0, 1.0, 1.0);
        let offset = self.taglines.scroll_offset(line_height, progress);
        for (i, text) in self.taglines.texts().iter().enumerate() {
            let y = strip_top + i as f32 * line_height - offset;
            // Lines fade out as they leave the strip
            let distance = ((y - strip_top) / line_height).abs();
            if distance < 1.0 {
                let alpha = ((1.0 - distance) * 255.0) as u8;
                let color = Color::new(80, 80, 80, alpha);
                d.draw_text(text, MARGIN as i32, y as i32, TAGLINE_SIZE, color);
            }
        }

        draw_paragraphs(d, &self.hero.paragraphs, MARGIN as i32, (top + 380.0) as i32);
    }
}

// --- 02 EXPERIENCE ---

pub struct ExperienceView {
    slider: Carousel<Experience>,
    images: Vec<Option<Texture2D>>,
    look: SlideLook,
    visibility: IndicatorVisibility,
}

impl ExperienceView {
    pub fn new(slider: Carousel<Experience>, images: Vec<Option<Texture2D>>) -> Self {
        Self {
            slider,
            images,
            look: SlideLook::new(),
            visibility: IndicatorVisibility::default(),
        }
    }

    pub fn slider_mut(&mut self) -> &mut Carousel<Experience> {
        &mut self.slider
    }

    pub fn observe(&mut self, section_top: f32, scroll_y: f32) -> bool {
        self.visibility
            .observe(section_top, RENDER_HEIGHT as f32, scroll_y, RENDER_HEIGHT as f32)
    }

    fn indicators_left(&self) -> i32 {
        let count = self.slider.len() as i32;
        let total = count * INDICATOR_WIDTH + (count - 1) * INDICATOR_GAP;
        (RENDER_WIDTH - total) / 2
    }

    /// Index of the indicator bar under a point given in section coordinates.
    pub fn indicator_at(&self, x: f32, y: f32) -> Option<usize> {
        if !self.visibility.is_visible() {
            return None;
        }
        let bar_y = (RENDER_HEIGHT - 64) as f32;
        // Generous hit box around the thin bars
        if y < bar_y - 12.0 || y > bar_y + INDICATOR_HEIGHT as f32 + 12.0 {
            return None;
        }
        let left = self.indicators_left();
        (0..self.slider.len()).find(|&i| {
            let bar_x = (left + i as i32 * (INDICATOR_WIDTH + INDICATOR_GAP)) as f32;
            x >= bar_x && x <= bar_x + INDICATOR_WIDTH as f32
        })
    }
}

impl View for ExperienceView {
    fn update(&mut self, dt: Duration) {
        self.slider.update(dt);
        self.look.update(dt.as_secs_f32(), self.slider.is_transitioning());
    }

    fn draw(&self, d: &mut RaylibDrawHandle, top: f32) {
        let experience = self.slider.current_item();
        draw_heading(
            d,
            SectionId::Experience.number(),
            SectionId::Experience.label(),
            &experience.title,
            &experience.subtitle,
            top,
        );

        let image = self.images.get(self.slider.current_index()).and_then(Option::as_ref);
        draw_experience(
            d,
            experience,
            image,
            &self.look,
            Vector2::new(MARGIN, top + 320.0),
            RENDER_WIDTH as f32 - 2.0 * MARGIN,
        );

        if !self.visibility.is_visible() {
            return;
        }
        let left = self.indicators_left();
        let bar_y = top as i32 + RENDER_HEIGHT - 64;
        for i in 0..self.slider.len() {
            let x = left + i as i32 * (INDICATOR_WIDTH + INDICATOR_GAP);
            let (height, color) = if i == self.slider.current_index() {
                (INDICATOR_HEIGHT * 3 / 2, Color::new(0xDB, 0xDB, 0xDB, 0xFF))
            } else {
                (INDICATOR_HEIGHT, Color::new(0x58, 0x58, 0x58, 0xFF))
            };
            d.draw_rectangle(x, bar_y, INDICATOR_WIDTH, height, color);
        }
    }
}

// --- ABOUT ---

pub struct AboutView {
    about: About,
}

impl AboutView {
    pub fn new(about: About) -> Self {
        Self { about }
    }
}

impl View for AboutView {
    fn update(&mut self, _dt: Duration) {}

    fn draw(&self, d: &mut RaylibDrawHandle, top: f32) {
        draw_heading(d, "", "ABOUT", &self.about.title, &self.about.subtitle, top);
        draw_paragraphs(d, &self.about.paragraphs, MARGIN as i32, (top + 320.0) as i32);
    }
}
