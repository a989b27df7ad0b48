use std::time::Duration;

use raylib::prelude::*;
use tracing::{debug, info, warn};

use crate::constants::*;
use crate::input::Input;
use crate::sections::{NavMenu, SectionId, SectionTracker};
use crate::viewer::view::{AboutView, ExperienceView, HeroView, View};

const SECTION_HEIGHT: f32 = RENDER_HEIGHT as f32;
const HERO_TOP: f32 = 0.0;
const EXPERIENCE_TOP: f32 = SECTION_HEIGHT;
const ABOUT_TOP: f32 = SECTION_HEIGHT * 2.0;
const PAGE_HEIGHT: f32 = SECTION_HEIGHT * 3.0;
const WHEEL_STEP: f32 = 120.0; // Pixels scrolled per wheel notch

const MENU_WIDTH: i32 = 420;
const MENU_LEFT: i32 = RENDER_WIDTH - MENU_WIDTH;
const MENU_ITEM_TOP: i32 = 220;
const MENU_ITEM_STEP: i32 = 140;
const MENU_ITEM_HEIGHT: i32 = 72;
const MENU_BUTTON: Rectangle = Rectangle {
    x: (RENDER_WIDTH - 80) as f32,
    y: 24.0,
    width: 36.0,
    height: 36.0,
};

const BACKGROUND: Color = Color::new(0xEE, 0xEE, 0xEE, 0xFF);
const MENU_BACKGROUND: Color = Color::new(0xDB, 0xDB, 0xDB, 0xFF);

/// The whole scrolling page: views stacked vertically plus navigation state.
pub struct Page {
    logo: String,
    hero: HeroView,
    experience: ExperienceView,
    about: AboutView,
    tracker: SectionTracker,
    menu: NavMenu,
    scroll_y: f32,
}

impl Page {
    pub fn new(logo: String, hero: HeroView, experience: ExperienceView, about: AboutView) -> Self {
        let mut tracker = SectionTracker::new();
        tracker.register(SectionId::Introduce, HERO_TOP);
        tracker.register(SectionId::Experience, EXPERIENCE_TOP);

        let mut page = Self {
            logo,
            hero,
            experience,
            about,
            tracker,
            menu: NavMenu::default(),
            scroll_y: 0.0,
        };
        page.scroll_to(0.0);
        page
    }

    pub fn scroll_by(&mut self, dy: f32) {
        self.scroll_to(self.scroll_y + dy);
    }

    pub fn scroll_to(&mut self, y: f32) {
        self.scroll_y = y.clamp(0.0, PAGE_HEIGHT - SECTION_HEIGHT);
        if let Some(section) = self.tracker.on_scroll(self.scroll_y, SECTION_HEIGHT) {
            info!(section = %section, "section in view");
        }
        let shown = self.experience.observe(EXPERIENCE_TOP, self.scroll_y);
        self.hero.set_on_screen(self.scroll_y < HERO_TOP + SECTION_HEIGHT);
        debug!(
            scroll_y = self.scroll_y,
            indicators = shown,
            taglines = self.hero.is_rotating(),
            "scrolled"
        );
    }

    pub fn wheel(&mut self, notches: f32) {
        if notches != 0.0 {
            self.scroll_by(-notches * WHEEL_STEP);
        }
    }

    /// Routes slider input; arrow keys act on the slider wherever the page is.
    pub fn handle(&mut self, input: Input) {
        match input.apply(self.experience.slider_mut()) {
            Ok(Some(index)) => debug!(?input, index, "slide changed"),
            Ok(None) => debug!(?input, "slide input absorbed"),
            Err(e) => warn!(?input, error = %e, "slide input rejected"),
        }
    }

    /// Handles a click at framebuffer coordinates.
    ///
    /// With the menu open, clicks pick an entry or, outside the panel, close
    /// the menu. Otherwise they hit the menu button or an indicator bar.
    pub fn click(&mut self, x: f32, y: f32) {
        if self.menu.is_open() {
            if let Some(id) = menu_item_at(x, y) {
                self.select_section(id);
            } else if x < MENU_LEFT as f32 {
                self.menu.close();
                debug!("menu dismissed");
            }
            return;
        }
        if contains(MENU_BUTTON, x, y) {
            self.toggle_menu();
            return;
        }

        let section_y = y + self.scroll_y - EXPERIENCE_TOP;
        if let Some(index) = self.experience.indicator_at(x, section_y) {
            self.handle(Input::GoTo(index));
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
        debug!(open = self.menu.is_open(), "menu toggled");
    }

    /// Jumps to a section chosen in the open menu. Closed menu: ignored.
    pub fn select_section(&mut self, id: SectionId) {
        if !self.menu.is_open() {
            return;
        }
        let id = self.menu.select(id);
        match self.tracker.offset_of(id) {
            Some(top) => self.scroll_to(top),
            None => debug!(section = %id, "section not on this page"),
        }
    }

    pub fn update(&mut self, dt: Duration) {
        self.hero.update(dt);
        self.experience.update(dt);
        self.about.update(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(BACKGROUND);

        let views: [(&dyn View, f32); 3] = [
            (&self.hero, HERO_TOP),
            (&self.experience, EXPERIENCE_TOP),
            (&self.about, ABOUT_TOP),
        ];
        for (view, view_top) in views {
            let top = view_top - self.scroll_y;
            // Skip views entirely outside the viewport
            if top > -SECTION_HEIGHT && top < SECTION_HEIGHT {
                view.draw(d, top);
            }
        }

        // --- Header ---
        if self.tracker.is_at_top() {
            d.draw_text(&self.logo, 40, 24, 40, Color::BLACK);
        }
        for i in 0..3 {
            let y = MENU_BUTTON.y as i32 + 6 + i * 12;
            d.draw_rectangle(MENU_BUTTON.x as i32, y, MENU_BUTTON.width as i32, 3, Color::BLACK);
        }

        if self.menu.is_open() {
            self.draw_menu(d);
        }
    }

    fn draw_menu(&self, d: &mut RaylibDrawHandle) {
        d.draw_rectangle(0, 0, RENDER_WIDTH, RENDER_HEIGHT, Color::new(0, 0, 0, 128));
        let left = MENU_LEFT;
        d.draw_rectangle(left, 0, MENU_WIDTH, RENDER_HEIGHT, MENU_BACKGROUND);

        for (i, id) in SectionId::ALL.iter().enumerate() {
            let y = MENU_ITEM_TOP + i as i32 * MENU_ITEM_STEP;
            let color = if *id == self.tracker.current() {
                Color::WHITE
            } else {
                Color::new(0, 0, 0, 153)
            };
            d.draw_text(id.number(), left + 80, y, 72, color);
            d.draw_rectangle(left + 180, y, 2, MENU_ITEM_HEIGHT, color);
            d.draw_text(id.label(), left + 200, y + 24, 28, color);
        }
    }
}

fn contains(rect: Rectangle, x: f32, y: f32) -> bool {
    x >= rect.x && x <= rect.x + rect.width && y >= rect.y && y <= rect.y + rect.height
}

/// Menu entry under a point, when the point is inside the open panel.
fn menu_item_at(x: f32, y: f32) -> Option<SectionId> {
    if x < MENU_LEFT as f32 || x > RENDER_WIDTH as f32 {
        return None;
    }
    SectionId::ALL.into_iter().enumerate().find_map(|(i, id)| {
        let top = (MENU_ITEM_TOP + i as i32 * MENU_ITEM_STEP) as f32;
        (y >= top && y <= top + MENU_ITEM_HEIGHT as f32).then_some(id)
    })
}
