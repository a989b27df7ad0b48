//! Window shell around the page, rendered with raylib.

mod page;
mod slide;
mod texture_loader;
mod view;

use std::time::Duration;

use anyhow::anyhow;
use raylib::prelude::*;
use tracing::info;

use crate::carousel::Carousel;
use crate::constants::*;
use crate::content::Portfolio;
use crate::input::Input;
use crate::sections::SectionId;
use crate::text_carousel::TextCarousel;

use self::page::Page;
use self::texture_loader::load_experience_textures;
use self::view::{AboutView, ExperienceView, HeroView};

const MENU_KEYS: [(KeyboardKey, SectionId); 5] = [
    (KeyboardKey::KEY_ONE, SectionId::Introduce),
    (KeyboardKey::KEY_TWO, SectionId::Experience),
    (KeyboardKey::KEY_THREE, SectionId::Projects),
    (KeyboardKey::KEY_FOUR, SectionId::Skills),
    (KeyboardKey::KEY_FIVE, SectionId::Contact),
];

pub fn run(
    portfolio: Portfolio,
    settle_delay: Duration,
    tick_period: Duration,
) -> anyhow::Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title(&format!("{} | Portfolio", portfolio.logo))
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Build the page ---
    let images = load_experience_textures(&mut rl, &thread, &portfolio.experiences);
    let slider = Carousel::new(portfolio.experiences, settle_delay)?;
    let taglines =
        TextCarousel::with_timing(portfolio.taglines, tick_period, TEXT_SCROLL_DURATION)?;
    let mut page = Page::new(
        portfolio.logo,
        HeroView::new(portfolio.hero, taglines),
        ExperienceView::new(slider, images),
        AboutView::new(portfolio.about),
    );

    // Fixed-size framebuffer, scaled to whatever the window is
    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {e}"))?;

    info!("viewer started: arrows slide, wheel scrolls, M opens the menu");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time());

        // 1. Input
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            page.handle(Input::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            page.handle(Input::Previous);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_M) {
            page.toggle_menu();
        }
        for (key, section) in MENU_KEYS {
            if rl.is_key_pressed(key) {
                page.select_section(section);
            }
        }
        page.wheel(rl.get_mouse_wheel_move());

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            // Window coordinates back to framebuffer coordinates
            let mouse = rl.get_mouse_position();
            let sx = RENDER_WIDTH as f32 / rl.get_screen_width().max(1) as f32;
            let sy = RENDER_HEIGHT as f32 / rl.get_screen_height().max(1) as f32;
            page.click(mouse.x * sx, mouse.y * sy);
        }

        // 2. Update carousels and transitions
        page.update(dt);

        // --- Render the page into the framebuffer ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            page.draw(&mut d);
        });

        // Draw inverted copy of framebuffer to the screen
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("viewer closed");
    Ok(())
}
