// src/app/mod.rs
use log::{debug, error, info};
use macroquad::prelude::*;

use crate::config::Config;
use crate::input::{apply_events, FrameInput, InputDispatcher};
use crate::rendering::{draw_cursor, draw_picker, CanvasRenderer, Hud};
use crate::state::Session;

pub async fn run(config: Config) {
    let viewport = vec2(screen_width(), screen_height());
    let mut session = match Session::new(config, viewport) {
        Ok(session) => session,
        Err(err) => {
            error!("Cannot start session: {}", err);
            return;
        }
    };
    info!("Palette: {}", session.palette_hex().join(" "));

    let mut input = InputDispatcher::new();
    let mut canvas = CanvasRenderer::new();
    let mut hud = Hud::new();

    loop {
        hud.update(get_frame_time());

        if is_key_pressed(KeyCode::G) {
            canvas.toggle_grid_lines();
        }

        let frame = FrameInput::poll();
        let events = input.translate(&frame, &session);
        let updates = apply_events(&mut session, events);
        if !updates.is_empty() {
            debug!("{} cell(s) repainted", updates.len());
        }

        clear_background(session.default_color().to_mq_color());
        canvas.draw(&session);
        draw_cursor(&session, frame.mouse);
        draw_picker(&session);
        hud.draw(&session);

        next_frame().await
    }
}
