use macroquad::prelude::*;

use crate::state::Session;

pub struct Hud {
    fps: i32,
    accum_time: f32,
    accum_frames: i32,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            fps: 0,
            accum_time: 0.0,
            accum_frames: 0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.accum_time += dt;
        self.accum_frames += 1;
        if self.accum_time >= 1.0 {
            self.fps = (self.accum_frames as f32 / self.accum_time).round() as i32;
            self.accum_time = 0.0;
            self.accum_frames = 0;
        }
    }

    pub fn draw(&self, session: &Session) {
        let y = screen_height() - 12.0;
        let selected = session.selected_color();

        draw_rectangle(8.0, y - 14.0, 16.0, 16.0, selected.to_mq_color());
        draw_rectangle_lines(8.0, y - 14.0, 16.0, 16.0, 1.0, BLACK);

        let text = format!("{}  |  FPS: {}  |  right click: colors", selected, self.fps);
        draw_text(&text, 30.0, y, 18.0, BLACK);
    }
}
