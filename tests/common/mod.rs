#![allow(dead_code)]

use star_schemes::driver::{FrameRequest, FrameScheduler};
use star_schemes::{Canvas, Color, Point};

/// Canvas that records what was painted.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub width: u32,
    pub height: u32,
    pub detached: bool,
    pub clears: usize,
    pub rects: Vec<Color>,
    pub polygons: Vec<(Vec<Point>, Color)>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.rects.clear();
        self.polygons.clear();
    }

    fn is_attached(&self) -> bool {
        !self.detached
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn fill_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64, color: Color) {
        self.rects.push(color);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.polygons.push((points.to_vec(), color));
    }
}

/// Scheduler that only counts requests; frames are delivered by calling `tick`.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pub issued: FrameRequest,
    pub cancelled: Vec<FrameRequest>,
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameRequest> {
        self.issued += 1;
        Some(self.issued)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.cancelled.push(request);
    }
}
