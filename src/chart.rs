//! Geometry for the two dashboard charts, laid out in a fixed SVG view box.
//!
//! The templates only draw what is computed here, so every coordinate is already in view box units.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::VideoRecord;

pub const WIDTH: f64 = 640.0;
pub const HEIGHT: f64 = 260.0;
pub const MARGIN: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Charts {
    pub views: BarChart,
    pub engagement: ScatterChart,
}

impl Charts {
    pub fn from_videos(videos: &[VideoRecord]) -> Self {
        Charts {
            views: views_by_date(videos),
            engagement: engagement(videos),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub width: f64,
    pub height: f64,
    pub max_views: u64,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub views: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub width: f64,
    pub height: f64,
    pub max_views: u64,
    pub max_likes: u64,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub title: String,
    pub views: u64,
    pub likes: u64,
    pub cx: f64,
    pub cy: f64,
}

/// Views per publish date, oldest date first. Uploads sharing a date are stacked into one bar.
pub fn views_by_date(videos: &[VideoRecord]) -> BarChart {
    let mut totals: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for video in videos {
        let total = totals.entry(video.published_at).or_default();
        *total = total.saturating_add(video.views);
    }

    let max_views = totals.values().copied().max().unwrap_or(0);
    let slot = plot_width() / totals.len().max(1) as f64;

    let bars = totals
        .into_iter()
        .enumerate()
        .map(|(index, (date, views))| {
            let height = ratio(views, max_views) * plot_height();
            Bar {
                date,
                views,
                x: MARGIN + slot * index as f64 + slot * 0.1,
                y: HEIGHT - MARGIN - height,
                width: slot * 0.8,
                height,
            }
        })
        .collect();

    BarChart {
        width: WIDTH,
        height: HEIGHT,
        max_views,
        bars,
    }
}

/// One point per upload, views along x and likes along y.
pub fn engagement(videos: &[VideoRecord]) -> ScatterChart {
    let max_views = videos.iter().map(|video| video.views).max().unwrap_or(0);
    let max_likes = videos.iter().map(|video| video.likes).max().unwrap_or(0);

    let points = videos
        .iter()
        .map(|video| Point {
            title: video.title.clone(),
            views: video.views,
            likes: video.likes,
            cx: MARGIN + ratio(video.views, max_views) * plot_width(),
            cy: HEIGHT - MARGIN - ratio(video.likes, max_likes) * plot_height(),
        })
        .collect();

    ScatterChart {
        width: WIDTH,
        height: HEIGHT,
        max_views,
        max_likes,
        points,
    }
}

fn plot_width() -> f64 {
    WIDTH - 2.0 * MARGIN
}

fn plot_height() -> f64 {
    HEIGHT - 2.0 * MARGIN
}

fn ratio(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    value as f64 / max as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(title: &str, day: u32, views: u64, likes: u64) -> VideoRecord {
        VideoRecord::new(
            title.to_string(),
            NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            views,
            likes,
            0,
            String::new(),
        )
    }

    #[test]
    fn bars_are_grouped_by_date_oldest_first() {
        let videos = [
            video("newest", 3, 300, 0),
            video("same day a", 1, 100, 0),
            video("same day b", 1, 50, 0),
        ];

        let chart = views_by_date(&videos);

        let bars: Vec<(u32, u64)> = chart
            .bars
            .iter()
            .map(|bar| (bar.date.format("%d").to_string().parse().unwrap(), bar.views))
            .collect();
        assert_eq!(bars, [(1, 150), (3, 300)]);
        assert_eq!(chart.max_views, 300);
    }

    #[test]
    fn tallest_bar_fills_the_plot() {
        let chart = views_by_date(&[video("a", 1, 10, 0), video("b", 2, 40, 0)]);

        let tallest = &chart.bars[1];
        assert_eq!(tallest.height, HEIGHT - 2.0 * MARGIN);
        assert_eq!(tallest.y, MARGIN);
        assert_eq!(chart.bars[0].height, tallest.height / 4.0);
        assert!(chart.bars[0].x + chart.bars[0].width < tallest.x);
    }

    #[test]
    fn zero_views_draw_flat_bars() {
        let chart = views_by_date(&[video("a", 1, 0, 0)]);
        assert_eq!(chart.bars[0].height, 0.0);
        assert_eq!(chart.bars[0].y, HEIGHT - MARGIN);
    }

    #[test]
    fn scatter_places_extremes_on_the_plot_edges() {
        let chart = engagement(&[video("small", 1, 0, 0), video("big", 2, 1000, 80)]);

        assert_eq!(chart.points[0].cx, MARGIN);
        assert_eq!(chart.points[0].cy, HEIGHT - MARGIN);
        assert_eq!(chart.points[1].cx, WIDTH - MARGIN);
        assert_eq!(chart.points[1].cy, MARGIN);
        assert_eq!((chart.max_views, chart.max_likes), (1000, 80));
    }

    #[test]
    fn no_videos_means_empty_charts() {
        let charts = Charts::from_videos(&[]);
        assert!(charts.views.bars.is_empty());
        assert!(charts.engagement.points.is_empty());
    }
}
