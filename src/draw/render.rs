//! Cairo-based painting of render plans.

use super::color::Color;
use super::composite::{PlanEntry, RenderPlan};
use super::path::{PathBuilder, PathCommand};
use crate::util::Point;

/// Fills the whole surface with a solid background color.
///
/// Should be called before rendering the plan. A fully transparent color
/// leaves the surface untouched.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    if color.a <= 0.0 {
        return;
    }
    let _ = ctx.save();
    color.set_source(ctx);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves a transparent background
    let _ = ctx.restore();
}

/// Renders every plan entry in order (first entry = bottom layer).
pub fn render_plan(ctx: &cairo::Context, plan: &RenderPlan<'_>) {
    for entry in plan {
        render_entry(ctx, entry);
    }
}

/// Renders one draw stroke, cutting away its clip mask if it has one.
///
/// Masked strokes are painted into an intermediate group where each
/// applicable eraser is stroked with `DEST_OUT`, so only this stroke's ink is
/// removed and strokes painted earlier stay intact.
pub fn render_entry(ctx: &cairo::Context, entry: &PlanEntry<'_>) {
    let stroke = entry.stroke;
    let color = stroke.color().unwrap_or(super::color::BLACK);

    let Some(clip) = &entry.clip else {
        render_polyline(ctx, stroke.points(), color, stroke.width());
        return;
    };

    let _ = ctx.save();
    ctx.push_group();
    render_polyline(ctx, stroke.points(), color, stroke.width());

    ctx.set_operator(cairo::Operator::DestOut);
    for eraser in clip.erasers() {
        render_polyline(ctx, eraser.points(), super::color::BLACK, eraser.width());
    }

    match ctx.pop_group() {
        Ok(pattern) => {
            ctx.set_operator(cairo::Operator::Over);
            let _ = ctx.set_source(&pattern);
            let _ = ctx.paint();
        }
        Err(err) => log::warn!("Failed to composite masked stroke {}: {err}", stroke.id()),
    }
    let _ = ctx.restore();
}

/// Strokes a polyline with round caps and joins.
///
/// A single point is drawn as a round dot of diameter `width`; an empty slice
/// draws nothing.
pub fn render_polyline(ctx: &cairo::Context, points: &[Point], color: Color, width: f64) {
    let Some(first) = points.first() else {
        return;
    };

    color.set_source(ctx);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    for command in PathBuilder::from_points(points).commands() {
        match command {
            PathCommand::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathCommand::LineTo(p) => ctx.line_to(p.x, p.y),
        }
    }
    if points.len() == 1 {
        // Zero-length segment so the round cap produces a dot.
        ctx.line_to(first.x, first.y);
    }

    let _ = ctx.stroke();
}

/// Draws the circular outline that follows the pointer in erase mode.
pub fn render_erase_cursor(ctx: &cairo::Context, center: Point, width: f64, color: Color) {
    let radius = (width / 2.0).max(1.0);
    let _ = ctx.save();
    color.set_source(ctx);
    ctx.set_line_width(1.0);
    ctx.new_sub_path();
    ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.stroke();
    let _ = ctx.restore();
}
