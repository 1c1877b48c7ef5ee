// Copyright 2025 the Chartgarden Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Self-contained SVG serialization of a [`Scene`].
//!
//! The document has a fixed shape: root `<svg>` with explicit size and `viewBox`, a white
//! background, and one translated group holding every mark in paint order. No stylesheets or
//! font files are referenced.

extern crate alloc;

use alloc::string::String;
use core::f64::consts::{PI, TAU};
use core::fmt::{self, Write};

use kurbo::{Point, Vec2};
use peniko::Brush;

use crate::error::RenderError;
use crate::format::Num;
use crate::mark::{
    CirclePayload, MarkPayload, PolylinePayload, RectPayload, RulePayload, Scene,
    SectorPayload, StrokeStyle, TextAnchor, TextBaseline, TextPayload,
};

/// Sweeps this close to a full turn are drawn as a closed ring.
const FULL_TURN_EPSILON: f64 = 1e-9;

/// Serializes `scene` into a new string.
pub fn to_svg_string(scene: &Scene) -> Result<String, RenderError> {
    let mut out = String::with_capacity(256 + scene.marks().len() * 96);
    write_svg(scene, &mut out)?;
    Ok(out)
}

/// Serializes `scene` into `out`.
pub fn write_svg(scene: &Scene, out: &mut impl Write) -> fmt::Result {
    let view = scene.view();
    let origin = scene.origin();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = Num(view.width),
        h = Num(view.height),
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    writeln!(
        out,
        r#"<g transform="translate({},{})" font-family="sans-serif">"#,
        Num(origin.x),
        Num(origin.y),
    )?;
    for mark in scene.ordered() {
        match &mark.payload {
            MarkPayload::Rect(r) => write_rect(out, r)?,
            MarkPayload::Rule(r) => write_rule(out, r)?,
            MarkPayload::Sector(s) => write_sector(out, s)?,
            MarkPayload::Polyline(p) => write_polyline(out, p)?,
            MarkPayload::Circle(c) => write_circle(out, c)?,
            MarkPayload::Text(t) => write_text(out, t)?,
        }
    }
    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")
}

fn write_rect(out: &mut impl Write, r: &RectPayload) -> fmt::Result {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        Num(r.rect.x0),
        Num(r.rect.y0),
        Num(r.rect.width()),
        Num(r.rect.height()),
    )?;
    write_paint_attr(out, "fill", &r.fill)?;
    if let Some(stroke) = &r.stroke {
        write_stroke_attrs(out, stroke)?;
    }
    if r.opacity < 1.0 {
        write!(out, r#" opacity="{}""#, Num(r.opacity))?;
    }
    writeln!(out, "/>")
}

fn write_rule(out: &mut impl Write, r: &RulePayload) -> fmt::Result {
    write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
        Num(r.p0.x),
        Num(r.p0.y),
        Num(r.p1.x),
        Num(r.p1.y),
    )?;
    write_stroke_attrs(out, &r.stroke)?;
    writeln!(out, "/>")
}

fn write_sector(out: &mut impl Write, s: &SectorPayload) -> fmt::Result {
    let at = |angle: f64, radius: f64| s.center + Vec2::from_angle(angle) * radius;
    let (r, ri) = (s.outer_radius, s.inner_radius);
    let sweep = s.end_angle - s.start_angle;

    out.write_str(r#"<path d=""#)?;
    if sweep >= TAU - FULL_TURN_EPSILON {
        // A single arc cannot start and end at the same point; split the ring in two halves.
        let mid = s.start_angle + PI;
        write_point(out, "M", at(s.start_angle, r))?;
        write_arc(out, r, false, true, at(mid, r))?;
        write_arc(out, r, false, true, at(s.start_angle, r))?;
        out.write_str(" Z")?;
        if ri > 0.0 {
            write_point(out, " M", at(s.start_angle, ri))?;
            write_arc(out, ri, false, false, at(mid, ri))?;
            write_arc(out, ri, false, false, at(s.start_angle, ri))?;
            out.write_str(" Z")?;
        }
    } else {
        let large = sweep > PI;
        write_point(out, "M", at(s.start_angle, ri))?;
        write_point(out, " L", at(s.start_angle, r))?;
        write_arc(out, r, large, true, at(s.end_angle, r))?;
        write_point(out, " L", at(s.end_angle, ri))?;
        if ri > 0.0 {
            write_arc(out, ri, large, false, at(s.start_angle, ri))?;
        }
        out.write_str(" Z")?;
    }
    out.write_char('"')?;
    write_paint_attr(out, "fill", &s.fill)?;
    if let Some(stroke) = &s.stroke {
        write_stroke_attrs(out, stroke)?;
    }
    writeln!(out, "/>")
}

fn write_point(out: &mut impl Write, command: &str, p: Point) -> fmt::Result {
    write!(out, "{command} {} {}", Num(p.x), Num(p.y))
}

fn write_arc(out: &mut impl Write, radius: f64, large: bool, clockwise: bool, to: Point) -> fmt::Result {
    write!(
        out,
        " A {r} {r} 0 {} {} {} {}",
        u8::from(large),
        u8::from(clockwise),
        Num(to.x),
        Num(to.y),
        r = Num(radius),
    )
}

fn write_polyline(out: &mut impl Write, p: &PolylinePayload) -> fmt::Result {
    out.write_str(r#"<polyline points=""#)?;
    for (i, pt) in p.points.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{},{}", Num(pt.x), Num(pt.y))?;
    }
    out.write_str(r#"" fill="none""#)?;
    write_stroke_attrs(out, &p.stroke)?;
    writeln!(out, "/>")
}

fn write_circle(out: &mut impl Write, c: &CirclePayload) -> fmt::Result {
    write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}""#,
        Num(c.center.x),
        Num(c.center.y),
        Num(c.radius),
    )?;
    write_paint_attr(out, "fill", &c.fill)?;
    writeln!(out, "/>")
}

fn write_text(out: &mut impl Write, t: &TextPayload) -> fmt::Result {
    write!(out, r#"<text x="{}" y="{}""#, Num(t.pos.x), Num(t.pos.y))?;
    match t.anchor {
        TextAnchor::Start => {}
        TextAnchor::Middle => out.write_str(r#" text-anchor="middle""#)?,
        TextAnchor::End => out.write_str(r#" text-anchor="end""#)?,
    }
    if t.baseline == TextBaseline::Middle {
        out.write_str(r#" dominant-baseline="middle""#)?;
    }
    write!(out, r#" font-size="{}""#, Num(t.font_size))?;
    write_paint_attr(out, "fill", &t.fill)?;
    if t.angle != 0.0 {
        write!(
            out,
            r#" transform="rotate({} {},{})""#,
            Num(t.angle),
            Num(t.pos.x),
            Num(t.pos.y)
        )?;
    }
    writeln!(out, ">{}</text>", Escaped(&t.text))
}

fn write_stroke_attrs(out: &mut impl Write, stroke: &StrokeStyle) -> fmt::Result {
    write_paint_attr(out, "stroke", &stroke.brush)?;
    write!(out, r#" stroke-width="{}""#, Num(stroke.stroke_width))?;
    if let Some((dash, gap)) = stroke.dash {
        write!(out, r#" stroke-dasharray="{},{}""#, Num(dash), Num(gap))?;
    }
    Ok(())
}

fn write_paint_attr(out: &mut impl Write, name: &str, brush: &Brush) -> fmt::Result {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            write!(
                out,
                r##" {name}="#{:02x}{:02x}{:02x}""##,
                rgba.r, rgba.g, rgba.b
            )?;
            if rgba.a != 255 {
                write!(out, r#" {name}-opacity="{}""#, Num(f64::from(rgba.a) / 255.0))?;
            }
            Ok(())
        }
        _ => write!(out, r#" {name}="none""#),
    }
}

/// Writes text with XML special characters escaped.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(i) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..i])?;
            f.write_str(match rest.as_bytes()[i] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&apos;",
            })?;
            rest = &rest[i + 1..];
        }
        f.write_str(rest)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use kurbo::{Rect, Size};
    use peniko::color::palette::css;

    use super::*;
    use crate::rect_mark::RectMarkSpec;
    use crate::sector_mark::SectorMarkSpec;
    use crate::text_mark::TextMarkSpec;

    fn scene() -> Scene {
        Scene::new(Size::new(1000.0, 630.0), Point::new(110.0, 550.0))
    }

    #[test]
    fn document_frame() {
        let svg = to_svg_string(&scene()).expect("string writes cannot fail");
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="630" viewBox="0 0 1000 630">"#
        ));
        assert!(svg.contains(r#"<rect width="100%" height="100%" fill="white"/>"#));
        assert!(svg.contains(r#"<g transform="translate(110,550)""#));
        assert!(svg.ends_with("</g>\n</svg>\n"));
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(
            Escaped(r#"R&D <"x"> 'y'"#).to_string(),
            "R&amp;D &lt;&quot;x&quot;&gt; &apos;y&apos;"
        );
        let mut s = scene();
        s.push(TextMarkSpec::new(Point::ZERO, "a<b").mark());
        let svg = to_svg_string(&s).expect("string writes cannot fail");
        assert!(svg.contains(">a&lt;b</text>"));
    }

    #[test]
    fn rects_carry_fill_stroke_and_opacity() {
        let mut s = scene();
        s.push(
            RectMarkSpec::new(Rect::new(0.0, -10.0, 20.0, 0.0))
                .with_fill(css::WHITE)
                .with_stroke(StrokeStyle::solid(css::BLACK, 0.5))
                .with_opacity(0.8)
                .mark(),
        );
        let svg = to_svg_string(&s).expect("string writes cannot fail");
        assert!(svg.contains(
            r##"<rect x="0" y="-10" width="20" height="10" fill="#ffffff" stroke="#000000" stroke-width="0.5" opacity="0.8"/>"##
        ));
    }

    #[test]
    fn half_slice_uses_small_arc_and_doughnut_adds_inner_arc() {
        let mut s = scene();
        s.push(SectorMarkSpec::new(Point::ZERO, 50.0, 100.0, 0.0, PI * 0.5).mark());
        let svg = to_svg_string(&s).expect("string writes cannot fail");
        assert!(svg.contains("M 50 0 L 100 0 A 100 100 0 0 1 "));
        assert!(svg.contains(" A 50 50 0 0 0 50 0 Z"));
    }

    #[test]
    fn full_turn_is_split_into_two_arcs() {
        let mut s = scene();
        s.push(SectorMarkSpec::new(Point::ZERO, 0.0, 10.0, 0.0, TAU).mark());
        let svg = to_svg_string(&s).expect("string writes cannot fail");
        assert_eq!(svg.matches(" A 10 10 0 0 1 ").count(), 2);
    }
}
