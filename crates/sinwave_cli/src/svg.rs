//! SVG output
//!
//! Replays recorded draw commands as an SVG document. Transforms become
//! nested groups; render hints pick the `shape-rendering` mode of the paths
//! that follow.

use sinwave_core::{Brush, DrawCommand, RenderHints, Size, Stroke};
use sinwave_paint::PaintContext;
use sinwave_widget::{SinWave, WaveAttributes};
use std::fmt::Write as _;
use tracing::debug;

/// Draw a wave filling `size` and return it as an SVG document
pub fn render_wave(attributes: WaveAttributes, size: Size) -> String {
    let size = size.non_negative();
    let mut wave = SinWave::new(attributes);
    wave.on_resize(size.width, size.height);

    let mut canvas = PaintContext::from_size(size);
    wave.draw(&mut canvas);
    debug!(?size, waviness = wave.waviness(), "rendering wave");
    render_document(size, canvas.commands())
}

/// Render commands into a standalone SVG document of the given size
pub fn render_document(size: Size, commands: &[DrawCommand]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = size.width,
        h = size.height,
    );

    let mut hints = RenderHints::default();
    let mut depth = 1;
    for command in commands {
        let indent = "  ".repeat(depth);
        match command {
            DrawCommand::PushTransform(transform) => {
                let [a, b, c, d, e, f] = transform.elements;
                let _ = writeln!(
                    out,
                    r#"{indent}<g transform="matrix({a} {b} {c} {d} {e} {f})">"#
                );
                depth += 1;
            }
            DrawCommand::PopTransform => {
                if depth > 1 {
                    depth -= 1;
                    let _ = writeln!(out, "{}</g>", "  ".repeat(depth));
                }
            }
            DrawCommand::SetRenderHints(next) => hints = *next,
            DrawCommand::FillPath { path, brush } => {
                let _ = writeln!(
                    out,
                    r#"{indent}<path d="{}" {}{}/>"#,
                    path.to_svg_data(),
                    paint_attrs("fill", brush),
                    rendering_attr(hints),
                );
            }
            DrawCommand::StrokePath {
                path,
                stroke,
                brush,
            } => {
                let _ = writeln!(
                    out,
                    r#"{indent}<path d="{}" fill="none" {} {}{}/>"#,
                    path.to_svg_data(),
                    paint_attrs("stroke", brush),
                    stroke_attrs(stroke),
                    rendering_attr(hints),
                );
            }
        }
    }

    // Close groups left open by unbalanced pushes
    while depth > 1 {
        depth -= 1;
        let _ = writeln!(out, "{}</g>", "  ".repeat(depth));
    }
    out.push_str("</svg>\n");
    out
}

/// `fill`/`stroke` color attribute plus its opacity when translucent
fn paint_attrs(kind: &str, brush: &Brush) -> String {
    let color = brush.color();
    if color.a < 1.0 {
        format!(
            r#"{kind}="{}" {kind}-opacity="{}""#,
            color.to_hex_string(),
            color.a
        )
    } else {
        format!(r#"{kind}="{}""#, color.to_hex_string())
    }
}

fn rendering_attr(hints: RenderHints) -> &'static str {
    if hints.anti_alias {
        r#" shape-rendering="geometricPrecision""#
    } else {
        r#" shape-rendering="crispEdges""#
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    format!(
        r#"stroke-width="{}" stroke-linecap="{}""#,
        stroke.width,
        stroke.cap.as_str()
    )
}
