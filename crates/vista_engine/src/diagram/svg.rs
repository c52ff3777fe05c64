//! SVG serialization of a diagram display list

use std::fmt::Write;

use crate::diagram::layout::{DisplayList, Shape};
use crate::diagram::node::Gradient;

const CONNECTION_GRADIENT: &str = "connectionGradient";

fn gradient_id(gradient: Gradient) -> &'static str {
    match gradient {
        Gradient::Core => "coreGradient",
        Gradient::Category => "categoryGradient",
        Gradient::Skill => "skillGradient",
    }
}

fn write_defs(out: &mut String) {
    out.push_str("  <defs>\n");
    let stops: [(&str, &[(&str, &str, Option<&str>)]); 4] = [
        (
            CONNECTION_GRADIENT,
            &[
                ("0%", "#06b6d4", Some("0.4")),
                ("100%", "#8b5cf6", Some("0.4")),
            ],
        ),
        (
            "coreGradient",
            &[
                ("0%", "#06b6d4", None),
                ("50%", "#8b5cf6", None),
                ("100%", "#06b6d4", None),
            ],
        ),
        (
            "categoryGradient",
            &[
                ("0%", "#8b5cf6", None),
                ("50%", "#ec4899", None),
                ("100%", "#8b5cf6", None),
            ],
        ),
        (
            "skillGradient",
            &[
                ("0%", "#3b82f6", None),
                ("50%", "#06b6d4", None),
                ("100%", "#3b82f6", None),
            ],
        ),
    ];

    for (id, gradient_stops) in stops {
        let _ = writeln!(
            out,
            "    <linearGradient id=\"{id}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">"
        );
        for (offset, color, opacity) in gradient_stops {
            match opacity {
                Some(o) => {
                    let _ = writeln!(
                        out,
                        "      <stop offset=\"{offset}\" stop-color=\"{color}\" stop-opacity=\"{o}\" />"
                    );
                }
                None => {
                    let _ = writeln!(
                        out,
                        "      <stop offset=\"{offset}\" stop-color=\"{color}\" />"
                    );
                }
            }
        }
        out.push_str("    </linearGradient>\n");
    }
    out.push_str("  </defs>\n");
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Serialize a display list as a standalone SVG document
///
/// Positions are percent coordinates, so the drawing scales with the
/// `width`/`height` it is given. Animation delays land in per-element
/// `animation-delay` styles backed by a small keyframe header.
pub fn write_svg(list: &DisplayList, width: u32, height: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">"
    );
    write_defs(&mut out);
    out.push_str(concat!(
        "  <style>\n",
        "    @keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }\n",
        "    line, circle, text { opacity: 0; animation: fade-in 0.6s ease-out forwards; }\n",
        "  </style>\n",
    ));

    for shape in list.shapes() {
        match shape {
            Shape::Edge {
                from,
                to,
                opacity,
                delay_secs,
            } => {
                let _ = writeln!(
                    out,
                    "  <line x1=\"{:.2}%\" y1=\"{:.2}%\" x2=\"{:.2}%\" y2=\"{:.2}%\" \
                     stroke=\"url(#{CONNECTION_GRADIENT})\" stroke-width=\"2\" \
                     stroke-opacity=\"{opacity}\" style=\"animation-delay:{delay_secs}s\" />",
                    from.x, from.y, to.x, to.y
                );
            }
            Shape::Disc {
                center,
                radius,
                gradient,
                delay_secs,
                highlighted,
                ..
            } => {
                let stroke_width = if *highlighted { 5 } else { 3 };
                let _ = writeln!(
                    out,
                    "  <circle cx=\"{:.2}%\" cy=\"{:.2}%\" r=\"{radius}\" fill=\"#000000\" \
                     stroke=\"url(#{})\" stroke-width=\"{stroke_width}\" \
                     style=\"animation-delay:{delay_secs}s\" />",
                    center.x,
                    center.y,
                    gradient_id(*gradient)
                );
            }
            Shape::Label {
                center,
                text,
                font_size,
            } => {
                let _ = writeln!(
                    out,
                    "  <text x=\"{:.2}%\" y=\"{:.2}%\" text-anchor=\"middle\" \
                     dominant-baseline=\"middle\" fill=\"#ffffff\" font-size=\"{font_size}\">{}</text>",
                    center.x,
                    center.y,
                    escape(text)
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}
