//! Shields-style SVG progress badge, rendered without any external service.

use std::fmt::Write;

pub const BADGE_LABEL: &str = "rustlings";

const LABEL_WIDTH: u32 = 70;
const MESSAGE_WIDTH: u32 = 48;
const HEIGHT: u32 = 20;
const LABEL_COLOR: &str = "#555";
const MESSAGE_COLOR: &str = "#4c1";

/// Renders a two-segment badge reading `rustlings | {pct}%`.
///
/// Segment widths are fixed and do not follow the text length.
pub fn render_badge(pct: u32) -> String {
    let label = BADGE_LABEL;
    let msg = format!("{pct}%");
    let lw = LABEL_WIDTH;
    let mw = MESSAGE_WIDTH;
    let w = lw + mw;
    let label_x = f64::from(lw) / 2.0;
    let msg_x = f64::from(lw) + f64::from(mw) / 2.0;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{HEIGHT}" role="img" aria-label="{label}: {msg}">"#
    );
    svg.push_str(
        r##"  <linearGradient id="b" x2="0" y2="100%">
    <stop offset="0" stop-color="#fff" stop-opacity=".7"/>
    <stop offset=".1" stop-opacity=".1"/>
    <stop offset=".9" stop-opacity=".3"/>
    <stop offset="1" stop-opacity=".5"/>
  </linearGradient>
"##,
    );
    let _ = writeln!(
        svg,
        r##"  <mask id="a"><rect width="{w}" height="{HEIGHT}" rx="3" fill="#fff"/></mask>"##
    );
    svg.push_str("  <g mask=\"url(#a)\">\n");
    let _ = writeln!(
        svg,
        r#"    <rect width="{lw}" height="{HEIGHT}" fill="{LABEL_COLOR}"/>"#
    );
    let _ = writeln!(
        svg,
        r#"    <rect x="{lw}" width="{mw}" height="{HEIGHT}" fill="{MESSAGE_COLOR}"/>"#
    );
    let _ = writeln!(
        svg,
        r#"    <rect width="{w}" height="{HEIGHT}" fill="url(#b)"/>"#
    );
    svg.push_str("  </g>\n");
    svg.push_str(
        r##"  <g fill="#fff" text-anchor="middle" font-family="DejaVu Sans,Verdana,Geneva,sans-serif" font-size="11">
"##,
    );
    let _ = writeln!(
        svg,
        r##"    <text x="{label_x:.1}" y="15" fill="#010101" fill-opacity=".3">{label}</text>"##
    );
    let _ = writeln!(svg, r#"    <text x="{label_x:.1}" y="14">{label}</text>"#);
    let _ = writeln!(
        svg,
        r##"    <text x="{msg_x:.1}" y="15" fill="#010101" fill-opacity=".3">{msg}</text>"##
    );
    let _ = writeln!(svg, r#"    <text x="{msg_x:.1}" y="14">{msg}</text>"#);
    svg.push_str("  </g>\n</svg>");
    svg
}
