//! SVG silhouette of the lunar phase.
//!
//! The lit region is bounded by the limb (a half circle on the lit side)
//! and the terminator (a half ellipse with horizontal semi-axis
//! `|r cos phase|`). The path starts at the top of the disc, follows the
//! limb to the bottom and returns along the terminator. The lit side is
//! drawn as seen from the northern hemisphere.

use nightsky_time::normalize_angle;

const DARK_FILL: &str = "#1b1b24";
const LIT_FILL: &str = "#f4f1de";

/// Sweep flags `(limb, terminator)` for a phase angle in degrees.
fn sweep_flags(phase: f64) -> (u8, u8) {
    let limb = if phase < 180.0 { 1 } else { 0 };
    let terminator = if phase < 90.0 {
        0
    } else if phase < 180.0 {
        1
    } else if phase < 270.0 {
        0
    } else {
        1
    };
    (limb, terminator)
}

/// Render the Moon at `phase_deg` (0 = new, 180 = full) in a `size`×`size` box.
pub fn generate_moon_svg(phase_deg: f64, size: f64) -> String {
    let phase = normalize_angle(phase_deg);
    let r = size / 2.0;
    let (cx, cy) = (r, r);
    let rx = (r * phase.to_radians().cos()).abs();
    let (limb, terminator) = sweep_flags(phase);

    let top = cy - r;
    let bottom = cy + r;
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{dark}"/>"#,
            r#"<path d="M {cx} {top} A {r} {r} 0 0 {limb} {cx} {bottom} A {rx:.3} {r} 0 0 {terminator} {cx} {top}" fill="{lit}"/>"#,
            "</svg>"
        ),
        size = size,
        cx = cx,
        cy = cy,
        r = r,
        top = top,
        bottom = bottom,
        rx = rx,
        limb = limb,
        terminator = terminator,
        dark = DARK_FILL,
        lit = LIT_FILL,
    )
}
