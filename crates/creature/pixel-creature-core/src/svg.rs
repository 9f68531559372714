//! SVG serialization of a sketched creature.
//!
//! Output is a single self-contained document: static layers back to front,
//! then wing groups, then blink lids, all inside one group that carries the
//! bounce. One element per line, no indentation, no trailing newline.

use crate::animation::{Blink, Bounce, WingGroup, BLINK_KEY_TIMES};
use crate::canvas::{Pixel, CANVAS_SIZE, PIXEL_SIZE};
use crate::color::Rgb;
use crate::config::GeneratorConfig;
use crate::generator::Creature;

/// Escape text for use inside a double-quoted attribute.
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_rect(svg: &mut String, pixel: &Pixel) {
    svg.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{PIXEL_SIZE}" height="{PIXEL_SIZE}" fill="{}"/>"#,
        i32::from(pixel.x) * PIXEL_SIZE,
        i32::from(pixel.y) * PIXEL_SIZE,
        pixel.color,
    ));
    svg.push('\n');
}

fn push_wing(svg: &mut String, wing: &WingGroup, animate: bool) {
    svg.push_str("<g>\n");
    for pixel in &wing.pixels {
        push_rect(svg, pixel);
    }
    if animate {
        let flap = &wing.flap;
        svg.push_str(&format!(
            r#"<animateTransform attributeName="transform" type="translate" values="0 0; 0 -{}; 0 0" dur="{:.2}s" repeatCount="indefinite" begin="{:.2}s"/>"#,
            flap.amplitude, flap.duration, flap.begin,
        ));
        svg.push('\n');
    }
    svg.push_str("</g>\n");
}

fn push_blink(svg: &mut String, blink: &Blink, lid: Rgb) {
    let eye = &blink.eye;
    let key_times = BLINK_KEY_TIMES
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(";");
    svg.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="0" fill="{lid}">"#,
        eye.x * PIXEL_SIZE,
        eye.y * PIXEL_SIZE,
        eye.width * PIXEL_SIZE,
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<animate attributeName="height" values="0;0;{};0;0" keyTimes="{key_times}" dur="{:.2}s" repeatCount="indefinite" begin="{:.2}s"/>"#,
        eye.height * PIXEL_SIZE,
        blink.duration,
        blink.delay,
    ));
    svg.push_str("\n</rect>\n");
}

fn push_bounce(svg: &mut String, bounce: &Bounce) {
    svg.push_str(&format!(
        r#"<animateTransform attributeName="transform" type="translate" values="0 0; 0 {}; 0 0" dur="{:.2}s" repeatCount="indefinite"/>"#,
        bounce.amplitude, bounce.duration,
    ));
    svg.push('\n');
}

/// Serialize `creature` with the directives enabled in `config`.
pub fn render(creature: &Creature, config: &GeneratorConfig) -> String {
    let toggles = config.animations;
    let pixel_count: usize = creature.layers.iter().map(Vec::len).sum();
    let mut svg = String::with_capacity(512 + pixel_count * 64);

    let label = if config.label_prefix.is_empty() {
        escape_attr(&creature.name)
    } else {
        escape_attr(&format!("{} {}", config.label_prefix, creature.name))
    };
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {CANVAS_SIZE} {CANVAS_SIZE}" width="{CANVAS_SIZE}" height="{CANVAS_SIZE}" role="img" aria-label="{label}" shape-rendering="crispEdges">"#
    ));
    svg.push_str("\n<g>\n<g>\n");

    for (index, layer) in creature.layers.iter().enumerate() {
        if layer.is_empty() {
            continue;
        }
        svg.push_str(&format!("<g data-layer=\"{index}\">\n"));
        for pixel in layer {
            push_rect(&mut svg, pixel);
        }
        svg.push_str("</g>\n");
    }

    for wing in &creature.wings {
        push_wing(&mut svg, wing, toggles.wings);
    }

    if toggles.blink {
        for blink in &creature.blinks {
            push_blink(&mut svg, blink, creature.palette.lid);
        }
    }

    svg.push_str("</g>\n");
    if toggles.bounce {
        push_bounce(&mut svg, &creature.bounce);
    }
    svg.push_str("</g>\n</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_escaping() {
        assert_eq!(escape_attr(r#"a&b<c>"d'"#), "a&amp;b&lt;c&gt;&quot;d&apos;");
        assert_eq!(escape_attr("Mochi"), "Mochi");
    }

    #[test]
    fn rects_scale_to_output_units() {
        let mut svg = String::new();
        let pixel = Pixel::at(3, 5, Rgb::hex(0x22223b)).unwrap();
        push_rect(&mut svg, &pixel);
        assert_eq!(
            svg,
            "<rect x=\"12\" y=\"20\" width=\"4\" height=\"4\" fill=\"#22223b\"/>\n"
        );
    }

    #[test]
    fn blink_key_times_render_compactly() {
        let mut svg = String::new();
        let blink = Blink {
            eye: crate::face::EyeBox {
                x: 9,
                y: 12,
                width: 3,
                height: 2,
            },
            duration: 2.5,
            delay: 0.2,
        };
        push_blink(&mut svg, &blink, Rgb::BLACK);
        assert!(svg.contains(r##"width="12" height="0" fill="#000000""##));
        assert!(svg.contains(r#"values="0;0;8;0;0" keyTimes="0;0.82;0.88;0.94;1""#));
        assert!(svg.contains(r#"dur="2.50s" repeatCount="indefinite" begin="0.20s""#));
    }

    #[test]
    fn right_wing_begin_prints_half_the_printed_duration() {
        let wing = WingGroup {
            side: crate::animation::Side::Right,
            pixels: vec![Pixel::at(24, 14, Rgb::BLACK).unwrap()],
            flap: crate::animation::Flap {
                amplitude: PIXEL_SIZE,
                duration: 1.67,
                begin: 1.67 / 2.0,
            },
        };
        let mut svg = String::new();
        push_wing(&mut svg, &wing, true);
        assert!(svg.starts_with("<g>\n<rect x=\"96\" y=\"56\""));
        assert!(svg.contains(r#"values="0 0; 0 -4; 0 0" dur="1.67s" repeatCount="indefinite" begin="0.83s""#));
        assert!(svg.ends_with("</g>\n"));

        let mut still = String::new();
        push_wing(&mut still, &wing, false);
        assert!(!still.contains("animateTransform"));
    }
}
