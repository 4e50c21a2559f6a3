use label_fit::label::{annotate, AnnotationConfig, Canvas};
use label_fit::layout::{hard_lines, Align, FitOptions};
use label_fit::{Colour, ControlBox, ControlType, LayoutEngine, Px, Rect, TtfFont, TtfFontSource};
use std::collections::{BTreeMap, HashMap};

/// Prints what would be drawn instead of drawing it
struct PrintCanvas;

impl Canvas<TtfFont> for PrintCanvas {
    fn draw_rect(&mut self, rect: Rect, _outline: Colour, _fill: Colour) {
        println!(
            "rect   {}x{} at ({}, {})",
            rect.width, rect.height, rect.left, rect.top
        );
    }

    fn draw_text(&mut self, origin: (Px, Px), text: &str, font: &TtfFont, colour: Colour, align: Align) {
        println!(
            "text   {}px rgb({}, {}, {}) {:?} at ({:.1}, {:.1})",
            font.size, colour.r, colour.g, colour.b, align, origin.0 .0, origin.1 .0
        );
        for line in hard_lines(text) {
            println!("       | {line}");
        }
    }
}

fn main() {
    // a font file path, or a file name looked up in the system font directory
    let font = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "DejaVuSans.ttf".to_string());
    let source = TtfFontSource::new().with_search_dir("/usr/share/fonts/truetype/dejavu");
    let mut engine = LayoutEngine::new(source);

    // one box, fitted both ways
    let rect = Rect::new(213, 1386, 190, 50);
    for wrap in [false, true] {
        let options = FitOptions::default().with_wrap(wrap);
        let placed = engine
            .place_in_box("Landing gear toggle", rect, &font, &options)
            .expect("can load font")
            .expect("text is not empty");
        println!(
            "wrap={wrap}: size {} fits={} {:?}",
            placed.fitted.font_size,
            placed.fitted.fits,
            placed.lines().collect::<Vec<_>>()
        );
    }

    // a whole diagram
    let labels = BTreeMap::from([
        ("JOY_B1".to_string(), vec!["Fire primary".to_string()]),
        (
            "JOY_X".to_string(),
            vec!["Roll".to_string(), "Yaw (with modifier)".to_string()],
        ),
        ("THR_B2".to_string(), vec!["Boost".to_string()]),
    ]);
    let placements = HashMap::from([
        ("JOY_B1".to_string(), ControlBox::new(Rect::new(100, 200, 190, 50))),
        (
            "JOY_X".to_string(),
            ControlBox::new(Rect::new(100, 300, 190, 50)).with_control(ControlType::Analogue),
        ),
        (
            "THR_B2".to_string(),
            ControlBox::new(Rect::new(100, 400, 190, 50))
                .with_control(ControlType::Sticky)
                .with_justification(0.0, 0.5),
        ),
    ]);
    let config = AnnotationConfig::new(font)
        .with_wrap(true)
        .with_show_rects(true);
    let headings = config.headings(Some("Joystick"), Some("Elite: Dangerous"), None);

    let drawn = annotate(&mut engine, &mut PrintCanvas, &labels, &placements, &headings, &config)
        .expect("can load font");
    println!("{drawn} labels drawn");
}
