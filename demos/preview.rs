#![deny(warnings)]

use embedded_graphics::{
    mono_font::MonoTextStyleBuilder,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text, TextStyleBuilder},
};
use inky_mock::{
    phat::Phat,
    prelude::*,
    what::What,
    window::MinifbWindow,
};

// Opens a preview window and draws a small test card into it.
//
// cargo run --example preview --features simulator -- [phat|what] [black|red|yellow]
//
// The window can be resized, close it (or press Escape) to quit.

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let panel = args.next().unwrap_or_else(|| "phat".into());
    let color = args.next().unwrap_or_else(|| "red".into());

    let result = match panel.as_str() {
        "phat" => run::<Phat>(&color),
        "what" => run::<What>(&color),
        other => {
            eprintln!("unknown panel `{other}`, use `phat` or `what`");
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("Simulation failed: {e}");
        std::process::exit(1);
    }
}

fn run<V: Variant>(color: &str) -> Result<(), Error> {
    let config = MockConfig::new(color, false, false)?;
    let mut inky = InkyMock::<V, MinifbWindow>::open(config)?;

    draw(&mut inky);
    inky.show()?;

    // and again rotated, to see the canvas being reused
    inky.set_rotation(DisplayRotation::Rotate180);
    draw_text(&mut inky, "upside down", 5, 5);
    inky.show()?;

    inky.run_until_closed()
}

fn draw<V: Variant>(inky: &mut InkyMock<V, MinifbWindow>) {
    let size = inky.size();
    let _ = Rectangle::new(Point::zero(), size)
        .into_styled(PrimitiveStyle::with_stroke(TriColor::Black, 2))
        .draw(inky);

    let _ = Circle::with_center(Point::new(size.width as i32 / 2, size.height as i32 / 2), 40)
        .into_styled(PrimitiveStyle::with_fill(TriColor::Chromatic))
        .draw(inky);

    let _ = Line::new(Point::zero(), Point::new(size.width as i32, size.height as i32))
        .into_styled(PrimitiveStyle::with_stroke(TriColor::Black, 1))
        .draw(inky);

    draw_text(inky, "Inky Preview", 8, 8);
}

fn draw_text<V: Variant>(inky: &mut InkyMock<V, MinifbWindow>, text: &str, x: i32, y: i32) {
    let style = MonoTextStyleBuilder::new()
        .font(&embedded_graphics::mono_font::ascii::FONT_6X10)
        .text_color(TriColor::White)
        .background_color(TriColor::Black)
        .build();

    let text_style = TextStyleBuilder::new().baseline(Baseline::Top).build();

    let _ = Text::with_text_style(text, Point::new(x, y), style, text_style).draw(inky);
}
