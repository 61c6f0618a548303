use optibench::{Beam, BoardBounds, Breadboard, Pattern};
use tiny_skia::{
    Color as SkiaColor, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

const INCH_MM: f64 = 25.4;
const SCALE: f32 = 4.0;

fn draw_board(pixmap: &mut Pixmap, board: &Breadboard) {
    let mut paint = Paint::default();
    paint.set_color(SkiaColor::from_rgba8(30, 30, 30, 255));
    let rect = tiny_skia::Rect::from_xywh(
        0.0,
        0.0,
        board.width_mm() as f32 * SCALE,
        board.height_mm() as f32 * SCALE,
    )
    .unwrap();
    pixmap.fill_rect(rect, &paint, Transform::identity(), None);

    paint.set_color(SkiaColor::from_rgba8(120, 120, 120, 255));
    paint.anti_alias = true;
    for hole in board.holes_iter() {
        let path = PathBuilder::from_circle(
            hole.x as f32 * SCALE,
            hole.y as f32 * SCALE,
            board.hole_diam_mm() as f32 / 2.0 * SCALE,
        )
        .unwrap();
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

fn draw_beam<B: BoardBounds>(pixmap: &mut Pixmap, beam: &Beam<B>) {
    let path = beam.path();
    if path.len() < 2 {
        return;
    }
    let mut builder = PathBuilder::new();
    builder.move_to(path[0].x as f32 * SCALE, path[0].y as f32 * SCALE);
    for site in &path[1..] {
        builder.line_to(site.x as f32 * SCALE, site.y as f32 * SCALE);
    }
    let skia_path = builder.finish().unwrap();

    let color = beam.color();
    let mut paint = Paint::default();
    paint.set_color(SkiaColor::from_rgba8(
        color.r(),
        color.g(),
        color.b(),
        (beam.opacity() * 255.0) as u8,
    ));
    paint.anti_alias = true;
    let stroke = Stroke {
        width: beam.line_width() as f32 * SCALE / 2.0,
        ..Stroke::default()
    };
    pixmap.stroke_path(&skia_path, &paint, &stroke, Transform::identity(), None);
}

fn main() {
    let board = Breadboard::new(10.0 * INCH_MM, 8.0 * INCH_MM, Pattern::Imperial1In).unwrap();

    let mut beam = Beam::new(&board).with_wavelength(493.5);
    beam.begin(1.0 * INCH_MM, 1.0 * INCH_MM).unwrap();
    beam.move_to(5.0 * INCH_MM, 1.0 * INCH_MM).unwrap();
    beam.move_by(0.0, 1.0 * INCH_MM).unwrap();
    beam.turn_and_move(std::f64::consts::FRAC_PI_4, 1.0 * INCH_MM)
        .unwrap();
    beam.turn_and_move(std::f64::consts::FRAC_PI_2, 1.0 * INCH_MM)
        .unwrap();

    let mut beam2 = Beam::new(&board).with_wavelength(650.0);
    beam2.begin(2.0 * INCH_MM, 4.0 * INCH_MM).unwrap();
    beam2
        .turn_and_move(std::f64::consts::FRAC_PI_4, 2.0 * INCH_MM)
        .unwrap();
    beam2.turn_and_move(0.0, 2.0 * INCH_MM).unwrap();
    beam2
        .turn_and_move(-std::f64::consts::FRAC_PI_4, 2.0 * INCH_MM)
        .unwrap();

    let mut pixmap = Pixmap::new(
        (board.width_mm() as f32 * SCALE) as u32,
        (board.height_mm() as f32 * SCALE) as u32,
    )
    .unwrap();
    draw_board(&mut pixmap, &board);
    draw_beam(&mut pixmap, &beam);
    draw_beam(&mut pixmap, &beam2);
    pixmap.save_png("modelcase.png").unwrap();
    println!("wrote modelcase.png");
}
