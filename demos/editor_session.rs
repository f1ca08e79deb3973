extern crate knot_spline;

use knot_spline::{InteractionMode, SplineEditor, Viewport};

fn main() {
    let mut editor = SplineEditor::new();
    let viewport = Viewport::new(-10.0, 10.0);
    let screen_width = 1280;

    for (x, y) in [(5.0, 1.0), (2.0, -3.0), (8.0, 4.0), (-4.0, 0.0)] {
        editor.insert_knot(x, y).unwrap();
    }
    if let Err(error) = editor.insert_knot(2.0, 7.0) {
        println!("rejected: {error}");
    }

    editor.move_knot(8.0, 7.5, 2.0).unwrap();
    editor.remove_knot(-4.0).unwrap();

    for degree in [3, 5, 14] {
        let spline = match editor.build(degree) {
            Ok(spline) => spline,
            Err(error) => {
                println!("degree {degree}: {error}");
                continue;
            }
        };

        for mode in [InteractionMode::Idle, InteractionMode::Panning, InteractionMode::AutoFit] {
            let polyline = editor.sample_and_evaluate(&spline, viewport, screen_width, mode);
            let (x_min, y_min) = polyline[0];
            let (x_max, y_max) = polyline[polyline.len() - 1];
            println!(
                "degree {degree} {mode:?}: {} points from ({x_min:.2}, {y_min:.2}) to ({x_max:.2}, {y_max:.2})",
                polyline.len()
            );
        }
    }
}
