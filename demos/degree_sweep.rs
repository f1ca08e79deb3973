extern crate knot_spline;

use knot_spline::{Spline, MAX_DEGREE, MIN_DEGREE};

fn main() {
    let xs = [-2.0, -1.0, 0.0, 0.5, 1.5, 2.0];
    let ys = [0.0, 1.0, -1.0, 0.5, 2.0, 0.0];

    let x_vector: Vec<f64> = (0..=40).map(|i| -2.0 + 0.1 * i as f64).collect();

    print!("x");
    let mut columns = Vec::new();
    for degree in (MIN_DEGREE..=MAX_DEGREE).step_by(2) {
        match Spline::new(&xs, &ys, degree) {
            Ok(spline) => {
                print!(";D={degree}");
                columns.push(spline.evaluate_sorted(&x_vector));
            }
            Err(error) => eprintln!("degree {degree}: {error}"),
        }
    }
    println!();

    for (i, x) in x_vector.iter().enumerate() {
        print!("{x:.2}");
        for column in &columns {
            print!(";{:.4}", column[i]);
        }
        println!();
    }
}
