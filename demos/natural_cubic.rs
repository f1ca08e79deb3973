extern crate knot_spline;

use knot_spline::Spline;

fn main() {
    let xs = [0.0, 1.0, 2.0, 4.0, 5.0, 6.0];
    let ys = [1.0, -1.0, 0.0, 3.0, 1.0, 1.0];

    let spline = Spline::new(&xs, &ys, 3).unwrap();

    let number_of_steps = 60;
    let step = (xs[5] - xs[0]) / number_of_steps as f64;
    let x_vector: Vec<f64> = (0..=number_of_steps).map(|i| xs[0] + step * i as f64).collect();

    let result = spline.evaluate_sorted(&x_vector);

    println!("x;y;y''");
    for (x, y) in x_vector.iter().zip(result.iter()) {
        println!("{:.2};{:.4};{:.4}", x, y, spline.derivative(2, *x));
    }
}
