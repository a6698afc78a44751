/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use curve_fit::bezier::*;
use curve_fit::fit::*;
use curve_fit::*;

#[test]
fn chord_length_of_two_segments() {
    let parameters = chord_length_parameterize(&[Coord2(0.0, 0.0), Coord2(3.0, 4.0), Coord2(3.0, 10.0)]);

    assert!(parameters.len() == 3);
    assert!(parameters[0] == 0.0);
    assert!((parameters[1] - 5.0 / 11.0).abs() < 1e-12);
    assert!(parameters[2] == 1.0);
}

#[test]
fn chord_length_is_increasing() {
    let points = super::sine_points(40, 1.0, 5.0, 3.0);
    let parameters = chord_length_parameterize(&points);

    assert!(parameters[0] == 0.0);
    assert!(parameters[39] == 1.0);
    assert!(parameters.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn chord_length_of_coincident_points() {
    let parameters = chord_length_parameterize(&[Coord2(2.0, 2.0), Coord2(2.0, 2.0), Coord2(2.0, 2.0)]);

    assert!(parameters == vec![0.0, 0.0, 0.0]);
}

#[test]
fn newton_raphson_keeps_exact_parameter() {
    let curve = Curve::from_points(Coord2(0.0, 0.0), (Coord2(1.0, 2.0), Coord2(3.0, 2.0)), Coord2(4.0, 0.0));
    let point = curve.point_at_pos(0.4);

    assert!(newton_raphson_root_find(&curve, &point, 0.4) == 0.4);
}

#[test]
fn newton_raphson_moves_towards_nearest_point() {
    let curve = Curve::from_points(Coord2(0.0, 0.0), (Coord2(1.0, 2.0), Coord2(3.0, 2.0)), Coord2(4.0, 0.0));
    let point = curve.point_at_pos(0.4);

    let improved = newton_raphson_root_find(&curve, &point, 0.35);
    assert!((improved - 0.4).abs() < (0.35f64 - 0.4).abs());

    let improved_again = newton_raphson_root_find(&curve, &point, improved);
    assert!((improved_again - 0.4).abs() < 1e-4);
}

#[test]
fn newton_raphson_stalls_on_zero_denominator() {
    // Every derivative of a curve collapsed to a point is zero
    let curve = Curve::from_points(Coord2(1.0, 1.0), (Coord2(1.0, 1.0), Coord2(1.0, 1.0)), Coord2(1.0, 1.0));

    assert!(newton_raphson_root_find(&curve, &Coord2(5.0, 5.0), 0.3) == 0.3);
}

#[test]
fn newton_raphson_is_not_clamped() {
    // The nearest point on the extended line is before the start of the curve
    let curve = Curve::from_points(Coord2(0.0, 0.0), (Coord2(1.0, 0.0), Coord2(2.0, 0.0)), Coord2(3.0, 0.0));
    let u = newton_raphson_root_find(&curve, &Coord2(-3.0, 0.0), 0.0);

    assert!(u < 0.0);
}

#[test]
fn reparameterize_steps_every_point() {
    let curve = Curve::from_points(Coord2(0.0, 0.0), (Coord2(1.0, 2.0), Coord2(3.0, 2.0)), Coord2(4.0, 0.0));
    let points = vec![Coord2(0.0, 0.0), Coord2(1.0, 1.5), Coord2(3.0, 1.0), Coord2(4.0, 0.0)];
    let parameters = chord_length_parameterize(&points);

    let refined = reparameterize(&curve, &points, &parameters);

    assert!(refined.len() == points.len());
    for index in 0..points.len() {
        assert!(refined[index] == newton_raphson_root_find(&curve, &points[index], parameters[index]));
    }
}
