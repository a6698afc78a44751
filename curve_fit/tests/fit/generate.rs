/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use curve_fit::bezier::*;
use curve_fit::fit::*;
use curve_fit::*;

#[test]
fn recovers_curve_from_exact_samples() {
    let original = Curve::from_points(Coord2(0.0, 0.0), (Coord2(2.0, 4.0), Coord2(7.0, 5.0)), Coord2(10.0, 0.0));
    let (cp1, cp2) = original.control_points();

    let parameters = (0..=10).map(|step| (step as f64) / 10.0).collect::<Vec<_>>();
    let points = parameters.iter().map(|t| original.point_at_pos(*t)).collect::<Vec<_>>();

    let left_tangent = (cp1 - original.start_point()).normalize().unwrap();
    let right_tangent = (cp2 - original.end_point()).normalize().unwrap();

    let fitted = generate_bezier(&points, &parameters, left_tangent, right_tangent);

    assert!(fitted.start_point() == original.start_point());
    assert!(fitted.end_point() == original.end_point());
    assert!(fitted.control_points().0.distance_to(&cp1) < 1e-6);
    assert!(fitted.control_points().1.distance_to(&cp2) < 1e-6);
}

#[test]
fn zero_alphas_fall_back_to_a_third_of_the_chord() {
    // The tangents are perpendicular to every offset, so the least-squares distances are both 0
    let points = vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(2.0, 0.0), Coord2(3.0, 0.0)];
    let parameters = chord_length_parameterize(&points);

    let fitted = generate_bezier(&points, &parameters, Coord2(0.0, 1.0), Coord2(0.0, 1.0));

    assert!(fitted.control_points() == (Coord2(0.0, 1.0), Coord2(3.0, 1.0)));
}

#[test]
fn singular_system_falls_back_to_a_third_of_the_chord() {
    // With every parameter at 0 all of the basis weights vanish and the determinant is 0
    let points = vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(3.0, 0.0)];
    let parameters = vec![0.0, 0.0, 0.0];

    let fitted = generate_bezier(&points, &parameters, Coord2(1.0, 0.0), Coord2(-1.0, 0.0));

    assert!(fitted.control_points() == (Coord2(1.0, 0.0), Coord2(2.0, 0.0)));
}

#[test]
fn negative_alpha_moves_both_control_points() {
    // Points bulge downwards but the tangents point upwards: the solved distances are negative
    let points = vec![Coord2(0.0, 0.0), Coord2(2.0, -2.0), Coord2(4.0, -2.0), Coord2(6.0, 0.0)];
    let parameters = chord_length_parameterize(&points);

    let fitted = generate_bezier(&points, &parameters, Coord2(0.0, 1.0), Coord2(0.0, 1.0));
    let (cp1, cp2) = fitted.control_points();

    assert!(cp1.distance_to(&Coord2(0.0, 2.0)) < 1e-12);
    assert!(cp2.distance_to(&Coord2(6.0, 2.0)) < 1e-12);
}

#[test]
fn anchors_are_never_moved() {
    let points = super::sine_points(20, 1.0, 4.0, 5.0);
    let parameters = chord_length_parameterize(&points);

    let fitted = generate_bezier(&points, &parameters, Coord2(1.0, 1.0).normalize().unwrap(), Coord2(-1.0, 0.0));

    assert!(fitted.start_point() == points[0]);
    assert!(fitted.end_point() == points[19]);
}
