/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use curve_fit::bezier::*;
use curve_fit::*;

#[test]
fn uniform_line_maps_distance_to_same_t() {
    let curve = Curve::from_points(Coord2(0.0, 0.0), (Coord2(1.0, 0.0), Coord2(2.0, 0.0)), Coord2(3.0, 0.0));
    let table = ArcLengthTable::for_curve(&curve);

    for distance in [0.05, 0.35, 0.5, 0.72, 0.99].iter() {
        let t = table.t_for_relative_distance(*distance);
        assert!((t - distance).abs() < 1e-9, "{} -> {}", distance, t);
    }
}

#[test]
fn out_of_range_distances_are_clamped() {
    let curve = Curve::from_points(Coord2(1.0, 2.0), (Coord2(2.0, 0.0), Coord2(3.0, 5.0)), Coord2(4.0, 2.0));
    let table = ArcLengthTable::for_curve(&curve);

    assert!(table.t_for_relative_distance(0.0) == 0.0);
    assert!(table.t_for_relative_distance(-0.5) == 0.0);
    assert!(table.t_for_relative_distance(1.0) == 1.0);
    assert!(table.t_for_relative_distance(1.5) == 1.0);
}

#[test]
fn table_is_monotonic_and_normalized() {
    let curve = Curve::from_points(Coord2(1.0, 2.0), (Coord2(2.0, 0.0), Coord2(3.0, 5.0)), Coord2(4.0, 2.0));
    let table = ArcLengthTable::for_curve(&curve);
    let distances = table.relative_distances();

    assert!(distances.len() == ARC_LENGTH_SEGMENTS + 1);
    assert!(distances[0] == 0.0);
    assert!((distances[ARC_LENGTH_SEGMENTS] - 1.0).abs() < 1e-12);
    assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn uneven_speed_is_corrected() {
    // x = t³, so half the distance is only covered at t = 0.5^(1/3)
    let curve = Curve::from_points(Coord2(0.0, 0.0), (Coord2(0.0, 0.0), Coord2(0.0, 0.0)), Coord2(1.0, 0.0));
    let table = ArcLengthTable::for_curve(&curve);

    assert!((table.t_for_relative_distance(0.125) - 0.5).abs() < 1e-9);

    let t = table.t_for_relative_distance(0.5);
    assert!((t - 0.5f64.powf(1.0 / 3.0)).abs() < 0.01);
}

#[test]
fn point_curve_uses_identity_mapping() {
    let curve = Curve::from_points(Coord2(2.0, 2.0), (Coord2(2.0, 2.0), Coord2(2.0, 2.0)), Coord2(2.0, 2.0));
    let table = ArcLengthTable::for_curve(&curve);

    assert!((table.t_for_relative_distance(0.3) - 0.3).abs() < 1e-12);
}

#[test]
fn building_a_table_leaves_the_curve_unchanged() {
    let curve = Curve::from_points(Coord2(1.0, 2.0), (Coord2(2.0, 0.0), Coord2(3.0, 5.0)), Coord2(4.0, 2.0));
    let copy = curve;

    let _table = ArcLengthTable::for_curve(&curve);

    assert!(curve == copy);
}

#[test]
fn point_curve_with_inexact_coordinates_uses_identity_mapping() {
    let point = Coord2(0.1, 0.7);
    let curve = Curve::from_points(point, (point, point), point);
    let table = ArcLengthTable::for_curve(&curve);

    for step in 1..10 {
        let distance = (step as f64) / 10.0;
        assert!((table.t_for_relative_distance(distance) - distance).abs() < 1e-12);
    }
}

#[test]
fn huge_curve_has_a_usable_table() {
    let curve = Curve::from_points(Coord2(0.0, 0.0), (Coord2(1e200, 0.0), Coord2(2e200, 0.0)), Coord2(3e200, 0.0));
    let table = ArcLengthTable::for_curve(&curve);

    assert!(table.relative_distances().iter().all(|distance| distance.is_finite()));
    assert!((table.t_for_relative_distance(0.5) - 0.5).abs() < 1e-9);
}
