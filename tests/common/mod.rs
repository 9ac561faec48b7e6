#![allow(dead_code)]

use cgmath::{InnerSpace, Point3, Vector3};

pub const EPSILON: f32 = 1e-4;

pub fn assert_point_near(actual: Point3<f32>, expected: Point3<f32>) {
    let distance = (actual - expected).magnitude();
    assert!(
        distance < EPSILON,
        "expected {expected:?}, got {actual:?} (off by {distance})"
    );
}

pub fn assert_direction_near(actual: Vector3<f32>, expected: Vector3<f32>) {
    let actual = actual.normalize();
    let distance = (actual - expected.normalize()).magnitude();
    assert!(
        distance < EPSILON,
        "expected direction {expected:?}, got {actual:?}"
    );
}
