/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Algebraic properties of the vector types, checked on random input.

#[macro_use] extern crate glic_assert_close;

use glic::{Vec2, Vec3, Vec4, GenType};

const TRIALS: usize = 50;

fn check_arity<V>()
where
    V: GenType + rand::Rand + glic_assert_close::CheckClose,
    V::Scalar: std::fmt::Debug,
{
    for _ in 0..TRIALS {
        let a: V = rand::random();
        let b: V = rand::random();
        let c: V = rand::random();
        let s = rand::random::<f32>() + 0.5;

        assert_eq!(a.apply(|x| x), a);
        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);
        assert_close!(abs=1e-6, (a + b) + c, a + (b + c));
        assert_eq!(a * s, a * V::splat(s));
        assert_eq!(a / s, a / V::splat(s));
        assert_eq!(a - a, V::splat(0.0));
        assert_eq!(-(-a), a);
        assert_eq!(V::zip(|x, y| x - y, a, b), a - b);
    }
}

#[test]
fn vec2_properties() { check_arity::<Vec2>(); }

#[test]
fn vec3_properties() { check_arity::<Vec3>(); }

#[test]
fn vec4_properties() { check_arity::<Vec4>(); }

#[test]
fn zip_is_componentwise() {
    for _ in 0..TRIALS {
        let a: Vec4 = rand::random();
        let b: Vec4 = rand::random();
        let f = |x: f32, y: f32| x * 2.0 + y.powi(2);
        let zipped = Vec4::zip(f, a, b);
        for i in 0..4 {
            assert_eq!(zipped[i], f(a[i], b[i]));
        }
    }
}

#[test]
fn scalar_broadcast_operators() {
    for _ in 0..TRIALS {
        let v: Vec3 = rand::random();
        let s = rand::random::<f32>() + 0.5;
        assert_eq!(v + s, v + Vec3::splat(s));
        assert_eq!(s + v, Vec3::splat(s) + v);
        assert_eq!(s - v, Vec3::splat(s) - v);
        assert_eq!(s / v, Vec3::splat(s) / v);
        assert_eq!(s * v, v * s);
    }
}

#[test]
fn compound_assignment_matches_operators() {
    let a: Vec2 = rand::random();
    let b: Vec2 = rand::random();

    let mut v = a;
    v += b;
    assert_eq!(v, a + b);
    v -= 0.25;
    assert_eq!(v, a + b - 0.25);
    v *= b;
    assert_eq!(v, (a + b - 0.25) * b);
    v /= 2.0;
    assert_eq!(v, (a + b - 0.25) * b / 2.0);
}

#[test]
fn increment_chains() {
    let mut v = Vec3::splat(1.0);
    assert_eq!(*v.inc().inc(), Vec3::splat(3.0));
    assert_eq!(v.post_dec(), Vec3::splat(3.0));
    assert_eq!(v, Vec3::splat(2.0));
    assert_eq!(v.post_inc(), Vec3::splat(2.0));
    assert_eq!(*v.dec(), Vec3::splat(2.0));
}
