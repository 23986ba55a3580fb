/* ************************************************************************ **
** This file is part of glic, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The builtin functions, called the way shader code calls them.

#[macro_use] extern crate glic_assert_close;

use glic::*;

#[test]
fn reference_values() {
    assert_eq!(step(0.5f32, 0.7f32), 1.0);
    assert_eq!(step(0.5f32, 0.3f32), 0.0);
    assert_eq!(mix(0.0f32, 10.0f32, 0.25f32), 2.5);
    assert_eq!(clamp(5.0f32, 0.0f32, 3.0f32), 3.0);
    assert_eq!(clamp(-1.0f32, 0.0f32, 3.0f32), 0.0);
    assert_eq!(cross(vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)), vec3(0.0, 0.0, 1.0));
}

#[test]
fn degrees_undo_radians() {
    for _ in 0..50 {
        let x = rand::random::<f32>() * 720.0 - 360.0;
        assert_close!(rel=1e-5, x, degrees(radians(x)));

        let v = rand::random::<Vec4>() * 720.0 - 360.0;
        assert_close!(rel=1e-5, v, degrees(radians(v)));
    }
}

#[test]
fn normalize_every_arity() {
    for _ in 0..50 {
        assert_close!(1.0f32, length(normalize(rand::random::<Vec2>() + 0.1)));
        assert_close!(1.0f32, length(normalize(rand::random::<Vec3>() + 0.1)));
        assert_close!(1.0f32, length(normalize(rand::random::<Vec4>() + 0.1)));
    }
    assert!(normalize(Vec2::zero()).iter().all(|x| x.is_nan()));
}

#[test]
fn scalar_and_vector_agree() {
    // every builtin on a vector is the scalar builtin on each component
    let v = vec3(0.3, -1.7, 2.5);
    let w = vec3(1.5, 0.5, -2.0);
    for i in 0..3 {
        assert_eq!(fract(v)[i], fract(v[i]));
        assert_eq!(sign(v)[i], sign(v[i]));
        assert_eq!(r#mod(v, w)[i], r#mod(v[i], w[i]));
        assert_eq!(atan2(v, w)[i], atan2(v[i], w[i]));
        assert_eq!(smoothstep(-1.0, 1.0, v)[i], smoothstep(-1.0f32, 1.0f32, v[i]));
        assert_eq!(mix(v, w, 0.3)[i], mix(v[i], w[i], 0.3f32));
    }
}

#[test]
fn refraction_and_reflection() {
    let n = vec3(0.0, 1.0, 0.0);

    let head_on = vec3(0.0, -1.0, 0.0);
    assert_eq!(refract(head_on, n, 1.0), head_on);

    let grazing = normalize(vec3(1.0, -1.0, 0.0));
    assert_eq!(refract(grazing, n, 2.0), vec3(0.0, 0.0, 0.0));

    let bounced = reflect(grazing, n);
    assert_close!(abs=1e-6, normalize(vec3(1.0, 1.0, 0.0)), bounced);
    assert_eq!(faceforward(n, grazing, n), n);
    assert_eq!(faceforward(n, bounced, n), -n);
}

#[test]
fn polar_coordinates() {
    for k in 0..7 {
        let angle = radians(45.0 * k as f32 - 135.0);
        let p = vec2(cos(angle), sin(angle)) * 3.0;
        assert_close!(abs=1e-5, angle, atan2(p.y(), p.x()));
        assert_close!(3.0f32, length(p));
        assert_close!(abs=1e-5, 0.0f32, distance(p, p));
    }
}
