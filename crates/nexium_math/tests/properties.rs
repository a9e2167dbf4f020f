//! Property tests for nexium_math
//!
//! Algebraic laws that must hold across the whole value range, checked over
//! deterministic sample grids.

use approx::assert_abs_diff_eq;
use nexium_math::consts::{FRAC_PI_2, PI};
use nexium_math::*;

fn unit_steps(n: u32) -> impl Iterator<Item = f32> + Clone {
    (0..=n).map(move |i| i as f32 / n as f32)
}

fn sample_vectors() -> Vec<Vec3> {
    let mut out = Vec::new();
    for x in [-7.5, -1.0, 0.0, 0.25, 3.0] {
        for y in [-2.0, 0.0, 0.5, 9.0] {
            for z in [-4.0, 0.0, 1.0, 6.5] {
                let v = Vec3::new(x, y, z);
                if v.length_squared() > 0.0 {
                    out.push(v);
                }
            }
        }
    }
    out
}

fn sample_rotations() -> Vec<Quat> {
    let axes = [
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-0.3, 0.8, 0.2),
    ];
    let angles = [-2.5, -FRAC_PI_2, -0.1, 0.0, 0.7, FRAC_PI_2, 3.0];
    axes.iter()
        .flat_map(|&axis| angles.iter().map(move |&a| Quat::from_axis_angle(axis, a)))
        .collect()
}

fn sample_transforms() -> Vec<Transform> {
    let rotations = sample_rotations();
    let translations = [Vec3::ZERO, Vec3::new(1.0, -2.0, 3.0), Vec3::new(-10.0, 4.0, 0.5)];
    let scales = [Vec3::ONE, Vec3::splat(2.5), Vec3::new(0.5, 1.5, 3.0)];

    let mut out = Vec::new();
    for (i, &rotation) in rotations.iter().enumerate() {
        let translation = translations[i % translations.len()];
        let scale = scales[(i / translations.len()) % scales.len()];
        out.push(Transform::new(translation, rotation, scale));
    }
    out
}

fn assert_mat4_near(a: &Mat4, b: &Mat4, epsilon: f32) {
    for row in 0..4 {
        for col in 0..4 {
            assert!(
                (a.m[row][col] - b.m[row][col]).abs() <= epsilon,
                "[{row}][{col}]: {a:?} != {b:?}"
            );
        }
    }
}

// Color

/// INVARIANT: HSV conversion round-trips for every in-range color
#[test]
fn hsv_round_trip() {
    for r in unit_steps(10) {
        for g in unit_steps(10) {
            for b in unit_steps(10) {
                let c = Color::new(r, g, b, 0.75);
                let hsv = c.to_hsv();
                assert!((0.0..360.0).contains(&hsv.x), "hue {} for {:?}", hsv.x, c);
                let back = Color::from_hsv(hsv.x, hsv.y, hsv.z, c.a);
                assert!(back.approx_eq(c, 1e-4), "{:?} -> {:?} -> {:?}", c, hsv, back);
            }
        }
    }
}

/// INVARIANT: HSL conversion round-trips for every in-range color
#[test]
fn hsl_round_trip() {
    for r in unit_steps(10) {
        for g in unit_steps(10) {
            for b in unit_steps(10) {
                let c = Color::new(r, g, b, 1.0);
                let hsl = c.to_hsl();
                assert!((0.0..360.0).contains(&hsl.x), "hue {} for {:?}", hsl.x, c);
                let back = Color::from_hsl(hsl.x, hsl.y, hsl.z, c.a);
                assert!(back.approx_eq(c, 1e-4), "{:?} -> {:?} -> {:?}", c, hsl, back);
            }
        }
    }
}

fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

/// Hue comes back from channel differences divided by chroma, so its float
/// error grows as saturation drops. One thousandth of a degree covers the
/// grid below; the other components hold to 1e-4.
const HUE_TOLERANCE: f32 = 1e-3;

/// INVARIANT: HSV values with non-zero chroma survive a trip through RGB
#[test]
fn hsv_values_round_trip() {
    for h in (0..360).map(|d| d as f32) {
        for s in unit_steps(10).skip(1) {
            for v in unit_steps(10).skip(1) {
                let c = Color::from_hsv(h, s, v, 0.5);
                let hsv = c.to_hsv();
                assert!(hue_distance(hsv.x, h) < HUE_TOLERANCE, "hue {} -> {}", h, hsv.x);
                assert_abs_diff_eq!(hsv.y, s, epsilon = 1e-4);
                assert_abs_diff_eq!(hsv.z, v, epsilon = 1e-4);
                assert_eq!(c.a, 0.5);
            }
        }
    }
}

/// INVARIANT: HSL values with non-zero chroma survive a trip through RGB
#[test]
fn hsl_values_round_trip() {
    for h in (0..360).map(|d| d as f32) {
        for s in unit_steps(10).skip(1) {
            // l = 0 and l = 1 are black and white, which carry no hue
            for l in unit_steps(10).skip(1).take(9) {
                let c = Color::from_hsl(h, s, l, 0.25);
                let hsl = c.to_hsl();
                assert!(
                    hue_distance(hsl.x, h) < HUE_TOLERANCE,
                    "hue {} -> {} at s={} l={}",
                    h,
                    hsl.x,
                    s,
                    l
                );
                assert_abs_diff_eq!(hsl.y, s, epsilon = 1e-4);
                assert_abs_diff_eq!(hsl.z, l, epsilon = 1e-4);
                assert_eq!(c.a, 0.25);
            }
        }
    }
}

/// INVARIANT: Packed hex survives a trip through float channels
#[test]
fn hex_round_trip() {
    let mut hex: u32 = 0x1234_5678;
    for _ in 0..2000 {
        assert_eq!(Color::from_hex(hex).to_hex(), hex);
        // Knuth multiplicative step, visits well-spread values
        hex = hex.wrapping_mul(2_654_435_761).wrapping_add(0x9E37_79B9);
    }
    for hex in [0u32, 0xFFFF_FFFF, 0x0000_00FF, 0xFF00_0000, 0x8080_8080] {
        assert_eq!(Color::from_hex(hex).to_hex(), hex);
    }
}

/// INVARIANT: normalize and clamp always land in range
#[test]
fn color_normalize_in_range() {
    for r in [0.0, 0.4, 1.0, 2.5, 40.0] {
        for g in [0.0, 0.3, 1.2] {
            for b in [0.0, 0.9, 7.0] {
                let c = Color::new(r, g, b, 1.8);
                assert!(!c.normalize().is_out_of_range(), "{:?}", c.normalize());
                assert!(!c.clamp().is_out_of_range());
                assert!(c.normalize().a <= 1.0);
            }
        }
    }
}

// Vectors and rotations

/// INVARIANT: normalize yields unit length and is idempotent
#[test]
fn normalize_is_idempotent() {
    for v in sample_vectors() {
        let n = v.normalize();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-5);
        assert!(n.normalize().approx_eq(n, 1e-6));
    }
    assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    assert_eq!(Vec4::ZERO.normalize(), Vec4::ZERO);
}

/// INVARIANT: rotation preserves length
#[test]
fn rotation_preserves_length() {
    for q in sample_rotations() {
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-5);
        for v in sample_vectors() {
            let rotated = v.rotate(q);
            assert_abs_diff_eq!(rotated.length(), v.length(), epsilon = v.length() * 1e-5);
        }
    }
}

/// INVARIANT: quaternion, matrix and row-vector product agree on rotation
#[test]
fn rotation_paths_agree() {
    for q in sample_rotations() {
        let m3 = q.to_mat3();
        let m4 = q.to_mat4();
        for v in sample_vectors() {
            let expected = q.rotate(v);
            assert!((v * m3).approx_eq(expected, 1e-4));
            assert!((v * m4).approx_eq(expected, 1e-4));
            assert!((v * q).approx_eq(expected, 1e-4));
        }
    }
}

/// INVARIANT: q * inverse(q) is the identity rotation
#[test]
fn quaternion_inverse() {
    for q in sample_rotations() {
        let id = q * q.inverse();
        assert!(id.dot(Quat::IDENTITY).abs() > 1.0 - 1e-5, "{:?}", id);
    }
}

/// INVARIANT: slerp hits both endpoints and stays unit length
#[test]
fn slerp_boundaries() {
    let rotations = sample_rotations();
    for (i, &a) in rotations.iter().enumerate() {
        let b = rotations[(i * 7 + 3) % rotations.len()];
        assert!(a.slerp(b, 0.0).dot(a).abs() > 1.0 - 1e-5);
        assert!(a.slerp(b, 1.0).dot(b).abs() > 1.0 - 1e-5);
        for t in unit_steps(8) {
            assert_abs_diff_eq!(a.slerp(b, t).length(), 1.0, epsilon = 1e-4);
            assert_abs_diff_eq!(a.lerp(b, t).length(), 1.0, epsilon = 1e-4);
        }
    }
}

/// INVARIANT: Euler angles round-trip away from gimbal lock
#[test]
fn euler_round_trip() {
    for pitch in [-1.4, -0.6, 0.0, 0.3, 1.4] {
        for yaw in [-3.0, -1.0, 0.0, 0.5, 2.9] {
            for roll in [-2.8, -0.2, 0.0, 1.1, 3.0] {
                let euler = Vec3::new(pitch, yaw, roll);
                let back = Quat::from_euler(euler).to_euler();
                assert!(back.approx_eq(euler, 1e-3), "{:?} -> {:?}", euler, back);
            }
        }
    }
}

// Matrices and transforms

/// INVARIANT: M * inverse(M) is the identity for invertible M
#[test]
fn matrix_inverse() {
    for t in sample_transforms() {
        let m = t.to_mat4();
        assert_mat4_near(&(m * m.inverse()), &Mat4::IDENTITY, 1e-3);
        assert_mat4_near(&(m.inverse() * m), &Mat4::IDENTITY, 1e-3);

        let m3 = t.rotation.to_mat3();
        let p = m3 * m3.inverse();
        for row in 0..3 {
            assert!(p.row(row).approx_eq(Mat3::IDENTITY.row(row), 1e-5));
        }
    }

    let proj = Mat4::perspective(PI / 3.0, 16.0 / 9.0, 0.1, 100.0);
    assert_mat4_near(&(proj * proj.inverse()), &Mat4::IDENTITY, 1e-3);
}

/// INVARIANT: det(A * B) == det(A) * det(B)
#[test]
fn determinant_is_multiplicative() {
    let transforms = sample_transforms();
    for pair in transforms.windows(2) {
        let a = pair[0].to_mat4();
        let b = pair[1].to_mat4();
        let expected = a.determinant() * b.determinant();
        assert_abs_diff_eq!((a * b).determinant(), expected, epsilon = expected.abs() * 1e-3 + 1e-3);
    }
}

/// INVARIANT: decompose inverts Transform::to_mat4 for positive scale
#[test]
fn decompose_round_trip() {
    for t in sample_transforms() {
        let d = t.to_mat4().decompose();
        assert!(d.translation.approx_eq(t.translation, 1e-4));
        assert!(d.scale.approx_eq(t.scale, 1e-4), "{:?} != {:?}", d.scale, t.scale);
        assert!(d.rotation.dot(t.rotation).abs() > 1.0 - 1e-4);
    }
}

/// INVARIANT: combining with identity is a no-op
#[test]
fn combine_identity() {
    for t in sample_transforms() {
        let left = Transform::combine(&Transform::IDENTITY, &t);
        let right = Transform::combine(&t, &Transform::IDENTITY);
        assert!(left.translation.approx_eq(t.translation, 1e-6));
        assert!(right.translation.approx_eq(t.translation, 1e-6));
        assert!(left.scale.approx_eq(t.scale, 1e-6));
        assert!(right.rotation.dot(t.rotation).abs() > 1.0 - 1e-6);
    }
}

/// INVARIANT: combined matrix equals the product of child then parent
#[test]
fn combine_matches_matrix_product() {
    let parent = Transform::new(
        Vec3::new(3.0, -1.0, 2.0),
        Quat::from_axis_angle(Vec3::new(0.0, 1.0, 1.0), 0.9),
        Vec3::splat(1.5),
    );
    for child in sample_transforms() {
        let combined = (parent * child).to_mat4();
        let product = child.to_mat4() * parent.to_mat4();
        assert_mat4_near(&combined, &product, 1e-3);
    }
}

/// INVARIANT: every easing curve starts at 0 and ends at 1, except the
/// exponential out curves which stop at `1 - 2^-8` and `1 - 2^-9`
#[test]
fn ease_endpoints() {
    for ease in Ease::ALL {
        assert_abs_diff_eq!(ease.apply(0.0), 0.0, epsilon = 1e-5);
        let end = match ease {
            Ease::ExpoOut => 0.996_093_75,
            Ease::ExpoInOut => 0.998_046_9,
            _ => 1.0,
        };
        assert_abs_diff_eq!(ease.apply(1.0), end, epsilon = 1e-5);
        assert_eq!(ease.name().parse::<Ease>(), Ok(ease));
    }
}

// Concrete scenarios

#[test]
fn scenario_rotate_x_about_y() {
    let v = Vec3::X.rotate(Quat::from_axis_angle(Vec3::Y, FRAC_PI_2));
    assert!(v.approx_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6), "{:?}", v);
}

#[test]
fn scenario_scalars() {
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert_abs_diff_eq!(wrap(370.0, 0.0, 360.0), 10.0, epsilon = 1e-4);
    assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
}

#[test]
fn scenario_hex() {
    assert_eq!(Color::from_hex(0xFF0000FF), Color::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(Color::new(1.0, 0.0, 0.0, 1.0).to_hex(), 0xFF0000FF);
    assert_eq!("#FF0000".parse::<Color>(), Ok(Color::RED));
}

#[test]
fn scenario_camera() {
    let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let eye_space = Vec3::ZERO * view;
    assert!(eye_space.approx_eq(Vec3::new(0.0, 0.0, -5.0), 1e-5));
}

// Serialization

#[cfg(feature = "serde")]
mod serde_round_trip {
    use super::*;

    #[test]
    fn bincode_value_types() {
        for t in sample_transforms() {
            let bytes = bincode::serialize(&t).unwrap();
            let back: Transform = bincode::deserialize(&bytes).unwrap();
            assert_eq!(back, t);

            let m = t.to_mat4();
            let bytes = bincode::serialize(&m).unwrap();
            let back: Mat4 = bincode::deserialize(&bytes).unwrap();
            assert_eq!(back, m);
        }

        let v = IVec3::new(-3, 0, 42);
        let back: IVec3 = bincode::deserialize(&bincode::serialize(&v).unwrap()).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn json_config_values() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct Tween {
            ease: Ease,
            tint: Color,
            offset: Vec2,
        }

        let tween = Tween {
            ease: Ease::QuadInOut,
            tint: Color::ORANGE,
            offset: Vec2::new(1.5, -2.0),
        };
        let json = serde_json::to_string(&tween).unwrap();
        assert!(json.contains(r#""ease":"quad_in_out""#), "{json}");
        let back: Tween = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tween);
    }
}
