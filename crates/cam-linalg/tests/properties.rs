use approx::{assert_abs_diff_eq, assert_relative_eq};
use cam_linalg::{transform, vec2, vec3, vec4, Mat2, Mat3, Mat4, Matrix, Vec3, Vector};

const ITERATIONS: usize = 500;

fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0x6a09e667f3bcc908)
}

fn random_vector<const N: usize>(rng: &mut fastrand::Rng) -> Vector<N> {
    Vector::from_fn(|_| rng.f32() * 2.0 - 1.0)
}

fn random_matrix<const N: usize>(rng: &mut fastrand::Rng) -> Matrix<N> {
    Matrix::from_fn(|_, _| rng.f32() * 2.0 - 1.0)
}

#[test]
fn vector_identities() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = random_vector::<4>(&mut rng);
        assert_eq!(&v + Vector::ZERO, v);
        assert_eq!(&v - &v, Vector::<4>::ZERO);
        assert_eq!(&v * 1.0, v);
        assert_eq!(-(-&v), v);

        let w = random_vector::<4>(&mut rng);
        assert_eq!(v.dot(&w), w.dot(&v));
        assert_eq!(&v + &w, &w + &v);
        assert_eq!(v.distance(&w), w.distance(&v));
        assert!(v.distance(&w) >= 0.0);
    }
}

#[test]
fn normalized_magnitude() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = random_vector::<3>(&mut rng);
        if v.is_zero() {
            continue;
        }
        assert_relative_eq!(v.normalize().magnitude(), 1.0, epsilon = 1e-5);

        let v = random_vector::<2>(&mut rng) * 1000.0;
        assert_relative_eq!(v.normalize().magnitude(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn cross_product() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_vector::<3>(&mut rng);
        let b = random_vector::<3>(&mut rng);
        let c = a.cross(&b);
        assert_eq!(c, -1.0 * b.cross(&a));
        assert_abs_diff_eq!(c.dot(&a), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(c.dot(&b), 0.0, epsilon = 1e-5);
        assert_eq!(cam_linalg::cross_product(&a, &a), Vec3::ZERO);
    }
}

#[test]
fn matrix_identity() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let m = random_matrix::<4>(&mut rng);
        assert_eq!(&m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * &m, m);
        let v = random_vector::<4>(&mut rng);
        assert_eq!(Mat4::IDENTITY * &v, v);

        let m = random_matrix::<3>(&mut rng);
        assert_eq!(&m * Mat3::IDENTITY, m);
        assert_eq!(Mat3::IDENTITY * &m, m);

        let m = random_matrix::<2>(&mut rng);
        assert_eq!(&m * Mat2::IDENTITY, m);
        assert_eq!(Mat2::IDENTITY * &m, m);
    }

    assert_eq!(Mat2::IDENTITY.determinant(), 1.0);
    assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
    assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
}

#[test]
fn matrix_product_is_associative() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_matrix::<4>(&mut rng);
        let b = random_matrix::<4>(&mut rng);
        let c = random_matrix::<4>(&mut rng);
        assert_abs_diff_eq!(&(&a * &b) * &c, &a * &(&b * &c), epsilon = 1e-4);

        let v = random_vector::<4>(&mut rng);
        assert_abs_diff_eq!(&(&a * &b) * &v, &a * &(&b * &v), epsilon = 1e-4);
    }
}

/// Products are summed left to right, starting with the first term, regardless of backend.
#[test]
fn product_evaluation_order() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_matrix::<4>(&mut rng);
        let b = random_matrix::<4>(&mut rng);
        let product = &a * &b;
        for row in 0..4 {
            for col in 0..4 {
                let expected = (1..4).fold(a[(row, 0)] * b[(0, col)], |acc, k| {
                    acc + a[(row, k)] * b[(k, col)]
                });
                assert_eq!(product[(row, col)].to_bits(), expected.to_bits());
            }
        }

        let v = random_vector::<3>(&mut rng);
        let m = random_matrix::<3>(&mut rng);
        let mv = &m * &v;
        for row in 0..3 {
            let expected = m[(row, 0)] * v[0] + m[(row, 1)] * v[1] + m[(row, 2)] * v[2];
            assert_eq!(mv[row].to_bits(), expected.to_bits());
        }

        let w = random_vector::<3>(&mut rng);
        let s = rng.f32();
        for (i, (sum, scaled)) in (&v + &w)
            .as_array()
            .iter()
            .zip((&v * s).as_array())
            .enumerate()
        {
            assert_eq!(sum.to_bits(), (v[i] + w[i]).to_bits());
            assert_eq!(scaled.to_bits(), (v[i] * s).to_bits());
        }
    }
}

#[test]
fn determinant() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_matrix::<4>(&mut rng);
        let b = random_matrix::<4>(&mut rng);
        assert_relative_eq!(
            (&a * &b).determinant(),
            a.determinant() * b.determinant(),
            epsilon = 1e-3,
            max_relative = 1e-3
        );
        assert_abs_diff_eq!(a.transpose().determinant(), a.determinant(), epsilon = 1e-4);

        let m = random_matrix::<3>(&mut rng);
        // Scaling by a power of two is exact.
        assert_eq!(m.scale(2.0).determinant(), 8.0 * m.determinant());

        // Swapping two rows negates the determinant.
        let swapped = Mat3::from_rows([m.row(1), m.row(0), m.row(2)]);
        assert_abs_diff_eq!(swapped.determinant(), -m.determinant(), epsilon = 1e-5);
    }
}

#[test]
fn caches_follow_mutation() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let mut v = random_vector::<4>(&mut rng);
        v.magnitude();
        let i = rng.usize(0..4);
        v[i] = rng.f32();
        assert_eq!(v.magnitude(), Vector::from(*v.as_array()).magnitude());

        v.z = rng.f32();
        assert_eq!(v.magnitude(), Vector::from(*v.as_array()).magnitude());

        v *= rng.f32();
        assert_eq!(v.magnitude(), Vector::from(*v.as_array()).magnitude());

        let mut m = random_matrix::<4>(&mut rng);
        m.determinant();
        *m.at_mut(rng.usize(0..4), rng.usize(0..4)) = rng.f32();
        assert_eq!(m.determinant(), Matrix::from(*m.as_columns()).determinant());

        m[(rng.usize(0..4), rng.usize(0..4))] = rng.f32();
        assert_eq!(m.determinant(), Matrix::from(*m.as_columns()).determinant());

        m += random_matrix::<4>(&mut rng);
        assert_eq!(m.determinant(), Matrix::from(*m.as_columns()).determinant());
    }
}

#[test]
fn clones_are_independent() {
    let mut a = vec3(3.0, 4.0, 0.0);
    assert_eq!(a.magnitude(), 5.0);
    let b = a.clone();
    a.z = 12.0;
    assert_eq!(a.magnitude(), 13.0);
    assert_eq!(b.magnitude(), 5.0);

    let mut m = Mat2::IDENTITY;
    assert_eq!(m.determinant(), 1.0);
    let n = m.clone();
    m[(0, 1)] = 1.0;
    m[(1, 0)] = 1.0;
    assert_eq!(m.determinant(), 0.0);
    assert_eq!(n.determinant(), 1.0);
}

#[test]
fn known_values() {
    assert_eq!(vec4(1.0, 2.0, 3.0, 4.0) * 2.0, vec4(2.0, 4.0, 6.0, 8.0));
    assert_eq!(cam_linalg::mat2(1.0, 2.0, 3.0, 4.0).determinant(), -2.0);
    assert_eq!(
        transform::translate(&vec3(5.0, 6.0, 7.0)) * vec4(0.0, 0.0, 0.0, 1.0),
        vec4(5.0, 6.0, 7.0, 1.0)
    );
    assert_eq!(cam_linalg::dot_product(&Vec3::X, &Vec3::Y), 0.0);
    assert_eq!(
        cam_linalg::dot_product(&vec3(1.0, 2.0, 3.0), &vec3(1.0, 2.0, 3.0)),
        14.0
    );

    let mut g = vec2(0.0, 0.0);
    assert_eq!(g.magnitude(), 0.0);
    g.x = 1.0;
    assert_eq!(g.magnitude(), 1.0);
}

#[test]
fn view_projection() {
    let view = transform::look_at(&vec3(0.0, 0.0, 5.0), &Vec3::ZERO, &Vec3::Y);
    let projection = transform::perspective(60f32.to_radians(), 1.0, 1.0, 9.0);
    let vp = &projection * &view;

    // The origin is 5 units in front of the camera, on the view axis.
    let clip = &vp * vec4(0.0, 0.0, 0.0, 1.0);
    assert_eq!(clip.w, 5.0);
    assert_abs_diff_eq!(clip.x, 0.0);
    assert_abs_diff_eq!(clip.y, 0.0);
    let ndc_z = clip.z / clip.w;
    assert!(ndc_z > -1.0 && ndc_z < 1.0);

    // Points on the near and far planes map to the faces of the NDC cube.
    let near = &vp * vec4(0.0, 0.0, 4.0, 1.0);
    assert_relative_eq!(near.z / near.w, -1.0, epsilon = 1e-5);
    let far = &vp * vec4(0.0, 0.0, -4.0, 1.0);
    assert_relative_eq!(far.z / far.w, 1.0, epsilon = 1e-5);
}
