use crate::bounding_volume::{BoundingVolume, Obb};
use crate::math::{Matrix, Real, Vector, DEFAULT_EPSILON};

/// Tests the 15 candidate separating axes of two oriented boxes.
///
/// Each box is inflated by its margin. Returns `true` if one of the axes separates the two
/// boxes, i.e., if they don't intersect. Touching boxes are not separated.
///
/// The test is carried out in the local frame of `obb1`: the 3 face normals of `obb1`,
/// the 3 face normals of `obb2`, then the 9 cross products of their edge directions.
pub fn obb_obb_separated(obb1: &Obb, obb2: &Obb) -> bool {
    let a = obb1.half_widths().add_scalar(obb1.margin());
    let b = obb2.half_widths().add_scalar(obb2.margin());

    // Orientation of `obb2` and offset between the centers, both in `obb1`'s frame.
    let rot12 = obb1.rotation().inverse() * obb2.rotation();
    let r: &Matrix<Real> = rot12.matrix();
    let t: Vector<Real> = obb1
        .rotation()
        .inverse_transform_vector(&(obb2.center() - obb1.center()));

    // The epsilon keeps the cross-product axes meaningful when two edges are parallel.
    let abs_r = r.abs().add_scalar(DEFAULT_EPSILON);

    for i in 0..3 {
        let ra = a[i];
        let rb = b[0] * abs_r[(i, 0)] + b[1] * abs_r[(i, 1)] + b[2] * abs_r[(i, 2)];

        if t[i].abs() > ra + rb {
            return true;
        }
    }

    for j in 0..3 {
        let ra = a[0] * abs_r[(0, j)] + a[1] * abs_r[(1, j)] + a[2] * abs_r[(2, j)];
        let rb = b[j];
        let proj = t[0] * r[(0, j)] + t[1] * r[(1, j)] + t[2] * r[(2, j)];

        if proj.abs() > ra + rb {
            return true;
        }
    }

    for i in 0..3 {
        let i1 = (i + 1) % 3;
        let i2 = (i + 2) % 3;

        for j in 0..3 {
            let j1 = (j + 1) % 3;
            let j2 = (j + 2) % 3;

            // Axis: i-th axis of `obb1` crossed with the j-th axis of `obb2`.
            let ra = a[i1] * abs_r[(i2, j)] + a[i2] * abs_r[(i1, j)];
            let rb = b[j1] * abs_r[(i, j2)] + b[j2] * abs_r[(i, j1)];
            let proj = t[i2] * r[(i1, j)] - t[i1] * r[(i2, j)];

            if proj.abs() > ra + rb {
                return true;
            }
        }
    }

    false
}
