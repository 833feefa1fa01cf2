use bevy::math::{Affine3A, Vec3};

/// The eight corners of a local box, moved into world space
pub fn world_corners(center: Vec3, half_extents: Vec3, transform: &Affine3A) -> [Vec3; 8] {
    let mut corners = [Vec3::ZERO; 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        let sign = Vec3::new(
            if i & 1 == 0 { -1.0 } else { 1.0 },
            if i & 2 == 0 { -1.0 } else { 1.0 },
            if i & 4 == 0 { -1.0 } else { 1.0 },
        );
        *corner = transform.transform_point3(center + half_extents * sign);
    }
    corners
}

/// Size of the axis-aligned box around all points, `None` without points
pub fn bounds_size(points: impl IntoIterator<Item = Vec3>) -> Option<Vec3> {
    let mut points = points.into_iter();
    let first = points.next()?;
    let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
    Some(max - min)
}
