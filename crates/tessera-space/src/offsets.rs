//! Moore neighbourhood offsets.
//!
//! Offsets are listed in flattening order of the surrounding block
//! (x fastest), with the zero offset removed.

/// 2D Moore neighbourhood as `(dx, dy)`: the 8 cells of the surrounding
/// 3×3 block.
pub const MOORE_2D: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// 3D Moore neighbourhood as `(dx, dy, dz)`: the 26 cells of the
/// surrounding 3×3×3 block.
pub const MOORE_3D: [(i32, i32, i32); 26] = moore_3d();

const fn moore_3d() -> [(i32, i32, i32); 26] {
    let mut out = [(0, 0, 0); 26];
    let mut i = 0;
    let mut dz = -1;
    while dz <= 1 {
        let mut dy = -1;
        while dy <= 1 {
            let mut dx = -1;
            while dx <= 1 {
                if dx != 0 || dy != 0 || dz != 0 {
                    out[i] = (dx, dy, dz);
                    i += 1;
                }
                dx += 1;
            }
            dy += 1;
        }
        dz += 1;
    }
    out
}
