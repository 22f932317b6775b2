// SPDX-License-Identifier: LGPL-3.0-or-later

//! Scalar math operations on float buffers.

use multiversion::multiversion;

/// Multiply each element by a scalar: `dst[i] = dst[i] * k`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn scale(dst: &mut [f32], k: f32) {
    for s in dst.iter_mut() {
        *s *= k;
    }
}

/// Scale and shift each element: `dst[i] = dst[i] * k + offset`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn scale_offset(dst: &mut [f32], k: f32, offset: f32) {
    for s in dst.iter_mut() {
        *s = *s * k + offset;
    }
}

/// Scale-add a source into `dst`: `dst[i] = dst[i] + src[i] * k + offset`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn scale_offset_add(dst: &mut [f32], src: &[f32], k: f32, offset: f32) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d += *s * k + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_scale() {
        let mut buf = [1.0, -2.0, 0.5];
        scale(&mut buf, 2.0);
        assert_eq!(buf, [2.0, -4.0, 1.0]);
    }

    #[test]
    fn test_scale_offset() {
        let mut buf = [1.0, 0.0, -1.0];
        scale_offset(&mut buf, 0.5, 0.25);
        assert_approx_eq!(f32, buf[0], 0.75, ulps = 2);
        assert_approx_eq!(f32, buf[1], 0.25, ulps = 2);
        assert_approx_eq!(f32, buf[2], -0.25, ulps = 2);
    }

    #[test]
    fn test_scale_offset_add() {
        let mut dst = [1.0, 1.0];
        let src = [2.0, -2.0];
        scale_offset_add(&mut dst, &src, 0.5, 0.0);
        assert_eq!(dst, [2.0, 0.0]);
    }

    #[test]
    fn test_scale_offset_add_short_src() {
        let mut dst = [1.0, 1.0, 1.0];
        let src = [1.0];
        scale_offset_add(&mut dst, &src, 1.0, 1.0);
        assert_eq!(dst, [3.0, 1.0, 1.0]);
    }
}
