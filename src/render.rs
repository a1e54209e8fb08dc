use crate::tracer::*;
use log::{debug, trace};

/// Position of pixel `i` across a `count`-pixel axis, in `[0, 1]`.
///
/// A single-pixel axis samples its centre.
#[inline]
fn normalized_coord(i: u32, count: u32) -> f64 {
    if count <= 1 {
        0.5
    } else {
        i as f64 / (count - 1) as f64
    }
}

/// Colour for one camera ray: the hit normal, or the background on a miss.
pub fn shade<W: Intersectable + ?Sized>(ray: &Ray, world: &W) -> Rgb {
    match world.intersect(ray, Interval::new(T_MIN, T_MAX)) {
        Some(rec) => normal_to_rgb(rec.normal),
        None => BACKGROUND,
    }
}

/// Casts one ray per pixel of `buffer` and stores the shaded result.
pub fn render<C, W>(camera: &C, world: &W, buffer: &mut PixelBuffer)
where
    C: Camera + ?Sized,
    W: Intersectable + ?Sized,
{
    let (width, height) = (buffer.width(), buffer.height());
    if width == 0 || height == 0 {
        return;
    }
    debug!("rendering {width}x{height}");

    for y in 0..height {
        if y % 20 == 0 || y == height - 1 {
            trace!("scanlines remaining: {}", height - 1 - y);
        }

        // Row 0 is the top of the image; the viewport's v grows upward.
        let v = 1.0 - normalized_coord(y, height);
        for x in 0..width {
            let u = normalized_coord(x, width);
            let ray = camera.get_ray(u, v);
            buffer.set_pixel(x, y, shade(&ray, world));
        }
    }

    debug!("render done");
}

/// Fills `buffer` with a red/green ramp: red grows left to right and green
/// grows top to bottom.
pub fn render_gradient(buffer: &mut PixelBuffer) {
    let (width, height) = (buffer.width(), buffer.height());
    let byte = |c: f64| (255.999 * c) as u8;

    for y in 0..height {
        let g = byte(normalized_coord(y, height));
        for x in 0..width {
            buffer.set_pixel(x, y, [byte(normalized_coord(x, width)), g, 0]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_along_y(aspect_ratio: f64) -> PinholeCamera {
        PinholeCamera::new(
            Point3::zero(),
            Vec3::new(0.0, 1.0, 0.0),
            WORLD_UP,
            90.0,
            aspect_ratio,
            1.0,
        )
    }

    #[test]
    fn test_all_background_when_nothing_is_hit() {
        let camera = camera_along_y(4.0 / 3.0);
        let behind = Sphere::new(Point3::new(0.0, -5.0, 0.0), 1.0);
        let mut buffer = PixelBuffer::new(8, 6);

        render(&camera, &behind, &mut buffer);

        let expected: Vec<u8> = BACKGROUND.iter().copied().cycle().take(8 * 6 * 3).collect();
        assert_eq!(buffer.as_bytes(), expected.as_slice());
    }

    #[test]
    fn test_center_pixel_shows_facing_normal() {
        let camera = camera_along_y(1.0);
        let sphere = Sphere::new(Point3::new(0.0, 5.0, 0.0), 1.0);
        let mut buffer = PixelBuffer::new(5, 5);

        render(&camera, &sphere, &mut buffer);

        // Normal at the front of the sphere is (0, -1, 0).
        assert_eq!(buffer.get_pixel(2, 2), Some([127, 0, 127]));
        assert_eq!(buffer.get_pixel(0, 0), Some(BACKGROUND));
        assert_eq!(buffer.get_pixel(4, 4), Some(BACKGROUND));
    }

    #[test]
    fn test_top_row_is_top_of_viewport() {
        let camera = camera_along_y(1.0);
        // Sits above the view axis, so only the upper rows can see it.
        let sphere = Sphere::new(Point3::new(0.0, 5.0, 4.0), 1.5);
        let mut buffer = PixelBuffer::new(9, 9);

        render(&camera, &sphere, &mut buffer);

        assert_ne!(buffer.get_pixel(4, 0), Some(BACKGROUND));
        assert_eq!(buffer.get_pixel(4, 8), Some(BACKGROUND));
    }

    #[test]
    fn test_dyn_dispatch() {
        let camera: Box<dyn Camera> = Box::new(camera_along_y(1.0));
        let world: Box<dyn Intersectable> =
            Box::new(Sphere::new(Point3::new(0.0, 3.0, 0.0), 1.0));
        let mut buffer = PixelBuffer::new(1, 1);

        render(camera.as_ref(), world.as_ref(), &mut buffer);

        // A single pixel samples the viewport centre.
        assert_eq!(buffer.get_pixel(0, 0), Some([127, 0, 127]));
    }

    #[test]
    fn test_zero_sized_render_is_noop() {
        let camera = camera_along_y(1.0);
        let sphere = Sphere::new(Point3::new(0.0, 5.0, 0.0), 1.0);
        for (w, h) in [(0, 0), (0, 4), (4, 0)] {
            let mut buffer = PixelBuffer::new(w, h);
            render(&camera, &sphere, &mut buffer);
            assert!(buffer.as_bytes().is_empty());
        }
    }

    #[test]
    fn test_gradient_corners() {
        let mut buffer = PixelBuffer::new(4, 3);
        render_gradient(&mut buffer);
        assert_eq!(buffer.get_pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(buffer.get_pixel(3, 0), Some([255, 0, 0]));
        assert_eq!(buffer.get_pixel(0, 2), Some([0, 255, 0]));
        assert_eq!(buffer.get_pixel(3, 2), Some([255, 255, 0]));
        assert_eq!(buffer.get_pixel(0, 1), Some([0, 127, 0]));
    }
}
