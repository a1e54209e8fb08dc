use log::{error, info};
use sphere_tracer::*;
use std::env;
use std::process::ExitCode;
use std::time::Instant;

// --- Scene ---
const IMAGE_WIDTH: u32 = 640;
const IMAGE_HEIGHT: u32 = 480;
const FOV_DEGREES: f64 = 60.0;
const FOCAL_LENGTH: f64 = 1.0;

const CAMERA_POSITION: Point3 = Point3::new(0.0, 0.0, 0.0);
const CAMERA_FORWARD: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const SPHERE_CENTER: Point3 = Point3::new(0.0, 5.0, 0.0);
const SPHERE_RADIUS: f64 = 1.0;

const DEFAULT_OUTPUT: &str = "sphere.ppm";

/// Fires one ray straight down +z at a unit sphere and logs what it hits.
fn probe_intersection() {
    let sphere = Sphere::new(Point3::new(0.0, 0.0, 5.0), 1.0);
    let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, 1.0));

    match sphere.intersect(&ray, Interval::new(T_MIN, T_MAX)) {
        Some(rec) => info!(
            "probe hit at t={} point=({}) normal=({})",
            rec.t, rec.point, rec.normal
        ),
        None => info!("probe missed"),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output = env::args().nth(1).unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    probe_intersection();

    let camera = PinholeCamera::new(
        CAMERA_POSITION,
        CAMERA_FORWARD,
        WORLD_UP,
        FOV_DEGREES,
        IMAGE_WIDTH as f64 / IMAGE_HEIGHT as f64,
        FOCAL_LENGTH,
    );
    let sphere = Sphere::new(SPHERE_CENTER, SPHERE_RADIUS);
    let mut buffer = PixelBuffer::new(IMAGE_WIDTH, IMAGE_HEIGHT);

    info!("Image: {IMAGE_WIDTH}x{IMAGE_HEIGHT}, fov {FOV_DEGREES} deg");
    let start = Instant::now();
    render(&camera, &sphere, &mut buffer);
    info!("Render finished in {:.2?}", start.elapsed());

    match save_ppm(&output, &buffer) {
        Ok(()) => {
            info!("Image saved as {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to save {output}: {e}");
            ExitCode::FAILURE
        }
    }
}
