use std::f32::consts::{FRAC_PI_2, PI, TAU};

pub const PUZZLE_SEED: u32 = 0xD1A0_5EED;

pub const BOARD_SIZE_DEFAULT: f32 = 600.0;

pub const SNAP_DISTANCE_RATIO: f32 = 0.25;

pub const ROTATION_STEP: f32 = FRAC_PI_2;
pub const ROTATION_PLACE_TOLERANCE: f32 = 0.1;

pub const ROTATE_DISTANCE_THRESHOLD: f32 = 20.0;
pub const DOUBLE_TAP_WINDOW_SECS: f64 = 0.3;
pub const DOUBLE_TAP_SLOP: f32 = 20.0;

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

pub fn rand_range(seed: u32, salt: u32, min: f32, max: f32) -> f32 {
    min + (max - min) * rand_unit(seed, salt)
}

pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a < 0.0 {
        a += TAU;
    }
    a
}

pub fn angle_delta(target: f32, current: f32) -> f32 {
    let mut diff = normalize_angle(target - current);
    if diff > PI {
        diff -= TAU;
    }
    diff
}

pub fn angle_matches(a: f32, b: f32, tolerance: f32) -> bool {
    angle_delta(a, b).abs() <= tolerance
}

pub fn rotate_vec(x: f32, y: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}

pub fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}
