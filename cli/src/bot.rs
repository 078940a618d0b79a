use dinopuzzle_core::game::{distance, normalize_angle, rotate_vec, ROTATION_STEP};
use dinopuzzle_core::{is_placed, GameSession};

pub struct SolveConfig {
    pub max_steps: u32,
    pub step_px: f32,
    pub gesture_gap_secs: f64,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_steps: 4000,
            // Below the rotation latch threshold so every step stays a
            // translation.
            step_px: 15.0,
            // Past the double-tap window so consecutive gestures read
            // as independent contacts.
            gesture_gap_secs: 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveReport {
    pub drags: u32,
    pub taps: u32,
    pub elapsed_secs: u64,
    pub complete: bool,
}

/// Simulated wall clock feeding both pointer timestamps and the 1 Hz
/// session timer.
struct Clock {
    now: f64,
    ticked: u64,
}

impl Clock {
    fn new() -> Self {
        Self { now: 0.0, ticked: 0 }
    }

    fn advance(&mut self, secs: f64, session: &mut GameSession) {
        self.now += secs;
        while (self.ticked + 1) as f64 <= self.now {
            session.tick();
            self.ticked += 1;
        }
    }
}

/// Quarter-turn taps needed to bring a scrambled rotation back to zero.
pub fn quarter_taps_to_zero(rot: f32) -> u32 {
    let quarters = (normalize_angle(rot) / ROTATION_STEP).round() as u32 % 4;
    (4 - quarters) % 4
}

// Reaches the piece edges: a tile covering the whole interior still
// leaves an edge candidate uncovered unless it is aligned exactly.
const GRAB_FRACS: [f32; 7] = [0.0, -0.25, 0.25, -0.4, 0.4, -0.5, 0.5];

/// A contact point that actually lands on the piece: its footprint may
/// be partly covered by pieces drawn above it.
fn grab_point(session: &GameSession, piece_id: usize) -> Option<(f32, f32)> {
    let piece = session.pieces().get(piece_id)?;
    let tile = session.rules().tile_size();
    for fy in GRAB_FRACS {
        for fx in GRAB_FRACS {
            let (ox, oy) = rotate_vec(fx * tile, fy * tile, piece.rot);
            let point = (piece.pos.0 + ox, piece.pos.1 + oy);
            if session.piece_at(point.0, point.1) == Some(piece_id) {
                return Some(point);
            }
        }
    }
    None
}

fn tap_rotate(session: &mut GameSession, clock: &mut Clock, point: (f32, f32), gap: f64) {
    session.pointer_down(point.0, point.1, clock.now);
    session.pointer_up();
    clock.advance(0.1, session);
    session.pointer_down(point.0, point.1, clock.now);
    session.pointer_up();
    clock.advance(gap, session);
}

fn drag_step(
    session: &mut GameSession,
    clock: &mut Clock,
    grab: (f32, f32),
    piece_id: usize,
    config: &SolveConfig,
) {
    let (pos, target) = {
        let piece = &session.pieces()[piece_id];
        (piece.pos, piece.target)
    };
    let dist = distance(pos, target);
    session.pointer_down(grab.0, grab.1, clock.now);
    if dist > 0.0 {
        let step = dist.min(config.step_px);
        let dx = (target.0 - pos.0) / dist * step;
        let dy = (target.1 - pos.1) / dist * step;
        session.pointer_move(grab.0 + dx, grab.1 + dy);
    }
    session.pointer_up();
    clock.advance(config.gesture_gap_secs, session);
}

/// Lift every loose piece back above the placed set. Placing a piece
/// raises it to the front, so without this the placed tiles pile up
/// over the loose ones and eventually seal them off.
fn raise_unplaced(session: &mut GameSession, clock: &mut Clock, gap: f64) {
    let threshold = session.rules().snap_threshold;
    let ids: Vec<usize> = session.draw_order().to_vec();
    for id in ids {
        if is_placed(&session.pieces()[id], threshold) {
            continue;
        }
        if let Some(point) = grab_point(session, id) {
            session.pointer_down(point.0, point.1, clock.now);
            session.pointer_up();
            clock.advance(gap, session);
        }
    }
}

fn next_workpiece(session: &GameSession) -> Option<(usize, (f32, f32))> {
    let threshold = session.rules().snap_threshold;
    session
        .draw_order()
        .iter()
        .rev()
        .copied()
        .filter(|&id| !is_placed(&session.pieces()[id], threshold))
        .find_map(|id| grab_point(session, id).map(|grab| (id, grab)))
}

/// Drive a session to completion through the same pointer surface a
/// player uses: quarter-turn tap pairs first, then short drags toward
/// the target until the release snaps.
pub fn solve(session: &mut GameSession, config: &SolveConfig, verbose: bool) -> SolveReport {
    if !session.is_running() {
        session.start();
    }
    let mut clock = Clock::new();
    let mut drags = 0u32;
    let mut taps = 0u32;
    let mut steps = 0u32;
    let mut nudged = false;

    'outer: while !session.is_complete() && steps < config.max_steps {
        let Some((piece_id, first_grab)) = next_workpiece(session) else {
            // Every piece already rests inside tolerance but no release
            // has run since; one settling tap triggers the placement
            // scan.
            if nudged {
                break;
            }
            nudged = true;
            if let Some(&top) = session.draw_order().last() {
                let pos = session.pieces()[top].pos;
                session.pointer_down(pos.0, pos.1, clock.now);
                session.pointer_up();
                clock.advance(config.gesture_gap_secs, session);
                steps += 1;
            }
            continue;
        };

        let needed = quarter_taps_to_zero(session.pieces()[piece_id].rot);
        for tap in 0..needed {
            if steps >= config.max_steps {
                break 'outer;
            }
            let grab = if tap == 0 {
                first_grab
            } else {
                match grab_point(session, piece_id) {
                    Some(point) => point,
                    None => continue 'outer,
                }
            };
            tap_rotate(session, &mut clock, grab, config.gesture_gap_secs);
            taps += 1;
            steps += 1;
        }

        let mut piece_drags = 0u32;
        while session.pieces()[piece_id].pos != session.pieces()[piece_id].target {
            if steps >= config.max_steps {
                break 'outer;
            }
            let Some(point) = grab_point(session, piece_id) else {
                continue 'outer;
            };
            drag_step(session, &mut clock, point, piece_id, config);
            drags += 1;
            piece_drags += 1;
            steps += 1;
        }
        if verbose {
            println!("piece {piece_id}: {needed} taps, {piece_drags} drags");
        }
        if !session.is_complete() {
            raise_unplaced(session, &mut clock, config.gesture_gap_secs);
        }
    }

    SolveReport {
        drags,
        taps,
        elapsed_secs: session.elapsed_secs(),
        complete: session.is_complete(),
    }
}
