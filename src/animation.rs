//! Tick-driven animation state for the jumping lamp and the fireplace.
//!
//! One call to [`JumpAnimation::advance`] is one frame of the fixed-rate
//! timer. The jump timer runs from 1 to 360, which is half a lap of the room
//! and covers [`JUMP_SEGMENTS`] alternating airborne and grounded segments.

/// Number of jumps per lap of the room.
pub const JUMP_SEGMENTS: u32 = 20;
/// Degrees travelled around the room per jump.
pub const JUMP_ANGLE: f64 = (360 / JUMP_SEGMENTS) as f64;

pub const INITIAL_LOWER_ROT: f64 = -30.0;
pub const INITIAL_UPPER_ROT: f64 = 70.0;

const SEGMENT_COEFFICIENT: f64 = 0.5 * JUMP_SEGMENTS as f64;
const LOWER_ROT_AMPLITUDE: f64 = 7.0;
const UPPER_ROT_AMPLITUDE: f64 = -7.0;
const BASE_ROT_AMPLITUDE: f64 = -3.0;
const CONE_ROT_AMPLITUDE: f64 = 3.0;
const ROT_FREQ: f64 = 2.0;
const ARM_BIG_COEFFICIENT: f64 = 1.5;
const HEIGHT_BIG_COEFFICIENT: f64 = 2.0;
const BASE_BIG_COEFFICIENT: f64 = 2.0;

/// Joint angles in degrees handed to the lamp rig.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LampPose {
    pub lower_rot: f64,
    pub upper_rot: f64,
    pub cone_vert_rot: f64,
    pub cone_hor_rot: f64,
    pub base_rot: f64,
}

impl Default for LampPose {
    fn default() -> Self {
        Self {
            lower_rot: INITIAL_LOWER_ROT,
            upper_rot: INITIAL_UPPER_ROT,
            cone_vert_rot: 0.0,
            cone_hor_rot: 0.0,
            base_rot: 0.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct JumpAnimation {
    rotate: f64,
    delta_y: f64,
    pose: LampPose,
    jump_stage: u32,
    segment_count: u32,
    jump_timer: f64,
}

impl JumpAnimation {
    pub fn new() -> Self {
        let mut animation = Self {
            rotate: 0.0,
            delta_y: 0.0,
            pose: LampPose::default(),
            jump_stage: 1,
            segment_count: 0,
            jump_timer: 0.0,
        };
        animation.reset();
        animation
    }

    /// Puts the lamp back at its starting point, just before a big jump.
    pub fn reset(&mut self) {
        self.rotate = 0.0;
        self.delta_y = 0.0;
        self.pose = LampPose::default();
        self.jump_stage = 1;
        self.segment_count = 0;
        self.jump_timer = 361.0 - JUMP_ANGLE;
    }

    /// Angle in degrees the lamp has travelled around the room, in `[0, 360)`.
    pub fn rotate(&self) -> f64 {
        self.rotate
    }

    /// Height of the lamp above the floor before global scaling.
    pub fn delta_y(&self) -> f64 {
        self.delta_y
    }

    pub fn pose(&self) -> &LampPose {
        &self.pose
    }

    pub fn jump_timer(&self) -> f64 {
        self.jump_timer
    }

    pub fn jump_stage(&self) -> u32 {
        self.jump_stage
    }

    pub fn segment_count(&self) -> u32 {
        self.segment_count
    }

    /// Whether the next tick belongs to the high jump over an obstacle.
    pub fn is_big_jump(&self) -> bool {
        self.jump_timer <= JUMP_ANGLE || self.jump_timer >= 360.0 - JUMP_ANGLE
    }

    /// Advances the jump by one tick.
    ///
    /// Jump height scales with `global_size`. A timer past 360 is wrapped
    /// back without moving the lamp, so that tick leaves the pose untouched.
    pub fn advance(&mut self, global_size: f64) {
        if self.jump_timer <= 360.0 {
            let mut jump_amplitude = 2.0 * global_size;
            let mut lower_amplitude = LOWER_ROT_AMPLITUDE;
            let mut base_amplitude = BASE_ROT_AMPLITUDE;
            if self.is_big_jump() {
                lower_amplitude *= ARM_BIG_COEFFICIENT;
                base_amplitude *= BASE_BIG_COEFFICIENT;
                jump_amplitude *= HEIGHT_BIG_COEFFICIENT;
            }

            let phase = self.jump_timer * SEGMENT_COEFFICIENT;
            let oscillation = (phase * ROT_FREQ).to_radians();

            let lower_change;
            let upper_change;
            let mut base_change = 0.0;
            self.delta_y = jump_amplitude * phase.to_radians().sin();
            if self.delta_y > 0.0 {
                lower_change = lower_amplitude * oscillation.sin();
                upper_change = UPPER_ROT_AMPLITUDE * oscillation.sin();
                base_change = base_amplitude * oscillation.sin();
                self.rotate += JUMP_ANGLE / 18.0;
            } else {
                // on the ground the arms keep flexing, the base stays put
                self.delta_y = 0.0;
                lower_change = lower_amplitude * oscillation.cos();
                upper_change = UPPER_ROT_AMPLITUDE * oscillation.cos();
            }
            let cone_change = CONE_ROT_AMPLITUDE * oscillation.sin();

            self.jump_stage += 1;
            if f64::from(self.jump_stage) == JUMP_ANGLE + 1.0 {
                self.jump_stage = 1;
                self.segment_count += 1;
                // rounding drifts the travelled angle, snap it once per jump
                if self.segment_count % 2 == 0
                    && 2.0 * self.rotate / f64::from(self.segment_count) != JUMP_ANGLE
                {
                    self.rotate = f64::from(self.segment_count / 2) * JUMP_ANGLE;
                }
            }
            if self.segment_count == 2 * JUMP_SEGMENTS + 1 {
                self.segment_count = 1;
            }

            self.pose.lower_rot += lower_change;
            self.pose.upper_rot += upper_change;
            self.pose.base_rot += base_change;
            self.pose.cone_vert_rot += cone_change;
            self.jump_timer += 1.0;
        } else {
            self.jump_timer -= 360.0;
        }

        if self.rotate >= 360.0 {
            self.rotate -= 360.0;
        }
    }
}

impl Default for JumpAnimation {
    fn default() -> Self {
        Self::new()
    }
}

/// Cycles through the fireplace frames, one per tick.
#[derive(Clone, Debug, Default)]
pub struct FireAnimation {
    frame: usize,
}

impl FireAnimation {
    pub const FRAMES: usize = 4;

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % Self::FRAMES;
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }
}
