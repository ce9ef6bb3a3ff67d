//! Constant-velocity drift with boundary reflection
//!
//! Advances every cube by one step and flips velocity signs at the
//! `±bound` walls. The reflection check runs on the already-updated
//! position and never clamps, so a cube can sit up to one velocity step
//! outside the bound before drifting back in. That overshoot is the
//! intended behavior, not an integration error.

use super::states::System;
use super::params::Parameters;

/// Advance the system by one tick.
///
/// Per cube: `x += vx`, `y += vy`, `z` untouched. Then, independently per
/// axis, negate the velocity component when the new coordinate lies
/// strictly outside `[-bound, bound]`. Both axis checks always run.
pub fn drift_step(sys: &mut System, params: &Parameters) {
    let bound = params.bound;

    for cube in sys.cubes.iter_mut() {
        cube.x.x += cube.v.x;
        cube.x.y += cube.v.y;

        if cube.x.x > bound || cube.x.x < -bound {
            cube.v.x = -cube.v.x;
        }
        if cube.x.y > bound || cube.x.y < -bound {
            cube.v.y = -cube.v.y;
        }
    }

    sys.ticks += 1;
}
