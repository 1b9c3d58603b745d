//! Per-family transition tables and timing.

use crate::behavior::StateKind;
use crate::pet::Family;

/// Every family starts, and falls back, here.
pub const START: StateKind = StateKind::SitIdle;

/// Frames a state lasts before the timer fires, before randomisation.
pub fn hold_frames(state: StateKind) -> u32 {
    match state {
        StateKind::SitIdle => 50,
        StateKind::Stand => 60,
        StateKind::Walk => 60,
        StateKind::Run => 130,
        StateKind::Lie => 50,
        // Climbing and falling end when they reach the wall top or the floor;
        // the timer is only a cap.
        StateKind::ClimbWall => 400,
        StateKind::WallHang => 50,
        StateKind::JumpDown => 400,
        StateKind::Land => 10,
        StateKind::Swipe => 15,
        StateKind::Chase => 600,
        StateKind::IdleWithBall => 30,
        StateKind::ChaseFriend => 300,
        StateKind::IdleWithFriend => 60,
        StateKind::Dying => 40,
    }
}

/// Multiplier on the kind's base speed while in `state`.
pub fn speed_factor(state: StateKind) -> f32 {
    match state {
        StateKind::Walk => 1.0,
        StateKind::Run | StateKind::Chase | StateKind::ChaseFriend => 1.6,
        StateKind::ClimbWall => 0.6,
        StateKind::JumpDown => 2.0,
        _ => 0.0,
    }
}

/// Timer-driven successors of `state`, with relative weights.
/// Reactive states (swipe, chase, friend states, dying) have none.
pub fn successors(family: Family, state: StateKind) -> &'static [(StateKind, u32)] {
    use StateKind::*;
    match (family, state) {
        (Family::Climber, SitIdle) => &[(Walk, 4), (Run, 2), (Lie, 1)],
        (Family::Climber, Walk) => &[(SitIdle, 3), (Walk, 2), (Run, 1), (ClimbWall, 3)],
        (Family::Climber, Run) => &[(SitIdle, 2), (Walk, 2), (ClimbWall, 3)],
        (Family::Climber, Lie) => &[(SitIdle, 1), (Walk, 1)],
        (Family::Climber, ClimbWall) => &[(WallHang, 1)],
        (Family::Climber, WallHang) => &[(JumpDown, 1)],
        (Family::Climber, JumpDown) => &[(Land, 1)],
        (Family::Climber, Land) => &[(SitIdle, 1), (Walk, 1)],

        (Family::Walker, SitIdle) => &[(Walk, 4), (Run, 2), (Lie, 1)],
        (Family::Walker, Walk) => &[(SitIdle, 3), (Walk, 2), (Run, 1), (Lie, 1)],
        (Family::Walker, Run) => &[(SitIdle, 2), (Walk, 2)],
        (Family::Walker, Lie) => &[(SitIdle, 1), (Walk, 1)],

        (Family::Crawler, SitIdle) => &[(Walk, 3), (Lie, 1)],
        (Family::Crawler, Walk) => &[(SitIdle, 2), (Walk, 2), (Lie, 1)],
        (Family::Crawler, Lie) => &[(SitIdle, 1), (Walk, 2)],

        (Family::Static, SitIdle) => &[(Stand, 1)],
        (Family::Static, Stand) => &[(SitIdle, 1)],

        _ => &[],
    }
}

/// Weighted choice among the options that pass `available`.
pub fn pick(
    options: &[(StateKind, u32)],
    available: impl Fn(StateKind) -> bool,
    rng: &mut fastrand::Rng,
) -> Option<StateKind> {
    let total: u32 = options
        .iter()
        .filter(|(s, _)| available(*s))
        .map(|(_, w)| *w)
        .sum();
    if total == 0 {
        return None;
    }

    let mut roll = rng.u32(0..total);
    for &(state, weight) in options {
        if !available(state) {
            continue;
        }
        if roll < weight {
            return Some(state);
        }
        roll -= weight;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAMILIES: [Family; 4] = [Family::Climber, Family::Walker, Family::Crawler, Family::Static];

    #[test]
    fn start_state_has_successors_in_every_family() {
        for family in FAMILIES {
            assert!(!successors(family, START).is_empty(), "{family:?}");
        }
    }

    #[test]
    fn swipe_is_never_timer_reachable() {
        for family in FAMILIES {
            for state in StateKind::ALL {
                assert!(successors(family, state)
                    .iter()
                    .all(|(s, _)| *s != StateKind::Swipe && *s != StateKind::Dying));
            }
        }
    }

    #[test]
    fn dying_has_no_way_out() {
        for family in FAMILIES {
            assert!(successors(family, StateKind::Dying).is_empty());
        }
    }

    #[test]
    fn pick_skips_unavailable_options() {
        let mut rng = fastrand::Rng::with_seed(7);
        let options = [(StateKind::Walk, 5), (StateKind::ClimbWall, 5)];
        for _ in 0..100 {
            let got = pick(&options, |s| s != StateKind::ClimbWall, &mut rng);
            assert_eq!(got, Some(StateKind::Walk));
        }
        assert_eq!(pick(&options, |_| false, &mut rng), None);
    }

    #[test]
    fn pick_roughly_follows_weights() {
        let mut rng = fastrand::Rng::with_seed(42);
        let options = [(StateKind::Walk, 3), (StateKind::SitIdle, 1)];
        let walks = (0..4000)
            .filter(|_| pick(&options, |_| true, &mut rng) == Some(StateKind::Walk))
            .count();
        assert!((2700..3300).contains(&walks), "walks = {walks}");
    }
}
