// tests/core.rs
use team_balance::{Progress, refine_det};

/* ──────────────────────────────────────────────────────────────────────────
1) Countdown — stops on the first step that changes nothing
────────────────────────────────────────────────────────────────────────── */

#[test]
fn stops_at_first_non_improving_step() {
    let mut x = 10_i32;
    let progress = refine_det(
        &mut x,
        |x| {
            if *x > 0 {
                *x -= 1;
                true
            } else {
                false
            }
        },
        1_000,
    );
    assert_eq!(x, 0);
    assert_eq!(
        progress,
        Progress {
            iters: 11,
            improved: 10,
            converged: true
        }
    );
}

/* ──────────────────────────────────────────────────────────────────────────
2) Budget — a step that always "improves" is cut off at max_iters
────────────────────────────────────────────────────────────────────────── */

#[test]
fn budget_bounds_a_never_ending_step() {
    let mut calls = 0usize;
    let progress = refine_det(
        &mut calls,
        |c| {
            *c += 1;
            true
        },
        300,
    );
    assert_eq!(calls, 300);
    assert_eq!(progress.iters, 300);
    assert_eq!(progress.improved, 300);
    assert!(!progress.converged);
}

#[test]
fn zero_budget_never_calls_step() {
    let mut touched = false;
    let progress = refine_det(
        &mut touched,
        |t| {
            *t = true;
            true
        },
        0,
    );
    assert!(!touched);
    assert_eq!(progress, Progress::default());
}

/* ──────────────────────────────────────────────────────────────────────────
3) RPS — gradient step toward uniform, stop once within tolerance
────────────────────────────────────────────────────────────────────────── */

#[derive(Clone, Debug)]
struct Prob3 {
    r: f64,
    p: f64,
    s: f64,
}

impl Prob3 {
    fn uniform() -> Self {
        Prob3 {
            r: 1.0 / 3.0,
            p: 1.0 / 3.0,
            s: 1.0 / 3.0,
        }
    }
    fn normalize(mut self) -> Self {
        let sum = self.r + self.p + self.s;
        if sum > 0.0 {
            self.r /= sum;
            self.p /= sum;
            self.s /= sum;
        }
        self
    }
    fn l1(&self, other: &Prob3) -> f64 {
        (self.r - other.r).abs() + (self.p - other.p).abs() + (self.s - other.s).abs()
    }
}

fn step_toward_uniform(p: &Prob3, k: f64) -> Prob3 {
    let u = Prob3::uniform();
    Prob3 {
        r: p.r - k * (p.r - u.r),
        p: p.p - k * (p.p - u.p),
        s: p.s - k * (p.s - u.s),
    }
    .normalize()
}

#[test]
fn rps_converges_to_uniform() {
    let mut state = Prob3 {
        r: 0.8,
        p: 0.15,
        s: 0.05,
    };

    let progress = refine_det(
        &mut state,
        |p| {
            if p.l1(&Prob3::uniform()) < 1e-6 {
                return false;
            }
            *p = step_toward_uniform(p, 0.2);
            true
        },
        10_000,
    );

    assert!(progress.converged, "ran out of budget: {:?}", progress);
    assert!(
        state.l1(&Prob3::uniform()) < 1e-6,
        "did not converge: {:?}",
        state
    );
}
