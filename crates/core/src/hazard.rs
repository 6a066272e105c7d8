//! Hazard tokens ("qubits").
//!
//! A token is an immutable spawn record. Everything else about it (age,
//! liveness, opacity) is derived from the clock at query time.

use crate::types::GridPos;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardToken {
    position: GridPos,
    spawn_time: f64,
    lifetime: f64,
}

impl HazardToken {
    pub fn new(position: GridPos, spawn_time: f64, lifetime: f64) -> Self {
        Self {
            position,
            spawn_time,
            lifetime,
        }
    }

    pub fn position(&self) -> GridPos {
        self.position
    }

    pub fn spawn_time(&self) -> f64 {
        self.spawn_time
    }

    pub fn lifetime(&self) -> f64 {
        self.lifetime
    }

    pub fn age(&self, now: f64) -> f64 {
        now - self.spawn_time
    }

    pub fn is_alive(&self, now: f64) -> bool {
        self.age(now) < self.lifetime
    }

    /// Opacity in `[0, 1]`, decaying linearly from 1 at spawn to 0 at expiry.
    pub fn fade_alpha(&self, now: f64) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        let frac = (self.age(now) / self.lifetime).clamp(0.0, 1.0);
        (1.0 - frac) as f32
    }

    /// True while alive on `pos`.
    pub fn occupies(&self, pos: GridPos, now: f64) -> bool {
        self.position == pos && self.is_alive(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> HazardToken {
        HazardToken::new(GridPos::new(3, 4), 10.0, 1.2)
    }

    #[test]
    fn test_liveness_window() {
        let t = token();
        assert!(t.is_alive(10.0));
        assert!(t.is_alive(11.19));
        assert!(!t.is_alive(11.2));
        assert!(!t.is_alive(20.0));
    }

    #[test]
    fn test_fade_alpha_decays_linearly() {
        let t = token();
        assert_eq!(t.fade_alpha(10.0), 1.0);
        assert!((t.fade_alpha(10.6) - 0.5).abs() < 1e-6);
        assert_eq!(t.fade_alpha(11.2), 0.0);
        assert_eq!(t.fade_alpha(50.0), 0.0);
    }

    #[test]
    fn test_fade_alpha_clamps_before_spawn() {
        // A clock earlier than spawn time still reports full opacity.
        assert_eq!(token().fade_alpha(5.0), 1.0);
    }

    #[test]
    fn test_zero_lifetime_is_never_alive() {
        let t = HazardToken::new(GridPos::new(0, 0), 1.0, 0.0);
        assert!(!t.is_alive(1.0));
        assert_eq!(t.fade_alpha(1.0), 0.0);
    }

    #[test]
    fn test_occupies() {
        let t = token();
        assert!(t.occupies(GridPos::new(3, 4), 10.5));
        assert!(!t.occupies(GridPos::new(4, 4), 10.5));
        assert!(!t.occupies(GridPos::new(3, 4), 12.0));
    }
}
