//! Synthetic population and access workload, pre-computed before the run.
//!
//! The core consumes the result as a read-only tick-indexed event table; no
//! event generation happens mid-run. Population and workload use separate
//! seeded RNGs so either can be varied independently.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use lethe_core::config::SimConfig;
use lethe_core::model::{AccessEvent, Role, Sensitivity, TrackedObject};

/// Baseline access profile assigned to each object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Hot,
    Warm,
    Cold,
}

/// Assign profiles from the population RNG: hot/warm fractions from config,
/// the remainder cold.
pub fn assign_profiles(rng: &mut StdRng, count: usize, config: &SimConfig) -> Vec<Profile> {
    let hot = config.workload.hot_fraction;
    let warm = config.workload.warm_fraction;
    (0..count)
        .map(|_| {
            let u: f64 = rng.gen();
            if u < hot {
                Profile::Hot
            } else if u < hot + warm {
                Profile::Warm
            } else {
                Profile::Cold
            }
        })
        .collect()
}

/// Build the tracked population. Three draws per object, in order:
/// sensitivity selector, business value, initial-trust offset
/// (trust = 0.55 + 0.25u). The ground-truth keep label is
/// businessValue > 0.60 or a Hot profile; decision logic never reads it.
pub fn build_population(
    rng: &mut StdRng,
    profiles: &[Profile],
    config: &SimConfig,
) -> Vec<TrackedObject> {
    profiles
        .iter()
        .enumerate()
        .map(|(id, &profile)| {
            let sensitivity = Sensitivity::sample(rng.gen());
            let business_value: f64 = rng.gen();
            let initial_trust = 0.55 + 0.25 * rng.gen::<f64>();
            let keep_label = business_value > 0.60 || profile == Profile::Hot;
            TrackedObject::new(
                id as u32,
                sensitivity,
                initial_trust,
                business_value,
                0,
                keep_label,
                config.monitor.window_size,
            )
        })
        .collect()
}

/// Generates the tick-indexed access-event table.
///
/// Baseline traffic per profile, rare suspicious background noise against
/// sensitive objects, and periodic attack bursts that target the (read-only)
/// sensitive-id set with enough suspicious events to trip burst detection.
pub struct WorkloadGenerator {
    rng: StdRng,
    config: SimConfig,
}

impl WorkloadGenerator {
    pub fn new(config: SimConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.workload.seed),
            config,
        }
    }

    pub fn generate(
        &mut self,
        objects: &[TrackedObject],
        profiles: &[Profile],
    ) -> Vec<Vec<AccessEvent>> {
        let duration = self.config.run.duration;
        let wl = self.config.workload.clone();
        let mut by_tick: Vec<Vec<AccessEvent>> = vec![Vec::new(); duration as usize + 1];

        // Sensitive ids for attack targeting; read-only during the run.
        let sensitive_ids: Vec<u32> = objects
            .iter()
            .filter(|o| o.sensitivity.is_sensitive())
            .map(|o| o.id)
            .collect();

        for t in 0..duration {
            for (object, &profile) in objects.iter().zip(profiles) {
                let u: f64 = self.rng.gen();
                let hit = match profile {
                    Profile::Hot => u < wl.hot_access_prob,
                    Profile::Warm => t % wl.warm_period == 0 && u < wl.warm_access_prob,
                    Profile::Cold => u < wl.cold_access_prob,
                };
                if hit {
                    let event = self.legit_event(t, object);
                    by_tick[t as usize].push(event);
                }

                // Sparse background of suspicious attempts against
                // sensitive objects.
                if self.rng.gen::<f64>() < wl.noise_prob && object.sensitivity.is_sensitive() {
                    let event = self.suspicious_event(t, object);
                    by_tick[t as usize].push(event);
                }
            }

            // Attack bursts: 2 suspicious events at each of t, t+1, t+2 per
            // target — 6 events, comfortably above the 5-in-3 predicate.
            if t > 0 && t % wl.burst_interval == 0 && !sensitive_ids.is_empty() {
                let targets = wl.burst_targets.min(sensitive_ids.len());
                debug!(tick = t, targets, "scheduling attack burst");
                for _ in 0..targets {
                    let id = sensitive_ids[self.rng.gen_range(0..sensitive_ids.len())];
                    let object = &objects[id as usize];
                    for dt in 0..=2 {
                        let tt = t + dt;
                        if tt >= duration {
                            continue;
                        }
                        for _ in 0..2 {
                            let event = self.suspicious_event(tt, object);
                            by_tick[tt as usize].push(event);
                        }
                    }
                }
            }
        }

        by_tick
    }

    fn legit_event(&mut self, time: i64, object: &TrackedObject) -> AccessEvent {
        let role = self.pick_legit_role(object);
        let request_score = 0.70 + 0.30 * self.rng.gen::<f64>();
        AccessEvent {
            time,
            object_id: object.id,
            role,
            legitimate: producer_legitimacy(role, object, request_score),
            request_score,
        }
    }

    fn suspicious_event(&mut self, time: i64, object: &TrackedObject) -> AccessEvent {
        let role = self.pick_suspicious_role(object);
        let request_score = 0.05 + 0.45 * self.rng.gen::<f64>();
        AccessEvent {
            time,
            object_id: object.id,
            role,
            legitimate: producer_legitimacy(role, object, request_score),
            request_score,
        }
    }

    /// Role usually compatible with the object's sensitivity rules.
    fn pick_legit_role(&mut self, object: &TrackedObject) -> Role {
        match object.sensitivity {
            Sensitivity::NonSensitive => {
                let u: f64 = self.rng.gen();
                if u < 0.55 {
                    Role::User
                } else if u < 0.75 {
                    Role::Analyst
                } else if u < 0.92 {
                    Role::Service
                } else {
                    Role::Admin
                }
            }
            Sensitivity::Pii => {
                if self.rng.gen::<f64>() < 0.80 {
                    Role::Service
                } else {
                    Role::Admin
                }
            }
            _ => Role::Admin,
        }
    }

    /// Role chosen to violate policy for sensitive objects.
    fn pick_suspicious_role(&mut self, object: &TrackedObject) -> Role {
        if !object.sensitivity.is_sensitive() {
            return if self.rng.gen::<f64>() < 0.7 {
                Role::Service
            } else {
                Role::User
            };
        }
        let u: f64 = self.rng.gen();
        if u < 0.50 {
            Role::User
        } else if u < 0.85 {
            Role::Analyst
        } else {
            Role::Service
        }
    }
}

/// The producer's own legitimacy judgment stored on the event. The monitor
/// re-derives legitimacy independently; for Service the producer applies a
/// stricter score floor.
fn producer_legitimacy(role: Role, object: &TrackedObject, request_score: f64) -> bool {
    match role {
        Role::Admin => true,
        Role::Analyst => !object.sensitivity.is_sensitive() || object.anonymized,
        Role::User => !object.sensitivity.is_sensitive(),
        Role::Service => {
            matches!(
                object.sensitivity,
                Sensitivity::NonSensitive | Sensitivity::Pii
            ) && request_score >= 0.65
        }
    }
}
