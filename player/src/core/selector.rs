//! Deterministic mission selection.
//!
//! Both selectors are greedy over a single turn's listing. Ties always go to the
//! task listed first.

use crate::core::risk::RiskBand;
use crate::core::types::Task;

/// Tiers never picked by the fallback selector, counted from the riskiest end.
const FALLBACK_EXCLUDED_TIERS: usize = 2;

/// Risk tiers allowed by [`select_best`] at the given life count.
pub fn allowed_tiers(lives: u32) -> &'static [RiskBand] {
    match lives {
        0 | 1 => RiskBand::safest(2),
        2 => RiskBand::safest(3),
        _ => RiskBand::safest(4),
    }
}

/// Returns true if a task of this risk band may be attempted with `lives` left.
///
/// A missing risk band is never safe.
pub fn is_safe_enough(risk: Option<RiskBand>, lives: u32) -> bool {
    match risk {
        Some(band) => allowed_tiers(lives).contains(&band),
        None => false,
    }
}

/// Reward weighted by the task's success probability.
pub fn expected_value(task: &Task) -> f64 {
    let probability = task.risk.map_or(0.0, RiskBand::probability);
    f64::from(task.reward) * probability
}

/// Pick the live, safe task with the highest expected value.
pub fn select_best(tasks: &[Task], lives: u32) -> Option<&Task> {
    first_max_by(
        tasks
            .iter()
            .filter(|task| task.is_live())
            .filter(|task| is_safe_enough(task.risk, lives)),
        expected_value,
    )
}

/// Pick the live task most likely to succeed, ignoring the safety filter.
///
/// Only the two most dangerous tiers are excluded. A task without a known risk
/// band stays eligible and ranks at probability 0.0, below any labelled tier.
pub fn select_fallback(tasks: &[Task]) -> Option<&Task> {
    first_max_by(
        tasks.iter().filter(|task| task.is_live()).filter(|task| {
            !task
                .risk
                .is_some_and(|band| band.is_among_most_dangerous(FALLBACK_EXCLUDED_TIERS))
        }),
        |task| task.risk.map_or(0.0, RiskBand::probability),
    )
}

fn first_max_by<'a, I, F>(tasks: I, score: F) -> Option<&'a Task>
where
    I: Iterator<Item = &'a Task>,
    F: Fn(&Task) -> f64,
{
    let mut best: Option<(&Task, f64)> = None;
    for task in tasks {
        let value = score(task);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((task, value)),
        }
    }
    best.map(|(task, _)| task)
}
