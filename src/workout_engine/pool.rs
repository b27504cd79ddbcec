use rand::Rng;

use crate::workout_engine::{models::Exercise, shuffle::shuffle};

/// The exercises of one category that are still eligible in the current
/// exhaustion cycle.
///
/// Starts empty. Whenever a draw finds it empty it is refilled with a freshly
/// shuffled copy of the full exercise list, so no exercise repeats until every
/// other one in the category has been drawn since the last refill. The pool
/// only holds references; the catalog itself is never reordered.
pub struct DrawPool<'a> {
    exercises: &'a [Exercise],
    remaining: Vec<&'a Exercise>,
    refills: usize,
}

impl<'a> DrawPool<'a> {
    pub fn new(exercises: &'a [Exercise]) -> Self {
        DrawPool { exercises, remaining: Vec::with_capacity(exercises.len()), refills: 0 }
    }

    /// Draw one exercise uniformly from the pool, refilling first if needed.
    /// Returns `None` only when the category has no exercises at all.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&'a Exercise> {
        if self.remaining.is_empty() {
            self.refill(rng);
        }
        if self.remaining.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(idx))
    }

    /// Exercises left before the next refill.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// How many times the pool has been (re)filled.
    pub fn refills(&self) -> usize {
        self.refills
    }

    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let exercises = self.exercises;
        self.remaining.extend(exercises.iter());
        shuffle(&mut self.remaining, rng);
        self.refills += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn exercises(names: &[&str]) -> Vec<Exercise> {
        names.iter().map(|n| Exercise::new(*n, format!("{n} description"))).collect()
    }

    #[test]
    fn new_pool_is_empty_until_first_draw() {
        let list = exercises(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = DrawPool::new(&list);
        assert_eq!(pool.remaining(), 0);
        assert_eq!(pool.refills(), 0);

        pool.draw(&mut rng).unwrap();
        assert_eq!(pool.remaining(), 2);
        assert_eq!(pool.refills(), 1);
    }

    #[test]
    fn each_cycle_draws_every_exercise_once() {
        let list = exercises(&["a", "b", "c", "d", "e"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = DrawPool::new(&list);

        for cycle in 1..=4 {
            let drawn: HashSet<&str> = (0..list.len())
                .map(|_| pool.draw(&mut rng).unwrap().name.as_str())
                .collect();
            assert_eq!(drawn.len(), list.len(), "duplicate inside cycle {cycle}");
            assert_eq!(pool.remaining(), 0);
            assert_eq!(pool.refills(), cycle);
        }
    }

    #[test]
    fn single_exercise_refills_every_draw() {
        let list = exercises(&["only"]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = DrawPool::new(&list);
        for _ in 0..3 {
            assert_eq!(pool.draw(&mut rng).unwrap().name, "only");
        }
        assert_eq!(pool.refills(), 3);
    }

    #[test]
    fn empty_category_draws_nothing() {
        let list: Vec<Exercise> = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = DrawPool::new(&list);
        assert!(pool.draw(&mut rng).is_none());
    }

    #[test]
    fn drawing_leaves_catalog_order_intact() {
        let list = exercises(&["a", "b", "c", "d"]);
        let before = list.clone();
        let mut rng = StdRng::seed_from_u64(11);
        let mut pool = DrawPool::new(&list);
        for _ in 0..10 {
            pool.draw(&mut rng);
        }
        assert_eq!(list, before);
    }
}
