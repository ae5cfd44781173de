use crate::prelude::*;
use std::sync::{Arc, Mutex};

/// Returns scripted values in the order they were given.
pub struct FakeRandom {
    ints: Mutex<Vec<i32>>,
    reals: Mutex<Vec<f64>>,
}

impl FakeRandom {
    pub fn new(ints: Vec<i32>, reals: Vec<f64>) -> Self {
        let mut ints = ints;
        let mut reals = reals;
        ints.reverse();
        reals.reverse();

        Self { ints: Mutex::new(ints), reals: Mutex::new(reals) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        let value = self.ints.lock().unwrap().pop().expect("no more scripted ints");
        assert!((min..=max).contains(&value), "scripted int {value} is out of [{min}, {max}]");

        value
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        assert!(min < max);
        self.reals.lock().unwrap().pop().expect("no more scripted reals")
    }
}

pub fn create_test_random() -> Arc<dyn Random> {
    Arc::new(DefaultRandom::new_with_seed(0))
}

pub fn create_test_environment() -> Environment {
    Environment::new_with_seed(0)
}

/// Creates a logger which collects messages into shared vector.
pub fn create_collecting_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let sink = messages.clone();

    (Arc::new(move |msg: &str| sink.lock().unwrap().push(msg.to_string())), messages)
}
