use crate::core::random::RandomStream;
use std::collections::VecDeque;

/// Replays a fixed list of draws and panics once the list is exhausted.
#[derive(Debug, Default)]
pub(crate) struct ScriptedStream {
    reals: VecDeque<f64>,
    ints: VecDeque<usize>,
    pub real_draws: usize,
    pub int_draws: usize,
}

impl ScriptedStream {
    pub fn new(reals: &[f64], ints: &[usize]) -> Self {
        Self {
            reals: reals.iter().copied().collect(),
            ints: ints.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn remaining_reals(&self) -> usize {
        self.reals.len()
    }
}

impl RandomStream for ScriptedStream {
    fn uniform_real(&mut self) -> f64 {
        self.real_draws += 1;
        self.reals.pop_front().expect("scripted stream ran out of reals")
    }

    fn uniform_int_in_range(&mut self, lo: usize, hi: usize) -> usize {
        self.int_draws += 1;
        let value = self.ints.pop_front().expect("scripted stream ran out of integers");
        assert!((lo..=hi).contains(&value), "scripted id {value} outside [{lo}, {hi}]");
        value
    }
}

/// Forwards to another stream and records every draw.
#[derive(Debug)]
pub(crate) struct RecordingStream<S> {
    inner: S,
    pub reals: Vec<f64>,
    /// `(lo, hi, drawn)` for every integer draw.
    pub ints: Vec<(usize, usize, usize)>,
}

impl<S: RandomStream> RecordingStream<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            reals: Vec::new(),
            ints: Vec::new(),
        }
    }
}

impl<S: RandomStream> RandomStream for RecordingStream<S> {
    fn uniform_real(&mut self) -> f64 {
        let u = self.inner.uniform_real();
        self.reals.push(u);
        u
    }

    fn uniform_int_in_range(&mut self, lo: usize, hi: usize) -> usize {
        let value = self.inner.uniform_int_in_range(lo, hi);
        self.ints.push((lo, hi, value));
        value
    }
}
