#![allow(dead_code)]

use std::collections::VecDeque;

use frandom_core::RandomSource;

/// Replays a fixed list of words and panics once it runs dry.
#[derive(Debug, Default)]
pub struct SequenceRng {
    words: VecDeque<u32>,
    pub drawn: usize,
}

impl SequenceRng {
    pub fn new(words: impl IntoIterator<Item = u32>) -> Self {
        Self {
            words: words.into_iter().collect(),
            drawn: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        self.drawn += 1;
        self.words.pop_front().expect("scripted sequence exhausted")
    }
}
