use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Picks responses uniformly at random. Every pick is independent, so repeats are possible.
pub struct Responder<R = StdRng>(R);

impl Responder<StdRng> {
    pub fn from_entropy() -> Self {
        Responder::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Responder::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Responder<R> {
    pub fn new(rng: R) -> Self {
        Responder(rng)
    }

    pub fn respond<'a>(&mut self, responses: &'a [String]) -> Option<&'a str> {
        responses.choose(&mut self.0).map(String::as_str)
    }
}
